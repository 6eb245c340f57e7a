//! One-off scoring of a guess against a solution

use crate::core::{Feedback, Word, WordError, score};

/// A scored pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub solution: Word,
    pub feedback: Feedback,
}

/// Score raw text without any dictionary check
///
/// Input is lowercased before validation.
///
/// # Errors
///
/// Returns the `WordError` for whichever word is malformed.
pub fn score_words(guess: &str, solution: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(&guess.trim().to_lowercase())?;
    let solution = Word::new(&solution.trim().to_lowercase())?;

    Ok(ScoreResult {
        guess,
        solution,
        feedback: score(&guess, &solution),
    })
}
