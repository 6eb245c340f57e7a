//! Replay a fixed guess sequence against a known solution

use crate::core::{Feedback, Word};
use crate::game::{Game, GameState};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};

/// One guess of a replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayStep {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of replaying a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayResult {
    pub solution: Word,
    pub steps: Vec<ReplayStep>,
    pub state: GameState,
    /// Candidates left after the last guess
    pub remaining: Vec<Word>,
}

/// Play `guesses` in order against `solution`
///
/// Every guess must be an allowed guess. The candidate pool is the
/// dictionary's solution list.
///
/// # Errors
///
/// Returns an error if the solution is malformed, if any guess is malformed or
/// not allowed, or if guesses continue after the game has ended.
pub fn replay_game<S: AsRef<str>>(
    solution: &str,
    guesses: &[S],
    dictionary: &Dictionary,
) -> Result<ReplayResult> {
    let solution = Word::new(&solution.trim().to_lowercase()).context("invalid solution")?;
    let mut game = Game::new(solution, dictionary.allowed_solutions());
    let mut steps = Vec::with_capacity(guesses.len());

    for (i, text) in guesses.iter().enumerate() {
        let text = text.as_ref().trim().to_lowercase();
        let guess = dictionary
            .parse_guess(&text)
            .with_context(|| format!("guess {} is not playable", i + 1))?;

        let candidates_before = game.remaining_candidates().len();
        let feedback = game
            .play_guess(guess)
            .with_context(|| format!("cannot play guess {} ({guess})", i + 1))?;

        steps.push(ReplayStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: game.remaining_candidates().len(),
        });
    }

    Ok(ReplayResult {
        solution,
        steps,
        state: game.state(),
        remaining: game.remaining_candidates().to_vec(),
    })
}
