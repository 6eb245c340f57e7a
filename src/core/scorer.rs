//! Duplicate-aware scoring of a guess against a solution

use super::feedback::{Feedback, Verdict};
use super::word::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Calculate the feedback when `guess` is played against `solution`
///
/// This implements Wordle's exact feedback rules, including proper handling
/// of duplicate letters.
///
/// # Algorithm
/// 1. First pass: mark exact position matches `Correct`; those solution letters are consumed
/// 2. Count the solution letters at every unconsumed position
/// 3. Second pass: left to right, a remaining letter with count > 0 is `Present`
///    (and decrements the count); anything else is `Absent`
///
/// Scoring is not symmetric: `score(a, b)` and `score(b, a)` usually differ.
///
/// # Examples
/// ```
/// use wordle_engine::core::{score, Verdict, Word};
///
/// let guess = Word::new("trace").unwrap();
/// let solution = Word::new("crane").unwrap();
///
/// // T(absent) R(correct) A(correct) C(present) E(correct)
/// assert_eq!(
///     score(&guess, &solution).verdicts(),
///     &[Verdict::Absent, Verdict::Correct, Verdict::Correct, Verdict::Present, Verdict::Correct]
/// );
/// ```
#[must_use]
pub fn score(guess: &Word, solution: &Word) -> Feedback {
    let mut verdicts = [Verdict::Absent; WORD_LENGTH];
    let mut unclaimed: FxHashMap<u8, u8> = FxHashMap::default();

    // First pass: exact matches; everything else goes into the pool
    for (i, (&g, &s)) in guess.letters().iter().zip(solution.letters()).enumerate() {
        if g == s {
            verdicts[i] = Verdict::Correct;
        } else {
            *unclaimed.entry(s).or_insert(0) += 1;
        }
    }

    // Second pass: claim from the pool left to right
    for (verdict, letter) in verdicts.iter_mut().zip(guess.letters()) {
        if *verdict == Verdict::Correct {
            continue;
        }
        if let Some(count) = unclaimed.get_mut(letter)
            && *count > 0
        {
            *verdict = Verdict::Present;
            *count -= 1;
        }
    }

    Feedback::new(verdicts)
}
