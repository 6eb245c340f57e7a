//! Candidate narrowing
//!
//! A candidate stays possible iff re-scoring every past guess against it
//! reproduces exactly the feedback that was recorded for that guess.

use crate::core::{Feedback, Word, score};

/// Check whether `candidate` would have produced `feedback` for `guess`
#[inline]
#[must_use]
pub fn is_consistent(candidate: &Word, guess: &Word, feedback: &Feedback) -> bool {
    score(guess, candidate) == *feedback
}

/// Check a candidate against a whole guess/feedback history
///
/// `guesses` and `feedbacks` are index-aligned.
#[must_use]
pub fn matches_all_feedback(candidate: &Word, guesses: &[Word], feedbacks: &[Feedback]) -> bool {
    debug_assert_eq!(guesses.len(), feedbacks.len());
    guesses
        .iter()
        .zip(feedbacks)
        .all(|(guess, feedback)| is_consistent(candidate, guess, feedback))
}

/// Filter a pool down to the words consistent with the full history
///
/// Recomputes from scratch; relative order of `pool` is preserved.
///
/// # Examples
/// ```
/// use wordle_engine::core::{score, Word};
/// use wordle_engine::game::consistent_candidates;
///
/// let pool: Vec<Word> = ["crane", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("crate").unwrap();
/// let feedback = score(&guess, &pool[2]);
///
/// let remaining = consistent_candidates(&pool, &[guess], &[feedback]);
/// assert_eq!(remaining, vec![pool[2]]);
/// ```
#[must_use]
pub fn consistent_candidates(pool: &[Word], guesses: &[Word], feedbacks: &[Feedback]) -> Vec<Word> {
    pool.iter()
        .filter(|candidate| matches_all_feedback(candidate, guesses, feedbacks))
        .copied()
        .collect()
}

/// Narrow an already-filtered set by one new guess, in place
///
/// Older constraints are assumed to hold for every word in `remaining`, so
/// only the newest pair needs checking. Returns how many words were removed.
pub fn retain_consistent(remaining: &mut Vec<Word>, guess: &Word, feedback: &Feedback) -> usize {
    let before = remaining.len();
    remaining.retain(|candidate| is_consistent(candidate, guess, feedback));
    before - remaining.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn pool() -> Vec<Word> {
        words(&[
            "crane", "slate", "irate", "crate", "grate", "trace", "react", "caret", "cater",
            "sassy", "silly", "hello",
        ])
    }

    #[test]
    fn solution_is_always_consistent_with_its_own_feedback() {
        let pool = pool();
        for solution in &pool {
            for guess in &pool {
                let feedback = score(guess, solution);
                assert!(is_consistent(solution, guess, &feedback));
            }
        }
    }

    #[test]
    fn perfect_feedback_leaves_only_the_guess() {
        let pool = pool();
        let guess = Word::new("irate").unwrap();
        let remaining = consistent_candidates(&pool, &[guess], &[Feedback::ALL_CORRECT]);
        assert_eq!(remaining, vec![guess]);
    }

    #[test]
    fn impossible_feedback_empties_the_pool() {
        let pool = pool();
        let guess = Word::new("zzzzz").unwrap();
        let remaining = consistent_candidates(&pool, &[guess], &[Feedback::ALL_CORRECT]);
        assert!(remaining.is_empty());
    }

    #[test]
    fn incremental_matches_brute_force() {
        let pool = pool();
        let guesses = words(&["slate", "crane", "cater", "trace"]);

        for solution in &pool {
            let mut remaining = pool.clone();
            let mut feedbacks = Vec::new();

            for (k, guess) in guesses.iter().enumerate() {
                let feedback = score(guess, solution);
                feedbacks.push(feedback);
                retain_consistent(&mut remaining, guess, &feedback);

                let expected = consistent_candidates(&pool, &guesses[..=k], &feedbacks);
                assert_eq!(remaining, expected, "solution {solution}, after {} guesses", k + 1);
                assert!(remaining.contains(solution));
            }
        }
    }

    #[test]
    fn order_is_preserved() {
        let pool = pool();
        let guess = Word::new("hello").unwrap();
        let solution = Word::new("crane").unwrap();
        let feedback = score(&guess, &solution);

        let remaining = consistent_candidates(&pool, &[guess], &[feedback]);
        let positions: Vec<usize> = remaining
            .iter()
            .map(|w| pool.iter().position(|p| p == w).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn retain_reports_removed_count() {
        let mut remaining = pool();
        let total = remaining.len();
        let guess = Word::new("crate").unwrap();
        let feedback = score(&guess, &Word::new("grate").unwrap());

        let removed = retain_consistent(&mut remaining, &guess, &feedback);
        assert_eq!(removed + remaining.len(), total);
        assert!(remaining.contains(&Word::new("grate").unwrap()));
        assert!(!remaining.contains(&Word::new("crate").unwrap()));
    }

    #[test]
    fn empty_history_keeps_everything() {
        let pool = pool();
        assert_eq!(consistent_candidates(&pool, &[], &[]), pool);
    }
}
