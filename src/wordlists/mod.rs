//! Word lists and dictionaries
//!
//! Default lists are embedded at build time; others are loaded from a data directory.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, GUESSES_FILE, GuessError, SOLUTIONS_FILE};
pub use embedded::{
    ALLOWED_GUESSES, ALLOWED_GUESSES_COUNT, ALLOWED_SOLUTIONS, ALLOWED_SOLUTIONS_COUNT,
};
pub use loader::WordListError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solutions_count_matches_const() {
        assert_eq!(ALLOWED_SOLUTIONS.len(), ALLOWED_SOLUTIONS_COUNT);
    }

    #[test]
    fn guesses_count_matches_const() {
        assert_eq!(ALLOWED_GUESSES.len(), ALLOWED_GUESSES_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in ALLOWED_SOLUTIONS.iter().chain(ALLOWED_GUESSES) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn solutions_subset_of_guesses() {
        let guesses: std::collections::HashSet<_> = ALLOWED_GUESSES.iter().collect();

        for solution in ALLOWED_SOLUTIONS {
            assert!(
                guesses.contains(solution),
                "Solution '{solution}' not in allowed guesses"
            );
        }
    }
}
