//! Allowed-guess and solution dictionaries
//!
//! A `Dictionary` is an explicit, read-only value passed to whatever needs it.
//! Guesses are kept sorted so membership is a binary search.

use super::loader::{WordListError, load_from_file, words_from_slice};
use super::{ALLOWED_GUESSES, ALLOWED_SOLUTIONS};
use crate::core::{Word, WordError};
use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::Path;
use thiserror::Error;

/// File name of the allowed-guesses list inside a data directory
pub const GUESSES_FILE: &str = "allowed-guesses.txt";
/// File name of the solutions list inside a data directory
pub const SOLUTIONS_FILE: &str = "allowed-solutions.txt";

/// Reasons a guess is not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error(transparent)]
    Malformed(#[from] WordError),
    #[error("\"{word}\" not in allowed guesses")]
    NotInWordList { word: Word },
}

/// The two word lists a game is played with
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Sorted and deduplicated
    allowed_guesses: Vec<Word>,
    /// In source order
    allowed_solutions: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from in-memory lists
    ///
    /// Guesses are sorted and deduplicated; solutions keep their order.
    #[must_use]
    pub fn new(mut allowed_guesses: Vec<Word>, allowed_solutions: Vec<Word>) -> Self {
        allowed_guesses.sort_unstable();
        allowed_guesses.dedup();
        Self {
            allowed_guesses,
            allowed_solutions,
        }
    }

    /// The word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            words_from_slice(ALLOWED_GUESSES),
            words_from_slice(ALLOWED_SOLUTIONS),
        )
    }

    /// Load `allowed-guesses.txt` and `allowed-solutions.txt` from a directory
    ///
    /// Nothing is returned unless both files load cleanly.
    ///
    /// # Errors
    ///
    /// Returns the first I/O or word validation error from either file.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self, WordListError> {
        let data_dir = data_dir.as_ref();
        let guesses = load_from_file(data_dir.join(GUESSES_FILE))?;
        let solutions = load_from_file(data_dir.join(SOLUTIONS_FILE))?;

        let dictionary = Self::new(guesses, solutions);
        info!(
            "loaded {} allowed guesses and {} solutions from {}",
            dictionary.allowed_guesses.len(),
            dictionary.allowed_solutions.len(),
            data_dir.display()
        );
        Ok(dictionary)
    }

    /// Sorted allowed guesses
    #[must_use]
    pub fn allowed_guesses(&self) -> &[Word] {
        &self.allowed_guesses
    }

    /// Candidate solutions, in load order
    #[must_use]
    pub fn allowed_solutions(&self) -> &[Word] {
        &self.allowed_solutions
    }

    /// Check whether a word may be guessed
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed_guesses.binary_search(word).is_ok()
    }

    /// Check a well-formed word against the allowed guesses
    ///
    /// # Errors
    ///
    /// Returns `GuessError::NotInWordList` if the word is not an allowed guess.
    pub fn check_guess(&self, word: &Word) -> Result<(), GuessError> {
        if self.is_allowed(word) {
            Ok(())
        } else {
            Err(GuessError::NotInWordList { word: *word })
        }
    }

    /// Turn raw text into a guess that is both well-formed and allowed
    ///
    /// # Errors
    ///
    /// Returns `GuessError::Malformed` for bad length or characters, and
    /// `GuessError::NotInWordList` for unknown words.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    /// use wordle_engine::wordlists::{Dictionary, GuessError};
    ///
    /// let words: Vec<Word> = ["apple", "crane"].iter().map(|w| Word::new(w).unwrap()).collect();
    /// let dictionary = Dictionary::new(words.clone(), words);
    ///
    /// assert!(dictionary.parse_guess("crane").is_ok());
    /// assert!(matches!(dictionary.parse_guess("zebra"), Err(GuessError::NotInWordList { .. })));
    /// assert!(matches!(dictionary.parse_guess("cran"), Err(GuessError::Malformed(_))));
    /// ```
    pub fn parse_guess(&self, text: &str) -> Result<Word, GuessError> {
        let word = Word::new(text)?;
        self.check_guess(&word)?;
        Ok(word)
    }

    /// Pick a solution uniformly at random
    ///
    /// Returns `None` when there are no solutions.
    pub fn random_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Word> {
        self.allowed_solutions.choose(rng).copied()
    }
}
