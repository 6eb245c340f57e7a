//! Wordle word representation
//!
//! A Word is a fixed-length run of lowercase ASCII letters stored inline as bytes.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word
///
/// Plain `Copy` value compared by content. Ordering is bytewise lexicographic,
/// which matches alphabetical order for `[a-z]`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

/// Error type for malformed words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("{input:?} must be {} letters, got {length}", WORD_LENGTH)]
    InvalidLength { input: String, length: usize },
    #[error("{input:?} must contain only lowercase a-z")]
    InvalidCharacter { input: String },
}

impl WordError {
    /// The text that failed validation
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidLength { input, .. } | Self::InvalidCharacter { input } => input,
        }
    }
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text must be exactly 5 bytes, each in `a..=z`. No case folding is done;
    /// callers that accept user input should lowercase it first.
    ///
    /// # Errors
    /// Returns `WordError` carrying the offending text if:
    /// - Length is not exactly 5
    /// - Any character is outside `a..=z`
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.as_str(), "crane");
    ///
    /// assert!(Word::new("cranes").is_err());
    /// assert!(Word::new("Crane").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let bytes = text.as_bytes();

        if bytes.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength {
                input: text.to_string(),
                length: bytes.len(),
            });
        }

        if !bytes.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacter {
                input: text.to_string(),
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(bytes);
        Ok(Self { letters })
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Will not panic - construction guarantees the letters are ASCII.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.letters).expect("word letters are ASCII")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Number of times `letter` occurs in the word
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Word").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
