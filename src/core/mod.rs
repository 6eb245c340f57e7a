//! Core domain types for Wordle
//!
//! This module contains the fundamental value types and the scoring function.
//! Everything here is pure and allocation-light.

mod feedback;
mod scorer;
mod word;

pub use feedback::{Feedback, FeedbackParseError, Verdict};
pub use scorer::score;
pub use word::{WORD_LENGTH, Word, WordError};
