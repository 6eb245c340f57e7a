//! Per-letter feedback for a scored guess
//!
//! A `Feedback` holds one `Verdict` per position, aligned with the guess it was
//! computed for. It can be parsed from and rendered to a short text code:
//! - `G`/`g`/🟩 = Correct (letter in the right position)
//! - `Y`/`y`/🟨 = Present (letter elsewhere in the word)
//! - `-`/`_`/`.`/⬜ = Absent

use super::word::WORD_LENGTH;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;

/// Scoring outcome for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Letter matches the solution at this exact position
    Correct,
    /// Letter occurs in the solution, but not here
    Present,
    /// Letter does not occur, or all its occurrences are already claimed
    Absent,
}

impl Verdict {
    /// Single-character code used in text feedback
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Colored square used in emoji feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

/// Error returned when parsing feedback text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("feedback {input:?} must have {} marks, got {length}", WORD_LENGTH)]
    InvalidLength { input: String, length: usize },
    #[error("feedback {input:?} contains unknown mark {mark:?} (use G, Y or -)")]
    InvalidMark { input: String, mark: char },
}

impl Feedback {
    /// All greens (perfect match)
    pub const ALL_CORRECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Create feedback from explicit verdicts
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// The verdicts, in guess order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Iterate over the verdicts in guess order
    pub fn iter(&self) -> impl Iterator<Item = Verdict> + '_ {
        self.0.iter().copied()
    }

    /// Check if every position is `Correct`
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count positions holding the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert feedback to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Feedback;
    ///
    /// let feedback: Feedback = "GY-GY".parse().unwrap();
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(Verdict::emoji).collect()
    }
}

impl Index<usize> for Feedback {
    type Output = Verdict;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl FromStr for Feedback {
    type Err = FeedbackParseError;

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != WORD_LENGTH {
            return Err(FeedbackParseError::InvalidLength {
                input: s.to_string(),
                length,
            });
        }

        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        for (slot, ch) in verdicts.iter_mut().zip(s.chars()) {
            *slot = Verdict::from_char(ch).ok_or_else(|| FeedbackParseError::InvalidMark {
                input: s.to_string(),
                mark: ch,
            })?;
        }

        Ok(Self(verdicts))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in self.iter() {
            write!(f, "{}", verdict.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    #[test]
    fn all_correct_constant() {
        assert!(Feedback::ALL_CORRECT.is_all_correct());
        assert_eq!(Feedback::ALL_CORRECT.count(Correct), 5);
        assert_eq!(Feedback::ALL_CORRECT.to_string(), "GGGGG");
    }

    #[test]
    fn parse_text_and_emoji() {
        let p1: Feedback = "GYG--".parse().unwrap();
        let p2: Feedback = "🟩🟨🟩⬜⬜".parse().unwrap();
        let p3: Feedback = "gyg_.".parse().unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(
            p1.verdicts(),
            &[Correct, Present, Correct, Absent, Absent]
        );
    }

    #[test]
    fn parse_invalid() {
        assert!(matches!(
            "GYGGYX".parse::<Feedback>(),
            Err(FeedbackParseError::InvalidLength { length: 6, .. })
        ));
        assert!(matches!(
            "".parse::<Feedback>(),
            Err(FeedbackParseError::InvalidLength { length: 0, .. })
        ));
        assert_eq!(
            "GXGGY".parse::<Feedback>(),
            Err(FeedbackParseError::InvalidMark {
                input: "GXGGY".to_string(),
                mark: 'X'
            })
        );
    }

    #[test]
    fn counts_and_indexing() {
        let feedback = Feedback::new([Present, Correct, Correct, Present, Present]);
        assert_eq!(feedback.count(Correct), 2);
        assert_eq!(feedback.count(Present), 3);
        assert_eq!(feedback.count(Absent), 0);
        assert_eq!(feedback[0], Present);
        assert!(!feedback.is_all_correct());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let feedback = Feedback::new([Absent, Correct, Correct, Present, Correct]);
        assert_eq!(feedback.to_string(), "-GGYG");
        assert_eq!(feedback.to_string().parse::<Feedback>().unwrap(), feedback);
        assert_eq!(feedback.to_emoji(), "⬜🟩🟩🟨🟩");
    }
}
