//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: u8, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn feedback_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.iter())
        .map(|(&letter, verdict)| letter_tile(letter, verdict).to_string())
        .collect()
}

/// Comma-separated uppercase word list, cut off after `max` entries
#[must_use]
pub fn word_list(words: &[Word], max: usize) -> String {
    let mut listed: Vec<String> = words
        .iter()
        .take(max)
        .map(|w| w.as_str().to_uppercase())
        .collect();
    if words.len() > max {
        listed.push(format!("… {} more", words.len() - max));
    }
    listed.join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn tile_contains_uppercase_letter() {
        let tile = letter_tile(b'c', Verdict::Correct);
        assert!(tile.to_string().contains(" C "));
    }

    #[test]
    fn row_has_one_tile_per_letter() {
        let guess = Word::new("trace").unwrap();
        let feedback: Feedback = "-GGYG".parse().unwrap();
        let row = feedback_row(&guess, &feedback);
        for letter in ["T", "R", "A", "C", "E"] {
            assert!(row.contains(&format!(" {letter} ")));
        }
    }

    #[test]
    fn word_list_truncates() {
        let list = words(&["crane", "slate", "irate"]);
        assert_eq!(word_list(&list, 5), "CRANE, SLATE, IRATE");
        assert_eq!(word_list(&list, 2), "CRANE, SLATE, … 1 more");
        assert_eq!(word_list(&[], 2), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
