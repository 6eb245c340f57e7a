//! Word list loading utilities
//!
//! Word list files are plain text with one lowercase word per line. Blank lines
//! are skipped; any other line that is not a valid word fails the whole load.

use crate::core::{Word, WordError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid word on line {line} of {}", path.display())]
    InvalidWord {
        path: PathBuf,
        line: usize,
        #[source]
        source: WordError,
    },
}

impl WordListError {
    /// The file the error came from
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::InvalidWord { path, .. } => path,
        }
    }
}

/// Parse words from a reader, one per line
///
/// `path` is only used to label errors. Surrounding whitespace (including a
/// trailing `\r`) is trimmed before validation.
///
/// # Errors
///
/// Returns `WordListError::Io` if reading fails and `WordListError::InvalidWord`
/// (with the 1-based line number) for the first malformed entry.
pub fn read_words<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Word>, WordListError> {
    let mut words = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed).map_err(|source| WordListError::InvalidWord {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        words.push(word);
    }

    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if any non-blank
/// line is not a valid word.
///
/// # Examples
/// ```no_run
/// use wordle_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/allowed-solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    read_words(BufReader::new(file), path)
}

/// Convert embedded string slice to Word vector
///
/// Embedded lists are checked by the build script, so nothing is dropped here
/// in practice.
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::loader::words_from_slice;
/// use wordle_engine::wordlists::ALLOWED_SOLUTIONS;
///
/// let words = words_from_slice(ALLOWED_SOLUTIONS);
/// assert_eq!(words.len(), ALLOWED_SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(text: &str) -> Result<Vec<Word>, WordListError> {
        read_words(Cursor::new(text), Path::new("test.txt"))
    }

    #[test]
    fn read_words_in_order() {
        let words = read("apple\nberry\ncrane\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(texts, ["apple", "berry", "crane"]);
    }

    #[test]
    fn read_words_skips_blank_lines_and_trims() {
        let words = read("\napple\r\n\n  berry \n\n").unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].as_str(), "berry");
    }

    #[test]
    fn read_words_empty_input() {
        assert!(read("").unwrap().is_empty());
    }

    #[test]
    fn read_words_rejects_invalid_line() {
        let err = read("apple\nTOOLONG\ncrane\n").unwrap_err();
        match err {
            WordListError::InvalidWord { path, line, source } => {
                assert_eq!(path, Path::new("test.txt"));
                assert_eq!(line, 2);
                assert_eq!(source.input(), "TOOLONG");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn read_words_rejects_uppercase() {
        assert!(matches!(
            read("Apple\n"),
            Err(WordListError::InvalidWord {
                line: 1,
                source: WordError::InvalidCharacter { .. },
                ..
            })
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("wordle_engine_no_such_file.txt");
        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].as_str(), "crane");
        assert_eq!(words[1].as_str(), "slate");
    }
}
