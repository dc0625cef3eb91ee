//! Word list loading utilities
//!
//! Provides the [`WordListProvider`] seam the game starts from, with providers for
//! the embedded list and for plain-text files.

use super::{RootWordPool, START_WORDS};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to obtain a root-word pool
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },
}

/// Source of the root words a game is played on
///
/// Consumed once when a game starts; new games reuse the loaded pool.
pub trait WordListProvider {
    /// Load the pool of candidate root words
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the list is unavailable.
    fn load(&self) -> Result<RootWordPool, LoadError>;
}

/// Root words compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWordList;

impl WordListProvider for EmbeddedWordList {
    fn load(&self) -> Result<RootWordPool, LoadError> {
        Ok(RootWordPool::new(START_WORDS))
    }
}

/// Root words read from a newline-separated file
#[derive(Debug, Clone)]
pub struct FileWordList {
    path: PathBuf,
}

impl FileWordList {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordListProvider for FileWordList {
    fn load(&self) -> Result<RootWordPool, LoadError> {
        let words = load_from_file(&self.path).map_err(|cause| LoadError::Io {
            path: self.path.clone(),
            cause,
        })?;

        tracing::info!(
            path = %self.path.display(),
            words = words.len(),
            "loaded root words"
        );

        Ok(RootWordPool::new(words))
    }
}

/// Load words from a file
///
/// Returns one trimmed, lowercased entry per non-blank line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use root_words::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Split text into normalized words, one per non-blank line
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("root_words_{name}_{}.txt", std::process::id()))
    }

    #[test]
    fn words_from_lines_skips_blank_lines() {
        let words = words_from_lines("silkworm\n\n  Abductor \n\n");
        assert_eq!(words, vec!["silkworm", "abductor"]);
    }

    #[test]
    fn words_from_lines_trailing_newline() {
        // A trailing newline must not produce an empty root word
        let words = words_from_lines("silkworm\n");
        assert_eq!(words, vec!["silkworm"]);
    }

    #[test]
    fn words_from_lines_empty() {
        assert!(words_from_lines("").is_empty());
        assert!(words_from_lines("\n \n\t\n").is_empty());
    }

    #[test]
    fn embedded_provider_loads_start_words() {
        let pool = EmbeddedWordList.load().unwrap();
        assert!(!pool.is_empty());
        assert!(pool.contains("silkworm"));
    }

    #[test]
    fn file_provider_reads_file() {
        let path = temp_path("start");
        fs::write(&path, "Silkworm\nabductor\n\nsilkworm\n").unwrap();

        let pool = FileWordList::new(&path).load().unwrap();
        let _ = fs::remove_file(&path);

        // Duplicates collapse, order of first appearance kept
        assert_eq!(pool.words(), ["silkworm", "abductor"]);
    }

    #[test]
    fn file_provider_missing_file_is_error() {
        let provider = FileWordList::new(temp_path("missing_does_not_exist"));
        let err = provider.load().unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("could not read word list"));
    }

    #[test]
    fn file_provider_empty_file_gives_empty_pool() {
        let path = temp_path("empty");
        fs::write(&path, "\n\n").unwrap();

        let pool = FileWordList::new(&path).load().unwrap();
        let _ = fs::remove_file(&path);

        assert!(pool.is_empty());
    }
}
