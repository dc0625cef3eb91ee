//! Candidate word representation
//!
//! A Word is player input after normalization: lowercased and trimmed, never empty.

use super::LetterCounts;
use std::fmt;

/// A normalized word
///
/// Construction is the normalization step of every submission, so two inputs that
/// differ only in case or surrounding whitespace produce equal words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Normalize raw input into a word
    ///
    /// Returns `None` when nothing is left after trimming.
    ///
    /// # Examples
    /// ```
    /// use root_words::core::Word;
    ///
    /// let word = Word::normalize("  SiLk \n").unwrap();
    /// assert_eq!(word.text(), "silk");
    ///
    /// assert!(Word::normalize(" \t ").is_none());
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        let text = raw.to_lowercase().trim().to_string();

        if text.is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    /// Wrap text that is already lowercased, trimmed and non-empty
    pub(crate) fn from_normalized(text: String) -> Self {
        debug_assert!(!text.is_empty());
        debug_assert_eq!(text, text.to_lowercase().trim());
        Self { text }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (characters, not bytes)
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Letter multiset of this word
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        LetterCounts::from_word(&self.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
