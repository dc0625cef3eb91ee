//! Spell-check capability
//!
//! The engine only asks one question: "is this a correctly spelled word in this
//! language?". [`Dictionary`] is that question; [`WordSetDictionary`] answers it
//! from a plain word list.

use crate::wordlists::DICTIONARY_WORDS;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Locale every submission is checked against
pub const DEFAULT_LOCALE: &str = "en";

/// A spell-check lookup
///
/// Implementations must be pure queries with no side effects.
pub trait Dictionary {
    /// Check whether `word` is a correctly spelled word in `locale`
    fn is_valid_word(&self, word: &str, locale: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_valid_word(&self, word: &str, locale: &str) -> bool {
        (**self).is_valid_word(word, locale)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_valid_word(&self, word: &str, locale: &str) -> bool {
        (**self).is_valid_word(word, locale)
    }
}

/// Dictionary backed by a set of known words for a single language
///
/// Lookups are case-insensitive. A locale such as `en_US` or `en-GB` matches a
/// dictionary whose language is `en`.
#[derive(Debug, Clone)]
pub struct WordSetDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordSetDictionary {
    /// Create a dictionary for `language` from any iterator of words
    ///
    /// Words are trimmed and lowercased; blank entries are skipped.
    #[must_use]
    pub fn new<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: primary_language(language).to_lowercase(),
            words,
        }
    }

    /// The English word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DEFAULT_LOCALE, DICTIONARY_WORDS)
    }

    /// Load an English dictionary from a newline-separated file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let dictionary = Self::new(DEFAULT_LOCALE, content.lines());

        tracing::info!(
            path = %path.as_ref().display(),
            words = dictionary.len(),
            "loaded dictionary"
        );

        Ok(dictionary)
    }

    /// Check membership, ignoring case
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Iterate over every known word (unordered)
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordSetDictionary {
    fn is_valid_word(&self, word: &str, locale: &str) -> bool {
        primary_language(locale).eq_ignore_ascii_case(&self.language) && self.contains(word)
    }
}

/// `en_US` -> `en`, `pt-BR` -> `pt`
fn primary_language(locale: &str) -> &str {
    locale
        .split(['_', '-'])
        .next()
        .unwrap_or(locale)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let dict = WordSetDictionary::new("en", ["Silk", "worm"]);
        assert!(dict.contains("silk"));
        assert!(dict.contains("SILK"));
        assert!(dict.contains("Worm"));
        assert!(!dict.contains("milk"));
    }

    #[test]
    fn blank_entries_skipped() {
        let dict = WordSetDictionary::new("en", ["silk", "", "   ", "worm"]);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn locale_must_match_language() {
        let dict = WordSetDictionary::new("en", ["silk"]);
        assert!(dict.is_valid_word("silk", "en"));
        assert!(dict.is_valid_word("silk", "en_US"));
        assert!(dict.is_valid_word("silk", "EN-gb"));
        assert!(!dict.is_valid_word("silk", "fr"));
    }

    #[test]
    fn unknown_word_is_invalid() {
        let dict = WordSetDictionary::new("en", ["silk"]);
        assert!(!dict.is_valid_word("xyz", DEFAULT_LOCALE));
    }

    #[test]
    fn language_is_normalized() {
        let dict = WordSetDictionary::new("EN_us", ["silk"]);
        assert!(dict.is_valid_word("silk", "en"));
        assert!(dict.is_valid_word("silk", "en-GB"));
        assert!(!dict.is_valid_word("silk", "fr"));
    }

    #[test]
    fn empty_dictionary() {
        let dict = WordSetDictionary::new("en", Vec::<String>::new());
        assert!(dict.is_empty());
        assert!(!dict.is_valid_word("silk", "en"));
    }

    #[test]
    fn embedded_knows_common_words() {
        let dict = WordSetDictionary::embedded();
        assert!(!dict.is_empty());
        assert!(dict.is_valid_word("silk", DEFAULT_LOCALE));
        assert!(dict.is_valid_word("worm", DEFAULT_LOCALE));
        assert!(!dict.is_valid_word("xyz", DEFAULT_LOCALE));
    }

    #[test]
    fn trait_object_and_reference_dispatch() {
        fn knows_silk<D: Dictionary>(dictionary: D) -> bool {
            dictionary.is_valid_word("silk", "en")
        }

        let dict = WordSetDictionary::new("en", ["silk"]);
        let boxed: Box<dyn Dictionary> = Box::new(dict.clone());
        assert!(knows_silk(boxed));
        assert!(knows_silk(&dict));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let path = std::env::temp_dir().join("root_words_no_such_dictionary.txt");
        assert!(WordSetDictionary::load_from_file(path).is_err());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!(
            "root_words_dictionary_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "Silk\n\nworm\n  milk  \n").unwrap();

        let dict = WordSetDictionary::load_from_file(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(dict.len(), 3);
        assert!(dict.is_valid_word("milk", "en"));
    }
}
