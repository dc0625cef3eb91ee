//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, file loading, and the
//! root-word pool a round draws from.

mod embedded;
pub mod loader;
mod pool;

pub use embedded::{DICTIONARY_WORDS, DICTIONARY_WORDS_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::{EmbeddedWordList, FileWordList, LoadError, WordListProvider};
pub use pool::{DEFAULT_ROOT_WORD, RootWordPool};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY_WORDS.len(), DICTIONARY_WORDS_COUNT);
    }

    #[test]
    fn start_words_are_lowercase_letters() {
        for &word in START_WORDS {
            assert!(!word.is_empty(), "Empty root word in start list");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Root word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn default_root_word_is_a_start_word() {
        assert!(START_WORDS.contains(&DEFAULT_ROOT_WORD));
    }

    #[test]
    fn start_words_are_in_dictionary() {
        let dictionary: std::collections::HashSet<_> = DICTIONARY_WORDS.iter().collect();

        for word in START_WORDS {
            assert!(
                dictionary.contains(word),
                "Root word '{word}' not in dictionary"
            );
        }
    }

    #[test]
    fn dictionary_words_are_trimmed() {
        for &word in &DICTIONARY_WORDS[..50] {
            assert_eq!(word, word.trim());
            assert!(!word.is_empty());
        }
    }
}
