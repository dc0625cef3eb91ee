//! Letter multisets
//!
//! Feasibility of a candidate is a sub-multiset test: every letter of the candidate
//! must be available in the root word at least as many times as the candidate uses it.

use rustc_hash::FxHashMap;

/// Count of each letter in a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, u32>,
}

impl LetterCounts {
    /// Build the letter multiset of `word`
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many times `letter` appears
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Check whether `word` can be formed from these letters
    ///
    /// Each letter of `word` consumes one occurrence; the word is spellable only if
    /// no letter runs out.
    ///
    /// # Examples
    /// ```
    /// use root_words::core::LetterCounts;
    ///
    /// let root = LetterCounts::from_word("assess");
    /// assert!(root.can_spell("sass"));
    /// assert!(!root.can_spell("sassy"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();

        word.chars().all(|ch| match remaining.get_mut(&ch) {
            Some(left) if *left > 0 => {
                *left -= 1;
                true
            }
            _ => false,
        })
    }
}
