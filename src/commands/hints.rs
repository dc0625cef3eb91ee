//! Hints command
//!
//! Lists every word a root word can produce under the current rules.

use crate::core::Word;
use crate::dictionary::WordSetDictionary;
use crate::game::Rules;
use anyhow::{Context, Result};
use rayon::prelude::*;

/// Playable words for one root word
pub struct HintsResult {
    pub root_word: String,
    /// Longest first, alphabetical within a length
    pub words: Vec<String>,
    pub max_score: u64,
}

/// Find all playable words for `root`
///
/// # Errors
///
/// Returns an error if `root` is blank.
pub fn find_hints(root: &str, dictionary: &WordSetDictionary, rules: &Rules) -> Result<HintsResult> {
    let root_word = Word::normalize(root).context("Root word must not be blank")?;
    let words = playable_words(&root_word, dictionary, rules);

    Ok(HintsResult {
        root_word: root_word.text().to_string(),
        max_score: words.len() as u64 * u64::from(rules.accepted_points),
        words: words.into_iter().map(|w| w.text().to_string()).collect(),
    })
}

/// Every dictionary word that would be accepted on an empty round of `root_word`
#[must_use]
pub fn playable_words(root_word: &Word, dictionary: &WordSetDictionary, rules: &Rules) -> Vec<Word> {
    let root_letters = root_word.letter_counts();
    let vocabulary: Vec<&str> = dictionary.words().collect();

    let mut words: Vec<Word> = vocabulary
        .par_iter()
        .filter(|&&w| root_letters.can_spell(w))
        .filter_map(|&w| Word::normalize(w))
        .filter(|w| rules.is_real(w, root_word, dictionary))
        .collect();

    words.sort_by(|a, b| {
        b.letter_count()
            .cmp(&a.letter_count())
            .then_with(|| a.text().cmp(b.text()))
    });

    words
}
