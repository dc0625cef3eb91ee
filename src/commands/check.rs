//! Check command
//!
//! Plays a fixed list of words against a fixed root word and reports every step.

use crate::core::{SubmissionOutcome, Word};
use crate::dictionary::Dictionary;
use crate::game::GameState;
use anyhow::{Context, Result};

/// One submitted word
#[derive(Debug, Clone)]
pub struct CheckStep {
    pub input: String,
    /// `None` when the input was blank
    pub outcome: Option<SubmissionOutcome>,
    pub score_after: i32,
}

/// Result of playing a list of words
pub struct CheckResult {
    pub root_word: String,
    pub steps: Vec<CheckStep>,
    pub final_score: i32,
    /// Accepted words, most recent first
    pub used_words: Vec<String>,
}

/// Submit `words` in order to a fresh round on `root`
///
/// # Errors
///
/// Returns an error if `root` is blank.
pub fn run_check<D: Dictionary + ?Sized>(
    root: &str,
    words: &[String],
    dictionary: &D,
) -> Result<CheckResult> {
    let root_word = Word::normalize(root).context("Root word must not be blank")?;
    let mut state = GameState::new(root_word);

    let steps = words
        .iter()
        .map(|input| {
            let outcome = state.submit(input, dictionary);
            CheckStep {
                input: input.clone(),
                outcome,
                score_after: state.score(),
            }
        })
        .collect();

    Ok(CheckResult {
        root_word: state.root_word().text().to_string(),
        steps,
        final_score: state.score(),
        used_words: state
            .used_words()
            .iter()
            .map(|w| w.text().to_string())
            .collect(),
    })
}
