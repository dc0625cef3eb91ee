//! Survey all root words
//!
//! Counts how many playable words each root word in the pool offers.

use super::hints::playable_words;
use crate::dictionary::WordSetDictionary;
use crate::game::Rules;
use crate::wordlists::RootWordPool;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// How many entries the richest/poorest lists keep
const RANKING_SIZE: usize = 10;

/// Statistics from surveying the pool
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    pub total_playable: usize,
    pub average_playable: f64,
    /// Most playable words first
    pub richest: Vec<(String, usize)>,
    /// Fewest playable words first
    pub poorest: Vec<(String, usize)>,
    /// Roots with nothing to play at all
    pub barren: Vec<String>,
    pub total_time: Duration,
}

/// Count playable words for every root word in `pool` (or the first `limit`)
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_survey(
    pool: &RootWordPool,
    dictionary: &WordSetDictionary,
    rules: &Rules,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots = &pool.words()[..limit.unwrap_or(pool.len()).min(pool.len())];

    println!("🔎 Surveying {} root words...", roots.len());

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let mut counts: Vec<(String, usize)> = roots
        .par_iter()
        .map(|root| {
            let count = playable_words(root, dictionary, rules).len();
            pb.inc(1);
            (root.text().to_string(), count)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let total_time = start.elapsed();
    tracing::debug!(roots = counts.len(), ?total_time, "survey finished");

    summarize(&mut counts, total_time)
}

/// Rank per-root counts
fn summarize(counts: &mut [(String, usize)], total_time: Duration) -> SurveyStatistics {
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let total_roots = counts.len();
    let total_playable: usize = counts.iter().map(|(_, c)| c).sum();
    let average_playable = if total_roots == 0 {
        0.0
    } else {
        total_playable as f64 / total_roots as f64
    };

    let richest = counts.iter().take(RANKING_SIZE).cloned().collect();
    let poorest = counts.iter().rev().take(RANKING_SIZE).cloned().collect();
    let barren = counts
        .iter()
        .filter(|(_, c)| *c == 0)
        .map(|(root, _)| root.clone())
        .collect();

    SurveyStatistics {
        total_roots,
        total_playable,
        average_playable,
        richest,
        poorest,
        barren,
        total_time,
    }
}
