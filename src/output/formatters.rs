//! Formatting utilities for terminal output

use crate::core::{SubmissionOutcome, Word};
use colored::Colorize;

/// "Score: N"
#[must_use]
pub fn score_label(score: i32) -> String {
    let label = format!("Score: {score}");
    if score < 0 {
        label.red().bold().to_string()
    } else {
        label.bright_cyan().bold().to_string()
    }
}

/// Used words as a numbered list, "1. word", in the order given
#[must_use]
pub fn numbered_words(words: &[Word]) -> Vec<String> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| format!("{}. {}", i + 1, word.text()))
        .collect()
}

/// One-line colored description of an outcome
#[must_use]
pub fn format_outcome(outcome: SubmissionOutcome) -> String {
    if outcome.is_accepted() {
        format!("✅ {}", outcome.message()).green().to_string()
    } else {
        format!("❌ {} - {}", outcome.title(), outcome.message())
            .red()
            .to_string()
    }
}

/// Signed score change, "+10" / "-3"
#[must_use]
pub fn format_delta(outcome: SubmissionOutcome) -> String {
    format!("{:+}", outcome.score_delta())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_label_contains_score() {
        colored::control::set_override(false);
        assert_eq!(score_label(10), "Score: 10");
        assert_eq!(score_label(-7), "Score: -7");
    }

    #[test]
    fn numbered_words_start_at_one() {
        let words = vec![
            Word::normalize("milk").unwrap(),
            Word::normalize("silk").unwrap(),
        ];
        assert_eq!(numbered_words(&words), vec!["1. milk", "2. silk"]);
        assert!(numbered_words(&[]).is_empty());
    }

    #[test]
    fn format_outcome_uses_title_for_rejections() {
        let text = format_outcome(SubmissionOutcome::RejectedDuplicate { penalty: 2 });
        assert!(text.contains("Word used already"));
        assert!(text.contains("You lose 2 score points"));
    }

    #[test]
    fn format_delta_is_signed() {
        assert_eq!(format_delta(SubmissionOutcome::Accepted { points: 10 }), "+10");
        assert_eq!(
            format_delta(SubmissionOutcome::RejectedImpossibleLetters { penalty: 3 }),
            "-3"
        );
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
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
