//! Display functions for command results

use super::formatters::{create_progress_bar, format_delta, format_outcome, score_label};
use crate::commands::{CheckResult, HintsResult, SurveyStatistics};
use colored::Colorize;

/// Print the result of checking a list of words
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        match step.outcome {
            Some(outcome) => println!(
                "\n{:>3}. {:<16} {:>4}  {}",
                i + 1,
                step.input.trim(),
                format_delta(outcome),
                format_outcome(outcome)
            ),
            None => println!("\n{:>3}. {}", i + 1, "(blank, ignored)".bright_black()),
        }
    }

    println!();
    println!("{}", score_label(result.final_score));
    if !result.used_words.is_empty() {
        println!("Words: {}", result.used_words.join(", "));
    }
}

/// Print every playable word for a root word
pub fn print_hints_result(result: &HintsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PLAYABLE WORDS:".bright_cyan().bold(),
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n  No playable words in this dictionary.");
        return;
    }

    let mut current_len = 0;
    for word in &result.words {
        let len = word.chars().count();
        if len != current_len {
            current_len = len;
            println!("\n  {}", format!("{len} letters").bright_cyan());
        }
        println!("    • {word}");
    }

    println!(
        "\n📊 {} words, up to {} points",
        result.words.len(),
        result.max_score.to_string().bright_yellow().bold()
    );
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Root words:        {}", stats.total_roots);
    println!("   Playable words:    {}", stats.total_playable);
    println!(
        "   Average per root:  {}",
        format!("{:.1}", stats.average_playable).bright_yellow().bold()
    );
    println!("   Time taken:        {:.2}s", stats.total_time.as_secs_f64());

    let max = stats.richest.first().map_or(0, |(_, c)| *c) as f64;

    println!("\n🏆 {}", "Richest roots:".bright_cyan().bold());
    for (root, count) in &stats.richest {
        println!(
            "   {:<12} {} {count:4}",
            root,
            create_progress_bar(*count as f64, max, 30).green()
        );
    }

    println!("\n🪨 {}", "Poorest roots:".bright_cyan().bold());
    for (root, count) in &stats.poorest {
        println!(
            "   {:<12} {} {count:4}",
            root,
            create_progress_bar(*count as f64, max, 30).yellow()
        );
    }

    if !stats.barren.is_empty() {
        println!(
            "\n{} {}",
            "⚠ No playable words:".red().bold(),
            stats.barren.join(", ")
        );
    }
}
