//! Command implementations

pub mod check;
pub mod hints;
pub mod simple;
pub mod survey;

pub use check::{CheckResult, CheckStep, run_check};
pub use hints::{HintsResult, find_hints, playable_words};
pub use simple::{play_lines, run_simple};
pub use survey::{SurveyStatistics, run_survey};
