//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with no I/O and no randomness.
//! All types here are pure, testable, and have clear set-theoretic properties.

mod letters;
mod outcome;
mod word;

pub use letters::LetterCounts;
pub use outcome::SubmissionOutcome;
pub use word::Word;
