//! Root Words
//!
//! A word scramble game: build as many words as you can from the letters of a root word.
//!
//! # Quick Start
//!
//! ```rust
//! use root_words::core::{SubmissionOutcome, Word};
//! use root_words::dictionary::WordSetDictionary;
//! use root_words::game::GameState;
//!
//! let dictionary = WordSetDictionary::new("en", ["silk", "worm"]);
//! let mut state = GameState::new(Word::normalize("silkworm").unwrap());
//!
//! assert_eq!(
//!     state.submit("Silk", &dictionary),
//!     Some(SubmissionOutcome::Accepted { points: 10 })
//! );
//! assert_eq!(state.score(), 10);
//! ```

// Core domain types
pub mod core;

// Rules and game state
pub mod game;

// Spell-check capability
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
