//! The word game engine
//!
//! This module holds the rules of a round and the state they act on.

mod engine;
pub mod rules;

pub use engine::{Game, GameError, GameState};
pub use rules::Rules;
