//! Adapters implementing the opponent port.
//!
//! Baseline opponents for simulations and tests. Interactive play reads
//! moves in the CLI and drives the session directly.

pub mod random_opponent;
pub mod scripted_opponent;

pub use random_opponent::{DefensiveOpponent, RandomOpponent};
pub use scripted_opponent::ScriptedOpponent;
