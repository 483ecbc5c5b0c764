//! Ports (trait boundaries) for the side playing against the engine.
//!
//! The engine never decides how the player's moves are produced. Anything
//! that can pick a cell on a board (a terminal prompt, a scripted test, a
//! random baseline) plugs in through [`Opponent`].

pub mod opponent;

pub use opponent::Opponent;
