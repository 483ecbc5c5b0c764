//! Noughts: a deterministic Tic-Tac-Toe engine with an optimal AI
//!
//! This crate provides:
//! - Board representation, move validation and win/tie detection
//! - Minimax search selecting the AI's move, in plain, memoized and
//!   alpha-beta flavours that always agree on the result
//! - `player_move` / `ai_move` entry points and a [`GameSession`] that owns
//!   one game's authoritative board
//! - Pluggable opponents and a batch simulator
//!
//! The human always plays `X` ([`Mark::Player`]) and the engine plays `O`
//! ([`Mark::Ai`]). Cells are indexed 0-8 in row-major order.
//!
//! # Examples
//!
//! ```
//! use noughts::{GameStatus, ai_move, player_move, tictactoe::Board};
//!
//! let board = Board::new();
//! let after_player = player_move(&board, 0)?;
//! let after_ai = ai_move(&after_player.board)?;
//! assert_eq!(after_ai.position, 4);
//! assert_eq!(after_ai.status(), GameStatus::Ongoing);
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod ports;
pub mod search;
pub mod simulation;
pub mod tictactoe;

pub use app::{EngineConfig, SimulationConfig};
pub use error::{Error, MoveRejection, Result};
pub use search::{SearchStrategy, Searcher, select_ai_move};
pub use simulation::SimulationSummary;
pub use tictactoe::{
    Board, Evaluation, GameSession, GameStatus, Mark, MoveOutcome, Side, ai_move, evaluate,
    player_move,
};
