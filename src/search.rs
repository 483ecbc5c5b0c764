//! Optimal move search for the AI side

pub mod minimax;
mod placement;

pub use minimax::{
    SearchReport, SearchStats, SearchStrategy, Searcher, WIN_SCORE, select_ai_move,
};
