//! Tic-Tac-Toe rules: board, line evaluation and game flow

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BOARD_CELLS, Board, Mark, Side};
pub use game::{GameSession, MoveOutcome, MoveRecord, Turn, ai_move, ai_move_with, player_move};
pub use lines::{Evaluation, GameStatus, Line, WINNING_LINES, evaluate, winning_moves};
