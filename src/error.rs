//! Error types for the noughts crate

use std::fmt;

use thiserror::Error;

use crate::tictactoe::{GameStatus, Mark, Side};

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// Index outside 0-8
    OutOfBounds,
    /// Cell already holds a mark
    Occupied(Mark),
    /// Tried to write an empty mark into a cell
    EmptyMark,
    /// Game already reached a terminal status
    GameOver,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfBounds => write!(f, "position is out of bounds (must be 0-8)"),
            MoveRejection::Occupied(mark) => {
                write!(f, "position is already occupied by {}", mark.to_char())
            }
            MoveRejection::EmptyMark => write!(f, "cannot place an empty mark"),
            MoveRejection::GameOver => write!(f, "game already over"),
        }
    }
}

/// Main error type for the noughts crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move at position {position}: {reason}")]
    InvalidMove {
        position: usize,
        reason: MoveRejection,
    },

    #[error("no legal move available: board status is {status}")]
    NoLegalMove { status: GameStatus },

    #[error("it is the {expected} side's turn")]
    OutOfTurn { expected: Side },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },
}

impl Error {
    pub(crate) fn invalid_move(position: usize, reason: MoveRejection) -> Self {
        Error::InvalidMove { position, reason }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
