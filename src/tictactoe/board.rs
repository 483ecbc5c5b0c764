//! Board representation and move application

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::{self, Evaluation};
use crate::error::{Error, MoveRejection, Result};

/// Number of cells on the 3x3 board
pub const BOARD_CELLS: usize = 9;

/// The content of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    /// The human's cross
    Player,
    /// The engine's circle
    Ai,
}

impl Mark {
    pub fn to_char(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Player => 'X',
            Mark::Ai => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            '.' | '_' | '-' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::Player),
            'O' | 'o' | '0' => Some(Mark::Ai),
            _ => None,
        }
    }

    /// The side owning this mark, if any
    pub fn side(self) -> Option<Side> {
        match self {
            Mark::Empty => None,
            Mark::Player => Some(Side::Player),
            Mark::Ai => Some(Side::Ai),
        }
    }
}

/// One of the two movers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    pub fn mark(self) -> Mark {
        match self {
            Side::Player => Mark::Player,
            Side::Ai => Mark::Ai,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Ai => write!(f, "ai"),
        }
    }
}

/// Nine cells in row-major order (index = row * 3 + column)
///
/// `Board` is `Copy`; every operation that changes a cell returns a new value
/// so the caller decides which copy is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Mark::Empty; BOARD_CELLS],
        }
    }

    pub fn from_cells(cells: [Mark; BOARD_CELLS]) -> Self {
        Board { cells }
    }

    /// Parse a board from its text form.
    ///
    /// Whitespace is ignored; the remaining characters must be exactly nine
    /// cells using `X` for the player, `O` for the AI and `.` for empty.
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not nine or a character is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::tictactoe::{Board, Mark};
    ///
    /// let board = Board::from_string("XO. .X. ..O").unwrap();
    /// assert_eq!(board.get(0), Mark::Player);
    /// assert_eq!(board.get(8), Mark::Ai);
    /// ```
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_CELLS {
            return Err(Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Mark::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Mark::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    /// Get the mark at position (0-8)
    ///
    /// # Panics
    ///
    /// Panics if `pos >= 9`.
    pub fn get(&self, pos: usize) -> Mark {
        self.cells[pos]
    }

    /// True when `pos` is on the board and holds no mark
    pub fn is_empty_at(&self, pos: usize) -> bool {
        self.cells.get(pos) == Some(&Mark::Empty)
    }

    /// Empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == mark).count()
    }

    /// Number of marks placed so far
    pub fn occupied_count(&self) -> usize {
        BOARD_CELLS - self.count(Mark::Empty)
    }

    /// Place `mark` at `pos` and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] if `pos` is outside 0-8, the cell is
    /// already occupied, or `mark` is [`Mark::Empty`].
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, pos: usize, mark: Mark) -> Result<Board> {
        let current = *self
            .cells
            .get(pos)
            .ok_or(Error::invalid_move(pos, MoveRejection::OutOfBounds))?;

        if current != Mark::Empty {
            return Err(Error::invalid_move(pos, MoveRejection::Occupied(current)));
        }
        if mark == Mark::Empty {
            return Err(Error::invalid_move(pos, MoveRejection::EmptyMark));
        }

        let mut next = *self;
        next.cells[pos] = mark;
        Ok(next)
    }

    /// Compact single-line form, e.g. `XO..X...O`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Derive the status of this board
    pub fn evaluate(&self) -> Evaluation {
        lines::evaluate(self)
    }

    /// Raw write used by scoped search placements; bounds are the caller's concern
    pub(crate) fn set(&mut self, pos: usize, mark: Mark) {
        self.cells[pos] = mark;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < BOARD_CELLS - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.empty_positions(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_apply_move() {
        let board = Board::new();
        let next = board.apply_move(4, Mark::Player).unwrap();

        assert_eq!(next.get(4), Mark::Player);
        // Original untouched
        assert_eq!(board.get(4), Mark::Empty);
        assert_eq!(next.occupied_count(), 1);
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let board = Board::from_string("....O....").unwrap();
        let err = board.apply_move(4, Mark::Player).unwrap_err();

        assert_eq!(
            err,
            Error::InvalidMove {
                position: 4,
                reason: MoveRejection::Occupied(Mark::Ai),
            }
        );
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds() {
        let err = Board::new().apply_move(9, Mark::Ai).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMove {
                position: 9,
                reason: MoveRejection::OutOfBounds
            }
        ));
    }

    #[test]
    fn test_apply_move_rejects_empty_mark() {
        let err = Board::new().apply_move(0, Mark::Empty).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMove {
                reason: MoveRejection::EmptyMark,
                ..
            }
        ));
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("xo0 .-_ X..").unwrap();
        assert_eq!(board.get(0), Mark::Player);
        assert_eq!(board.get(1), Mark::Ai);
        assert_eq!(board.get(2), Mark::Ai);
        assert_eq!(board.get(3), Mark::Empty);
        assert_eq!(board.get(6), Mark::Player);

        assert!(matches!(
            Board::from_string("XO"),
            Err(Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            Board::from_string("XOXOXOXOXO"),
            Err(Error::InvalidBoardLength { got: 10, .. })
        ));
        assert!(matches!(
            Board::from_string("XOZ......"),
            Err(Error::InvalidCellCharacter {
                character: 'Z',
                position: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_encode_roundtrip() {
        let board = Board::from_string("XO. .X. ..O").unwrap();
        assert_eq!(board.encode(), "XO..X...O");
        assert_eq!(Board::from_string(&board.encode()).unwrap(), board);
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
    }

    #[test]
    fn test_side_marks() {
        assert_eq!(Side::Player.mark(), Mark::Player);
        assert_eq!(Side::Ai.mark(), Mark::Ai);
        assert_eq!(Side::Player.opponent(), Side::Ai);
        assert_eq!(Mark::Ai.side(), Some(Side::Ai));
        assert_eq!(Mark::Empty.side(), None);
    }

    #[test]
    fn test_is_empty_at_out_of_range() {
        assert!(!Board::new().is_empty_at(9));
    }
}
