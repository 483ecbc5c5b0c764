//! Winning line analysis and terminal-state detection

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Board, Mark, Side};

/// Three board indices forming a line
pub type Line = [usize; 3];

/// Winning lines in scan order: rows, columns, diagonal, anti-diagonal
pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Status of a board, always derived from its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    PlayerWon,
    AiWon,
    Tie,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::PlayerWon => Some(Side::Player),
            GameStatus::AiWon => Some(Side::Ai),
            GameStatus::Ongoing | GameStatus::Tie => None,
        }
    }

    fn won_by(side: Side) -> Self {
        match side {
            Side::Player => GameStatus::PlayerWon,
            Side::Ai => GameStatus::AiWon,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::PlayerWon => "player won",
            GameStatus::AiWon => "ai won",
            GameStatus::Tie => "tie",
        };
        f.write_str(text)
    }
}

/// Result of evaluating a board
///
/// `winning_line` is `Some` exactly when `status` is a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    pub status: GameStatus,
    pub winning_line: Option<Line>,
}

impl Evaluation {
    fn ongoing() -> Self {
        Evaluation {
            status: GameStatus::Ongoing,
            winning_line: None,
        }
    }

    fn tie() -> Self {
        Evaluation {
            status: GameStatus::Tie,
            winning_line: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Owner of a line, if one side holds all three cells
fn line_owner(board: &Board, line: &Line) -> Option<Side> {
    let first = board.get(line[0]);
    let side = first.side()?;
    line[1..]
        .iter()
        .all(|&idx| board.get(idx) == first)
        .then_some(side)
}

/// Empty cell that would complete `line` for `side`, if the other two are theirs
fn completing_cell(board: &Board, side: Side, line: &Line) -> Option<usize> {
    let target = side.mark();
    let mut empty = None;
    for &idx in line {
        match board.get(idx) {
            Mark::Empty if empty.is_none() => empty = Some(idx),
            c if c == target => {}
            _ => return None,
        }
    }
    empty
}

/// Positions where `side` would complete a line immediately, ascending
pub fn winning_moves(board: &Board, side: Side) -> Vec<usize> {
    let mut moves: Vec<usize> = WINNING_LINES
        .iter()
        .filter_map(|line| completing_cell(board, side, line))
        .collect();
    moves.sort_unstable();
    moves.dedup();
    moves
}

/// Evaluate a board.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first completed line
/// is reported. Without a completed line the board is a tie when full and
/// ongoing otherwise.
///
/// # Examples
///
/// ```
/// use noughts::tictactoe::{Board, GameStatus, evaluate};
///
/// let board = Board::from_string("XXX OO. ...").unwrap();
/// let eval = evaluate(&board);
/// assert_eq!(eval.status, GameStatus::PlayerWon);
/// assert_eq!(eval.winning_line, Some([0, 1, 2]));
/// ```
pub fn evaluate(board: &Board) -> Evaluation {
    for line in &WINNING_LINES {
        if let Some(side) = line_owner(board, line) {
            return Evaluation {
                status: GameStatus::won_by(side),
                winning_line: Some(*line),
            };
        }
    }

    if board.cells().contains(&Mark::Empty) {
        Evaluation::ongoing()
    } else {
        Evaluation::tie()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> Evaluation {
        evaluate(&Board::from_string(s).unwrap())
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(eval("........."), Evaluation::ongoing());
    }

    #[test]
    fn test_player_wins_top_row() {
        let e = eval("XXX OO. ...");
        assert_eq!(e.status, GameStatus::PlayerWon);
        assert_eq!(e.winning_line, Some([0, 1, 2]));
    }

    #[test]
    fn test_ai_wins_column() {
        let e = eval("XO. XO. .OX");
        assert_eq!(e.status, GameStatus::AiWon);
        assert_eq!(e.winning_line, Some([1, 4, 7]));
    }

    #[test]
    fn test_diagonals() {
        assert_eq!(eval("O.X .OX X.O").winning_line, Some([0, 4, 8]));
        assert_eq!(eval("OOX .X. XO.").winning_line, Some([2, 4, 6]));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        assert_eq!(eval("XOX OXO OXO"), Evaluation::tie());
    }

    #[test]
    fn test_win_on_full_board_is_not_tie() {
        let e = eval("XOX OXO OOX");
        assert_eq!(e.status, GameStatus::PlayerWon);
        assert_eq!(e.winning_line, Some([0, 4, 8]));
    }

    #[test]
    fn test_scan_order_reports_first_line() {
        // Row 0 and column 0 both complete; rows are scanned first
        let e = eval("XXX XOO XO.");
        assert_eq!(e.winning_line, Some([0, 1, 2]));

        // Player row 2 and AI row 0; the AI row comes first
        let e = eval("OOO ... XXX");
        assert_eq!(e.status, GameStatus::AiWon);
        assert_eq!(e.winning_line, Some([0, 1, 2]));
    }

    #[test]
    fn test_winning_moves() {
        // XX.
        // X..
        // ...
        let board = Board::from_string("XX. X.. ...").unwrap();
        assert_eq!(winning_moves(&board, Side::Player), vec![2, 6]);
        assert!(winning_moves(&board, Side::Ai).is_empty());
    }

    #[test]
    fn test_winning_moves_ignores_blocked_lines() {
        let board = Board::from_string("XXO ... ...").unwrap();
        assert!(winning_moves(&board, Side::Player).is_empty());
    }

    #[test]
    fn test_status_helpers() {
        assert!(!GameStatus::Ongoing.is_terminal());
        assert!(GameStatus::Tie.is_terminal());
        assert_eq!(GameStatus::AiWon.winner(), Some(Side::Ai));
        assert_eq!(GameStatus::Tie.winner(), None);
    }
}
