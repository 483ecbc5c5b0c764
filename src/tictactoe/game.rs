//! Game flow: the two move entry points and a session owning one game

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{
    board::{Board, Mark, Side},
    lines::{Evaluation, GameStatus},
};
use crate::{
    app::EngineConfig,
    error::{Error, MoveRejection, Result},
    search::Searcher,
};

/// Board and status after one move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub side: Side,
    pub position: usize,
    pub board: Board,
    pub evaluation: Evaluation,
}

impl MoveOutcome {
    fn new(side: Side, position: usize, board: Board) -> Self {
        Self {
            side,
            position,
            board,
            evaluation: board.evaluate(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.evaluation.status
    }

    pub fn is_terminal(&self) -> bool {
        self.evaluation.is_terminal()
    }
}

/// Apply the player's move to `board`.
///
/// # Errors
///
/// Returns [`Error::InvalidMove`] if the game is already decided, the
/// position is out of range, or the cell is taken.
pub fn player_move(board: &Board, position: usize) -> Result<MoveOutcome> {
    if board.evaluate().is_terminal() {
        return Err(Error::InvalidMove {
            position,
            reason: MoveRejection::GameOver,
        });
    }

    let next = board.apply_move(position, Mark::Player)?;
    Ok(MoveOutcome::new(Side::Player, position, next))
}

/// Search and apply the AI's move with the default strategy.
///
/// # Errors
///
/// Returns [`Error::NoLegalMove`] if the game is already decided.
///
/// # Examples
///
/// ```
/// use noughts::tictactoe::{Board, GameStatus, ai_move, player_move};
///
/// let after_player = player_move(&Board::new(), 4)?;
/// let after_ai = ai_move(&after_player.board)?;
/// assert_eq!(after_ai.status(), GameStatus::Ongoing);
/// assert_eq!(after_ai.board.occupied_count(), 2);
/// # Ok::<(), noughts::Error>(())
/// ```
pub fn ai_move(board: &Board) -> Result<MoveOutcome> {
    ai_move_with(board, &Searcher::default())
}

/// Search and apply the AI's move with an explicit searcher.
///
/// # Errors
///
/// Returns [`Error::NoLegalMove`] if the game is already decided.
pub fn ai_move_with(board: &Board, searcher: &Searcher) -> Result<MoveOutcome> {
    let position = searcher.select_move(board)?;
    let next = board.apply_move(position, Mark::Ai)?;
    Ok(MoveOutcome::new(Side::Ai, position, next))
}

/// One entry of a session's move history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub side: Side,
    pub position: usize,
}

/// Result of a player turn: the player's move and the AI's reply, if the
/// game was still open after the player moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub player: MoveOutcome,
    pub ai: Option<MoveOutcome>,
}

/// A single game against the AI.
///
/// The session owns the authoritative board. Once the game is decided every
/// move is rejected until [`GameSession::reset`].
#[derive(Debug, Clone)]
pub struct GameSession {
    config: EngineConfig,
    searcher: Searcher,
    board: Board,
    history: Vec<MoveRecord>,
}

impl GameSession {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            searcher: config.searcher(),
            board: Board::new(),
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn evaluation(&self) -> Evaluation {
        self.board.evaluate()
    }

    pub fn status(&self) -> GameStatus {
        self.evaluation().status
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Side expected to move next, `None` once the game is decided
    pub fn to_move(&self) -> Option<Side> {
        if self.status().is_terminal() {
            return None;
        }
        if self.history.len().is_multiple_of(2) {
            Some(self.config.opener)
        } else {
            Some(self.config.opener.opponent())
        }
    }

    /// Start a fresh game with the same configuration
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "resetting session");
        self.board = Board::new();
        self.history.clear();
    }

    /// Play the player's move and, if the game is still open, the AI's reply.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] for an illegal position or a decided
    /// game, and [`Error::OutOfTurn`] when the AI is expected to move.
    #[instrument(skip(self), fields(board = %self.board.encode()))]
    pub fn play_player(&mut self, position: usize) -> Result<Turn> {
        self.expect_turn(Side::Player, position)?;

        let player = player_move(&self.board, position)?;
        self.commit(&player);

        let ai = if player.is_terminal() {
            debug!(status = %player.status(), "game decided by player move");
            None
        } else {
            Some(self.play_ai()?)
        };

        Ok(Turn { player, ai })
    }

    /// Let the AI move. Used directly when the AI opens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMove`] on a decided game and
    /// [`Error::OutOfTurn`] when the player is expected to move.
    #[instrument(skip(self), fields(board = %self.board.encode()))]
    pub fn play_ai(&mut self) -> Result<MoveOutcome> {
        match self.to_move() {
            None => {
                return Err(Error::NoLegalMove {
                    status: self.status(),
                });
            }
            Some(Side::Player) => {
                return Err(Error::OutOfTurn {
                    expected: Side::Player,
                });
            }
            Some(Side::Ai) => {}
        }

        let outcome = ai_move_with(&self.board, &self.searcher)?;
        self.commit(&outcome);
        debug!(position = outcome.position, status = %outcome.status(), "ai moved");
        Ok(outcome)
    }

    fn expect_turn(&self, side: Side, position: usize) -> Result<()> {
        match self.to_move() {
            None => Err(Error::InvalidMove {
                position,
                reason: MoveRejection::GameOver,
            }),
            Some(expected) if expected != side => Err(Error::OutOfTurn { expected }),
            Some(_) => Ok(()),
        }
    }

    fn commit(&mut self, outcome: &MoveOutcome) {
        self.board = outcome.board;
        self.history.push(MoveRecord {
            side: outcome.side,
            position: outcome.position,
        });
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
