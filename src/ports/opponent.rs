//! Opponent port - the player side of a game against the AI

use crate::{Result, tictactoe::Board};

/// Source of player moves
///
/// # Examples
///
/// ```
/// use noughts::{Result, ports::Opponent, tictactoe::Board};
///
/// struct FirstFree;
///
/// impl Opponent for FirstFree {
///     fn choose(&mut self, board: &Board) -> Result<usize> {
///         Ok(board.empty_positions()[0])
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
/// ```
pub trait Opponent: Send {
    /// Pick the player's next position (0-8) on an ongoing board.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced (decided board, or an
    /// input source that failed).
    fn choose(&mut self, board: &Board) -> Result<usize>;

    /// Name used in summaries and logs.
    fn name(&self) -> &str;

    /// Called before every new game.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for stateless opponents.
    fn reset(&mut self) {}

    /// Reseed any internal randomness so a batch can be replayed.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for deterministic opponents.
    fn set_rng_seed(&mut self, _seed: u64) {}
}
