//! Scoped hypothetical placements used during search

use std::ops::{Deref, DerefMut};

use crate::tictactoe::{Board, Mark};

/// A mark placed on a borrowed board for the lifetime of this guard.
///
/// Dropping the guard clears the cell again, including when the scope is
/// left by `?`, `break` or unwinding.
pub(crate) struct Placement<'a> {
    board: &'a mut Board,
    pos: usize,
}

impl<'a> Placement<'a> {
    pub(crate) fn new(board: &'a mut Board, pos: usize, mark: Mark) -> Self {
        debug_assert!(board.is_empty_at(pos), "placement on occupied cell {pos}");
        board.set(pos, mark);
        Placement { board, pos }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, Mark::Empty);
    }
}
