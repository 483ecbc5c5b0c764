//! Opponent replaying a fixed list of positions

use crate::{Error, Result, ports::Opponent, tictactoe::Board};

/// Plays the scripted positions in order, skipping any already taken.
/// Once the script runs out it takes the lowest empty cell.
#[derive(Debug, Clone)]
pub struct ScriptedOpponent {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedOpponent {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl Opponent for ScriptedOpponent {
    fn choose(&mut self, board: &Board) -> Result<usize> {
        while let Some(&pos) = self.script.get(self.cursor) {
            self.cursor += 1;
            if board.is_empty_at(pos) {
                return Ok(pos);
            }
        }

        board
            .empty_positions()
            .first()
            .copied()
            .ok_or(Error::NoLegalMove {
                status: board.evaluate().status,
            })
    }

    fn name(&self) -> &str {
        "scripted"
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}
