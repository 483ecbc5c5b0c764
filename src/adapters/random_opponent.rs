//! Randomised baseline opponents

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Opponent,
    tictactoe::{Board, Side, winning_moves},
};

fn pick(rng: &mut StdRng, board: &Board) -> Result<usize> {
    let moves = board.empty_positions();
    if moves.is_empty() {
        return Err(Error::NoLegalMove {
            status: board.evaluate().status,
        });
    }
    let index = rng.random_range(0..moves.len());
    Ok(moves[index])
}

/// Uniformly random player
pub struct RandomOpponent {
    name: String,
    rng: StdRng,
}

impl RandomOpponent {
    /// Create a new random opponent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random opponent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Opponent for RandomOpponent {
    fn choose(&mut self, board: &Board) -> Result<usize> {
        pick(&mut self.rng, board)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// Random player that blocks the AI's immediate wins
///
/// Note: this does NOT try to win itself, it only blocks.
pub struct DefensiveOpponent {
    name: String,
    rng: StdRng,
}

impl DefensiveOpponent {
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Opponent for DefensiveOpponent {
    fn choose(&mut self, board: &Board) -> Result<usize> {
        if let Some(&block) = winning_moves(board, Side::Ai).first() {
            return Ok(block);
        }
        pick(&mut self.rng, board)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_opponent_picks_empty_cell() {
        let board = Board::from_string("XOX OXO .X.").unwrap();
        let mut opponent = RandomOpponent::with_seed("random".to_string(), 3);
        for _ in 0..20 {
            let pos = opponent.choose(&board).unwrap();
            assert!(pos == 6 || pos == 8);
        }
    }

    #[test]
    fn test_seeded_opponents_are_reproducible() {
        let board = Board::new();
        let mut a = RandomOpponent::with_seed("a".to_string(), 42);
        let mut b = RandomOpponent::with_seed("b".to_string(), 42);
        let seq_a: Vec<_> = (0..10).map(|_| a.choose(&board).unwrap()).collect();
        let seq_b: Vec<_> = (0..10).map(|_| b.choose(&board).unwrap()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_string("XOX OXO OXO").unwrap();
        let mut opponent = RandomOpponent::with_seed("random".to_string(), 1);
        assert!(matches!(
            opponent.choose(&board),
            Err(Error::NoLegalMove { .. })
        ));
    }

    #[test]
    fn test_set_rng_seed_matches_with_seed() {
        let board = Board::new();
        let mut seeded = DefensiveOpponent::with_seed("a".to_string(), 7);
        let mut reseeded = DefensiveOpponent::new("b".to_string());
        reseeded.set_rng_seed(7);

        let seq_a: Vec<_> = (0..10).map(|_| seeded.choose(&board).unwrap()).collect();
        let seq_b: Vec<_> = (0..10).map(|_| reseeded.choose(&board).unwrap()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_defensive_opponent_blocks() {
        // AI threatens 8 on the diagonal
        let board = Board::from_string("OX. XO. ...").unwrap();
        let mut opponent = DefensiveOpponent::with_seed("defensive".to_string(), 9);
        assert_eq!(opponent.choose(&board).unwrap(), 8);
    }
}
