//! Configuration types for game sessions and simulations.

use serde::{Deserialize, Serialize};

use crate::{
    search::{SearchStrategy, Searcher},
    tictactoe::Side,
};

/// Configuration for a game session.
///
/// # Examples
///
/// ```
/// use noughts::app::EngineConfig;
/// use noughts::search::SearchStrategy;
/// use noughts::tictactoe::Side;
///
/// let config = EngineConfig::new()
///     .with_strategy(SearchStrategy::AlphaBeta)
///     .with_opener(Side::Ai);
/// assert_eq!(config.opener, Side::Ai);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Traversal used by the AI search
    pub strategy: SearchStrategy,
    /// Side that moves first in every game
    pub opener: Side,
}

impl EngineConfig {
    /// Create a configuration with defaults:
    /// - Strategy: `SearchStrategy::Memoized`
    /// - Opener: the player
    pub fn new() -> Self {
        Self {
            strategy: SearchStrategy::default(),
            opener: Side::Player,
        }
    }

    /// Set the search strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set which side opens.
    pub fn with_opener(mut self, opener: Side) -> Self {
        self.opener = opener;
        self
    }

    pub fn searcher(&self) -> Searcher {
        Searcher::new(self.strategy)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a batch of simulated games.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play
    pub games: usize,
    /// Seed applied to the opponent before the first game (None = keep its own RNG)
    pub seed: Option<u64>,
    /// Session settings used for every game
    pub engine: EngineConfig,
}

impl SimulationConfig {
    pub fn new(games: usize) -> Self {
        Self {
            games,
            seed: None,
            engine: EngineConfig::default(),
        }
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(100)
    }
}
