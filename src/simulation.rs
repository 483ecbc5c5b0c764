//! Batch play: an [`Opponent`] against the engine over many games

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    app::SimulationConfig,
    ports::Opponent,
    search::SearchStrategy,
    tictactoe::{GameSession, GameStatus, Side},
};

/// Tally of a finished batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub games: usize,
    pub player_wins: usize,
    pub ai_wins: usize,
    pub ties: usize,
    /// Moves played by both sides across all games
    pub total_moves: usize,
    pub strategy: SearchStrategy,
    pub opener: Side,
    pub seed: Option<u64>,
    pub opponent: String,
}

impl SimulationSummary {
    fn new(config: &SimulationConfig, opponent: &str) -> Self {
        Self {
            games: 0,
            player_wins: 0,
            ai_wins: 0,
            ties: 0,
            total_moves: 0,
            strategy: config.engine.strategy,
            opener: config.engine.opener,
            seed: config.seed,
            opponent: opponent.to_string(),
        }
    }

    fn record(&mut self, status: GameStatus, moves: usize) {
        self.games += 1;
        self.total_moves += moves;
        match status {
            GameStatus::PlayerWon => self.player_wins += 1,
            GameStatus::AiWon => self.ai_wins += 1,
            GameStatus::Tie => self.ties += 1,
            GameStatus::Ongoing => {}
        }
    }

    /// Share of games the AI did not lose
    pub fn unbeaten_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        (self.ai_wins + self.ties) as f64 / self.games as f64
    }

    pub fn average_moves(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games as f64
    }
}

/// Play one game from a fresh board and return its terminal status.
///
/// The session is reset first; the opponent supplies every player move and
/// the session answers with the engine.
///
/// # Errors
///
/// Propagates any error from the opponent or an illegal move it produces.
pub fn play_game(session: &mut GameSession, opponent: &mut dyn Opponent) -> Result<GameStatus> {
    session.reset();
    opponent.reset();

    while let Some(side) = session.to_move() {
        match side {
            Side::Player => {
                let position = opponent.choose(session.board())?;
                session.play_player(position)?;
            }
            Side::Ai => {
                session.play_ai()?;
            }
        }
    }

    let status = session.status();
    debug!(%status, moves = session.history().len(), "game finished");
    Ok(status)
}

/// Play `config.games` games and tally the outcomes.
///
/// When `config.seed` is set the opponent is reseeded with it first, so the
/// same config replays the same batch. `on_game` is called after every game
/// with its index and status, which lets callers drive a progress display.
///
/// # Errors
///
/// Stops at the first failing game and returns its error.
///
/// # Examples
///
/// ```
/// use noughts::{adapters::RandomOpponent, app::SimulationConfig, simulation};
///
/// let config = SimulationConfig::new(5).with_seed(1);
/// let mut opponent = RandomOpponent::new("random".to_string());
/// let summary = simulation::run(&config, &mut opponent, |_, _| {})?;
/// assert_eq!(summary.games, 5);
/// assert_eq!(summary.player_wins, 0);
/// # Ok::<(), noughts::Error>(())
/// ```
pub fn run<F>(
    config: &SimulationConfig,
    opponent: &mut dyn Opponent,
    mut on_game: F,
) -> Result<SimulationSummary>
where
    F: FnMut(usize, GameStatus),
{
    if let Some(seed) = config.seed {
        opponent.set_rng_seed(seed);
    }

    let mut session = GameSession::new(config.engine);
    let mut summary = SimulationSummary::new(config, opponent.name());

    for game in 0..config.games {
        let status = play_game(&mut session, opponent)?;
        summary.record(status, session.history().len());
        on_game(game, status);
    }

    info!(
        games = summary.games,
        player_wins = summary.player_wins,
        ai_wins = summary.ai_wins,
        ties = summary.ties,
        "simulation complete"
    );
    Ok(summary)
}
