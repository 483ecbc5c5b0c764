//! Simulate command - batch games of a baseline opponent against the AI

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use rand::random;

use crate::{
    adapters::{DefensiveOpponent, RandomOpponent},
    app::SimulationConfig,
    cli::{
        config::EngineArgs,
        output::{create_games_progress, percent, print_kv, print_section},
    },
    ports::Opponent,
    simulation::{self, SimulationSummary},
};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OpponentKind {
    /// Uniformly random legal moves
    #[default]
    Random,
    /// Random moves, but blocks the AI's immediate wins
    Defensive,
}

#[derive(Parser, Debug)]
#[command(about = "Play many games of a baseline opponent against the AI")]
pub struct SimulateArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Opponent playing the X side
    #[arg(long, short = 'o', value_enum, default_value_t = OpponentKind::Random)]
    pub opponent: OpponentKind,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Emit the summary as JSON
    #[arg(long)]
    pub json: bool,
}

fn build_opponent(kind: OpponentKind) -> Box<dyn Opponent> {
    match kind {
        OpponentKind::Random => Box::new(RandomOpponent::new("Random".to_string())),
        OpponentKind::Defensive => Box::new(DefensiveOpponent::new("Defensive".to_string())),
    }
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    // Unseeded runs still report the seed they used so they can be replayed
    let seed = args.seed.unwrap_or_else(random);
    let config = SimulationConfig::new(args.games)
        .with_seed(seed)
        .with_engine(args.engine.to_config());
    let mut opponent = build_opponent(args.opponent);

    let summary = if args.json {
        simulation::run(&config, opponent.as_mut(), |_, _| {})?
    } else {
        let pb = create_games_progress(config.games as u64)?;
        let result = simulation::run(&config, opponent.as_mut(), |_, status| {
            pb.set_message(status.to_string());
            pb.inc(1);
        });
        pb.finish_and_clear();
        result?
    };

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("failed to encode summary")?;
        println!("{json}");
    } else {
        print_summary(&summary);
    }

    if summary.player_wins > 0 {
        bail!(
            "the AI lost {} of {} games",
            summary.player_wins,
            summary.games
        );
    }
    Ok(())
}

fn print_summary(summary: &SimulationSummary) {
    print_section("Simulation");
    print_kv("Opponent", &summary.opponent);
    print_kv("Strategy", &summary.strategy.to_string());
    print_kv("Opener", &summary.opener.to_string());
    if let Some(seed) = summary.seed {
        print_kv("Seed", &seed.to_string());
    }
    print_kv("Games", &summary.games.to_string());
    print_kv("AI wins", &summary.ai_wins.to_string());
    print_kv("Ties", &summary.ties.to_string());
    print_kv("Player wins", &summary.player_wins.to_string());
    print_kv("Unbeaten", &percent(summary.unbeaten_rate()));
    print_kv("Avg moves", &format!("{:.2}", summary.average_moves()));
}
