//! Noughts CLI - play, analyze and simulate Tic-Tac-Toe against an optimal AI
//!
//! This CLI provides:
//! - An interactive game on the terminal
//! - Move scores for any board position
//! - Batch simulations against baseline opponents

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-Tac-Toe against an AI that never loses", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(noughts::cli::commands::play::PlayArgs),

    /// Score every AI move on a board
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),

    /// Run many games against a baseline opponent
    Simulate(noughts::cli::commands::simulate::SimulateArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "noughts=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
        Commands::Simulate(args) => noughts::cli::commands::simulate::execute(args),
    }
}
