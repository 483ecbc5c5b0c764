//! Analyze command - status and move scores for a single board

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{describe, print_kv, print_section, render_board},
    search::{SearchStats, SearchStrategy, Searcher},
    tictactoe::{Board, Evaluation},
};

#[derive(Parser, Debug)]
#[command(about = "Analyze a board position with the AI to move")]
pub struct AnalyzeArgs {
    /// Board as nine cells of X, O and '.', row-major (whitespace ignored)
    pub board: String,

    /// Search strategy used for scoring
    #[arg(long, short = 's', value_enum, default_value_t = SearchStrategy::default())]
    pub strategy: SearchStrategy,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoveScore {
    pub position: usize,
    pub score: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub board: String,
    pub evaluation: Evaluation,
    pub strategy: SearchStrategy,
    /// Empty when the board is already decided
    pub moves: Vec<MoveScore>,
    pub best_move: Option<usize>,
    pub stats: Option<SearchStats>,
}

/// Evaluate `board` and, if the game is open, score every AI move
pub fn analyze_board(board: &Board, strategy: SearchStrategy) -> crate::Result<Analysis> {
    let evaluation = board.evaluate();
    let mut analysis = Analysis {
        board: board.encode(),
        evaluation,
        strategy,
        moves: Vec::new(),
        best_move: None,
        stats: None,
    };
    if evaluation.is_terminal() {
        return Ok(analysis);
    }

    let (scores, stats) = Searcher::new(strategy).score_moves_with_stats(board)?;
    // First maximum, matching the search's lowest-index tie-break
    let mut best: Option<(usize, i32)> = None;
    for &(position, score) in &scores {
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((position, score));
        }
    }

    analysis.moves = scores
        .into_iter()
        .map(|(position, score)| MoveScore { position, score })
        .collect();
    analysis.best_move = best.map(|(position, _)| position);
    analysis.stats = Some(stats);
    Ok(analysis)
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("could not parse board '{}'", args.board))?;
    let analysis = analyze_board(&board, args.strategy)?;

    if args.json {
        let json = serde_json::to_string_pretty(&analysis).context("failed to encode analysis")?;
        println!("{json}");
        return Ok(());
    }

    print_section("Board");
    print!("{}", render_board(&board));
    print_kv("Status", &describe(&analysis.evaluation));

    if let Some(best) = analysis.best_move {
        print_section(&format!("AI move scores ({})", analysis.strategy));
        for MoveScore { position, score } in &analysis.moves {
            let marker = if *position == best { "  <- best" } else { "" };
            print_kv(&format!("cell {position}"), &format!("{score:+}{marker}"));
        }
        if let Some(stats) = analysis.stats {
            print_kv("Nodes", &stats.nodes.to_string());
            print_kv("Cache hits", &stats.cache_hits.to_string());
            print_kv("Cutoffs", &stats.cutoffs.to_string());
        }
    }

    Ok(())
}
