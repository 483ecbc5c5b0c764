//! Output formatting and progress bars for CLI

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, Evaluation, GameStatus};

/// Create a progress bar for a simulation batch
pub fn create_games_progress(total_games: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .context("invalid progress bar template")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{}:", key), value);
}

/// Render a board as a grid with row and column numbers (1-based) and
/// the cell index shown in empty cells
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    1   2   3\n");
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let idx = row * 3 + col;
                if board.is_empty_at(idx) {
                    idx.to_string()
                } else {
                    board.get(idx).to_char().to_string()
                }
            })
            .collect();
        out.push_str(&format!("{}   {}\n", row + 1, cells.join(" | ")));
        if row < 2 {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}

/// One-line description of an evaluation
pub fn describe(evaluation: &Evaluation) -> String {
    match (evaluation.status, evaluation.winning_line) {
        (GameStatus::PlayerWon, Some(line)) => format!("You win! (line {line:?})"),
        (GameStatus::AiWon, Some(line)) => format!("The AI wins (line {line:?})"),
        (GameStatus::Tie, _) => "It's a tie".to_string(),
        (status, _) => status.to_string(),
    }
}

/// Format a ratio as a percentage
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
