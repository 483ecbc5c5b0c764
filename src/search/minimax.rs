//! Exhaustive minimax search for the AI side
//!
//! Scores are from the AI's point of view: an AI win `depth` plies ahead is
//! worth `10 - depth`, a player win `-10 + depth`, a tie `0`. The depth term
//! makes the AI take the quickest win and put off a loss as long as possible.

use std::{collections::HashMap, fmt};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::placement::Placement;
use crate::{
    error::{Error, Result},
    tictactoe::{Board, GameStatus, Mark},
};

/// Base value of a decided game
pub const WIN_SCORE: i32 = 10;

/// How the game tree is traversed. Every strategy picks the same move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Full minimax, no caching
    Plain,
    /// Minimax with a transposition table scoped to one search
    #[default]
    Memoized,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
}

impl SearchStrategy {
    pub fn all() -> [SearchStrategy; 3] {
        [
            SearchStrategy::Plain,
            SearchStrategy::Memoized,
            SearchStrategy::AlphaBeta,
        ]
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchStrategy::Plain => "plain",
            SearchStrategy::Memoized => "memoized",
            SearchStrategy::AlphaBeta => "alpha-beta",
        };
        f.write_str(name)
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Boards visited, including the root's children
    pub nodes: u64,
    pub cache_hits: u64,
    pub cutoffs: u64,
}

/// Outcome of a root search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub position: usize,
    pub score: i32,
    pub stats: SearchStats,
}

/// Score for a terminal status `depth` plies below the root, `None` while ongoing
fn terminal_score(status: GameStatus, depth: i32) -> Option<i32> {
    match status {
        GameStatus::PlayerWon => Some(-WIN_SCORE + depth),
        GameStatus::AiWon => Some(WIN_SCORE - depth),
        GameStatus::Tie => Some(0),
        GameStatus::Ongoing => None,
    }
}

fn mover(maximizing: bool) -> Mark {
    if maximizing { Mark::Ai } else { Mark::Player }
}

/// State of a single search from one root board
struct SearchRun {
    strategy: SearchStrategy,
    table: HashMap<(Board, bool), i32>,
    stats: SearchStats,
}

impl SearchRun {
    fn new(strategy: SearchStrategy) -> Self {
        Self {
            strategy,
            table: HashMap::new(),
            stats: SearchStats::default(),
        }
    }

    /// Exact minimax value of `board` with the given side to move.
    ///
    /// Within one root every board sits at a fixed depth, so cached values
    /// stay exact.
    fn exact(&mut self, board: &mut Board, maximizing: bool, depth: i32) -> i32 {
        let memoize = self.strategy == SearchStrategy::Memoized;
        if memoize && let Some(&value) = self.table.get(&(*board, maximizing)) {
            self.stats.cache_hits += 1;
            return value;
        }

        self.stats.nodes += 1;
        if let Some(score) = terminal_score(board.evaluate().status, depth) {
            return score;
        }

        let mark = mover(maximizing);
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for pos in board.empty_positions() {
            let mut placed = Placement::new(board, pos, mark);
            let value = self.exact(&mut placed, !maximizing, depth + 1);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        if memoize {
            self.table.insert((*board, maximizing), best);
        }
        best
    }

    /// Alpha-beta value. Exact when the true value lies strictly inside
    /// `(alpha, beta)`; otherwise only a bound on the same side of the window.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;
        if let Some(score) = terminal_score(board.evaluate().status, depth) {
            return score;
        }

        let mark = mover(maximizing);
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for pos in board.empty_positions() {
            let value = {
                let mut placed = Placement::new(board, pos, mark);
                self.alpha_beta(&mut placed, !maximizing, depth + 1, alpha, beta)
            };

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }

    /// Value of a board right after the AI moved, player to reply.
    ///
    /// `floor` is the best score already found at the root; alpha-beta may
    /// return any value `<= floor` for a child that cannot beat it.
    fn child_value(&mut self, board: &mut Board, floor: i32) -> i32 {
        match self.strategy {
            SearchStrategy::Plain | SearchStrategy::Memoized => self.exact(board, false, 1),
            SearchStrategy::AlphaBeta => self.alpha_beta(board, false, 1, floor, i32::MAX),
        }
    }
}

fn ensure_searchable(board: &Board) -> Result<()> {
    let status = board.evaluate().status;
    if status.is_terminal() {
        return Err(Error::NoLegalMove { status });
    }
    Ok(())
}

/// Minimax move selector for the AI side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Searcher {
    strategy: SearchStrategy,
}

impl Searcher {
    pub fn new(strategy: SearchStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Search `board` with the AI to move.
    ///
    /// Empty cells are tried in ascending order and only a strictly better
    /// score replaces the current choice, so ties go to the lowest index.
    /// The caller's board is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMove`] if the board is won or tied.
    pub fn search(&self, board: &Board) -> Result<SearchReport> {
        ensure_searchable(board)?;

        let mut run = SearchRun::new(self.strategy);
        let mut scratch = *board;
        let mut best: Option<(usize, i32)> = None;

        for pos in board.empty_positions() {
            let floor = best.map_or(i32::MIN, |(_, score)| score);
            let value = {
                let mut placed = Placement::new(&mut scratch, pos, Mark::Ai);
                run.child_value(&mut placed, floor)
            };
            trace!(position = pos, score = value, "scored root move");

            if best.is_none_or(|(_, score)| value > score) {
                best = Some((pos, value));
            }
        }

        let (position, score) = best.ok_or(Error::NoLegalMove {
            status: GameStatus::Ongoing,
        })?;
        debug!(
            strategy = %self.strategy,
            position,
            score,
            nodes = run.stats.nodes,
            cache_hits = run.stats.cache_hits,
            cutoffs = run.stats.cutoffs,
            "selected ai move"
        );

        Ok(SearchReport {
            position,
            score,
            stats: run.stats,
        })
    }

    /// Index of the optimal AI move
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMove`] if the board is won or tied.
    pub fn select_move(&self, board: &Board) -> Result<usize> {
        self.search(board).map(|report| report.position)
    }

    /// Exact score of every legal AI move, in ascending position order
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMove`] if the board is won or tied.
    pub fn score_moves(&self, board: &Board) -> Result<Vec<(usize, i32)>> {
        self.score_moves_with_stats(board).map(|(scores, _)| scores)
    }

    /// [`Searcher::score_moves`] plus the counters of that same pass
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMove`] if the board is won or tied.
    pub fn score_moves_with_stats(
        &self,
        board: &Board,
    ) -> Result<(Vec<(usize, i32)>, SearchStats)> {
        ensure_searchable(board)?;

        let mut run = SearchRun::new(self.strategy);
        let mut scratch = *board;
        let scores = board
            .empty_positions()
            .into_iter()
            .map(|pos| {
                let mut placed = Placement::new(&mut scratch, pos, Mark::Ai);
                (pos, run.child_value(&mut placed, i32::MIN))
            })
            .collect();
        Ok((scores, run.stats))
    }
}

/// Select the AI's move with the default strategy.
///
/// # Errors
///
/// Returns [`Error::NoLegalMove`] if the board is won or tied.
///
/// # Examples
///
/// ```
/// use noughts::{search::select_ai_move, tictactoe::Board};
///
/// // AI (O) completes the middle row instead of blocking the top row
/// let board = Board::from_string("XX. OO. ..X").unwrap();
/// assert_eq!(select_ai_move(&board).unwrap(), 5);
/// ```
pub fn select_ai_move(board: &Board) -> Result<usize> {
    Searcher::default().select_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_takes_immediate_win_over_block() {
        // Player threatens 2 on the top row; AI completes the middle row at 5
        let b = board("XX. OO. ..X");
        for strategy in SearchStrategy::all() {
            assert_eq!(Searcher::new(strategy).select_move(&b).unwrap(), 5);
        }

        let diagonal = board("O.. XOX X..");
        assert_eq!(select_ai_move(&diagonal).unwrap(), 8);
    }

    #[test]
    fn test_blocks_player_threat() {
        // Player threatens 2 on the top row
        let b = board("XX. .O. ...");
        assert_eq!(select_ai_move(&b).unwrap(), 2);
    }

    #[test]
    fn test_single_empty_cell() {
        let b = board("XOX XOO OX.");
        assert_eq!(select_ai_move(&b).unwrap(), 8);
    }

    #[test]
    fn test_terminal_boards_rejected() {
        let full = board("XOX OXO OXO");
        assert_eq!(
            select_ai_move(&full),
            Err(Error::NoLegalMove {
                status: GameStatus::Tie
            })
        );

        let won = board("XXX OO. ...");
        assert_eq!(
            select_ai_move(&won),
            Err(Error::NoLegalMove {
                status: GameStatus::PlayerWon
            })
        );
    }

    #[test]
    fn test_search_does_not_touch_input() {
        let b = board("X........");
        let copy = b;
        let _ = select_ai_move(&b).unwrap();
        assert_eq!(b, copy);
    }

    #[test]
    fn test_immediate_win_score_reflects_depth() {
        let b = board("O.. XOX X..");
        let scores = Searcher::default().score_moves(&b).unwrap();
        let winning = scores.iter().find(|(pos, _)| *pos == 8).unwrap();
        assert_eq!(winning.1, WIN_SCORE - 1);
    }

    #[test]
    fn test_empty_board_is_drawn_with_perfect_play() {
        let report = Searcher::new(SearchStrategy::AlphaBeta)
            .search(&Board::new())
            .unwrap();
        assert_eq!(report.score, 0);
        assert_eq!(report.position, 0);
    }

    #[test]
    fn test_memoization_visits_fewer_nodes() {
        let empty = Board::new();
        let plain = Searcher::new(SearchStrategy::Plain).search(&empty).unwrap();
        let memo = Searcher::new(SearchStrategy::Memoized).search(&empty).unwrap();

        assert_eq!(plain.position, memo.position);
        assert_eq!(plain.score, memo.score);
        assert!(memo.stats.nodes < plain.stats.nodes);
        assert!(memo.stats.cache_hits > 0);
        assert_eq!(plain.stats.cache_hits, 0);
    }

    #[test]
    fn test_alpha_beta_prunes() {
        let report = Searcher::new(SearchStrategy::AlphaBeta)
            .search(&Board::new())
            .unwrap();
        assert!(report.stats.cutoffs > 0);
    }

    #[test]
    fn test_score_moves_with_stats_counts_its_own_pass() {
        let b = board("X........");
        for strategy in SearchStrategy::all() {
            let searcher = Searcher::new(strategy);
            let (scores, stats) = searcher.score_moves_with_stats(&b).unwrap();
            assert_eq!(scores, searcher.score_moves(&b).unwrap());
            assert!(stats.nodes >= scores.len() as u64);
        }
    }

    #[test]
    fn test_strategy_display_matches_value_names() {
        for strategy in SearchStrategy::all() {
            let value = strategy.to_possible_value().unwrap();
            assert_eq!(value.get_name(), strategy.to_string());
        }
    }
}
