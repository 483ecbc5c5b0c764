//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use noughts::{Board, Mark, Side, tictactoe::player_move};

/// Parse a board literal, panicking on malformed fixtures.
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|err| panic!("bad fixture '{s}': {err}"))
}

/// Every board reachable from the empty board under any play, decided
/// boards included, paired with the side to move. `opener` moves first.
///
/// The result is sorted by encoding so test failures are reproducible.
pub fn reachable_boards(opener: Side) -> Vec<(Board, Side)> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();
    collect(Board::new(), opener, &mut seen, &mut found);
    found.sort_by_key(|(b, _)| b.encode());
    found
}

/// Ongoing reachable boards on which it is the AI's turn.
pub fn ai_to_move_boards(opener: Side) -> Vec<Board> {
    reachable_boards(opener)
        .into_iter()
        .filter(|(b, side)| *side == Side::Ai && !b.evaluate().is_terminal())
        .map(|(b, _)| b)
        .collect()
}

fn collect(
    board: Board,
    to_move: Side,
    seen: &mut HashSet<Board>,
    found: &mut Vec<(Board, Side)>,
) {
    if !seen.insert(board) {
        return;
    }
    found.push((board, to_move));
    if board.evaluate().is_terminal() {
        return;
    }

    for pos in board.empty_positions() {
        let next = match to_move {
            Side::Player => player_move(&board, pos)
                .expect("empty cell on an ongoing board")
                .board,
            Side::Ai => board
                .apply_move(pos, Mark::Ai)
                .expect("empty cell on an ongoing board"),
        };
        collect(next, to_move.opponent(), seen, found);
    }
}
