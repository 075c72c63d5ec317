//! Move path enumeration.
//!
//! Walks the legal move tree on board copies and counts the positions
//! reached after a fixed number of plies.

use super::legal_moves;
use chess_core::{Board, Color};

/// Counts the positions reachable from `board` in exactly `depth` plies,
/// with `side` to move first.
pub fn perft(board: &Board, side: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|m| perft(&board.with_move(m), side.opposite(), depth - 1))
        .sum()
}

/// Splits the `perft` total by first move, keyed by coordinate notation and
/// sorted by it.
pub fn perft_divide(board: &Board, side: Color, depth: u32) -> Vec<(String, u64)> {
    let moves = legal_moves(board, side);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let nodes = if depth > 1 {
            perft(&board.with_move(m), side.opposite(), depth - 1)
        } else {
            1
        };
        results.push((m.to_coordinate_notation(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
