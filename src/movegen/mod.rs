//! Candidate move generation and capture counting.
//!
//! Candidates are produced by the adjacency filter in row-major order;
//! the capture counter decides how many pieces each one actually reverses.

pub mod capture;
pub mod legality;

use crate::board::Board;

pub use capture::{count_all, count_direction, Direction, ALL_DIRECTIONS};
pub use legality::can_play_at;

/// Cells passing the adjacency filter, row by row, left to right.
///
/// Returns an empty list for an invalid board.
pub fn candidate_moves(board: &Board) -> Vec<(usize, usize)> {
    let mut moves = Vec::new();
    if !board.is_valid() {
        return moves;
    }

    for row in 0..board.rows() {
        for col in 0..board.columns() {
            if can_play_at(board, row, col) {
                moves.push((row, col));
            }
        }
    }

    moves
}
