//! Adjacency pre-filter for candidate moves.

use super::capture::ALL_DIRECTIONS;
use crate::board::{Board, Cell};

/// Cheap necessary condition for a legal move at (row, col).
///
/// True when the cell is empty and at least one of its neighbours (clipped
/// to the board on each axis) holds an opponent piece. A cell that passes
/// may still capture nothing; only a non-zero capture count confirms the
/// move. False for an invalid board or a coordinate outside the board.
pub fn can_play_at(board: &Board, row: usize, col: usize) -> bool {
    if !board.is_valid() || board.get(row, col) != Some(Cell::Empty) {
        return false;
    }

    let mover = board.to_move();
    ALL_DIRECTIONS.iter().any(|d| {
        d.step(board, row, col)
            .and_then(|(r, c)| board.get(r, c))
            .is_some_and(|cell| cell.is_opponent_of(mover))
    })
}
