//! Greedy single-move search.
//!
//! Scans every candidate cell in row-major order and keeps the first one
//! reversing the most opponent pieces. Looks exactly one move ahead.

use rayon::prelude::*;
use serde::Serialize;

use crate::board::{Board, MAX_COLUMNS};
use crate::movegen::{candidate_moves, count_all};

/// The move reversing the most pieces, with its capture count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BestMove {
    pub row: usize,
    pub col: usize,
    pub captures: usize,
}

impl BestMove {
    /// Column letter, `a` for the first column. Columns past the board
    /// limit have no letter and show as `?`.
    pub fn column_letter(&self) -> char {
        if self.col < MAX_COLUMNS {
            char::from(b'a' + self.col as u8)
        } else {
            '?'
        }
    }

    /// One-based row number.
    pub fn row_number(&self) -> usize {
        self.row + 1
    }

    /// Square name such as `c4`.
    pub fn square(&self) -> String {
        format!("{}{}", self.column_letter(), self.row_number())
    }
}

/// Finds the move for `board.to_move()` that reverses the most opponent
/// pieces.
///
/// Ties go to the candidate found first in row-major order. Returns `None`
/// when the board is invalid or no candidate reverses anything. The board
/// is only read.
pub fn best_move(board: &Board) -> Option<BestMove> {
    let mut best: Option<BestMove> = None;

    for (row, col) in candidate_moves(board) {
        let captures = count_all(board, row, col);
        let best_so_far = best.map_or(0, |b| b.captures);
        if captures > best_so_far {
            best = Some(BestMove { row, col, captures });
        }
    }

    best
}

/// Evaluates independent boards in parallel on the current rayon pool.
///
/// Results are returned in input order.
pub fn best_moves(boards: &[Board]) -> Vec<Option<BestMove>> {
    boards.par_iter().map(best_move).collect()
}
