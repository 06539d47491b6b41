//! Cell contents and side identity.
//!
//! A cell is either empty or holds a black or white piece. The same enum
//! names the side to move, where `Empty` is never a legal mover.

use serde::Serialize;

/// The contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Returns the character used for this cell in the board text format.
    pub const fn text_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }

    /// Parses a cell from the board text format. Anything that is not a
    /// piece letter reads as an empty cell.
    pub fn from_text_char(c: char) -> Cell {
        match c {
            'B' => Cell::Black,
            'W' => Cell::White,
            _ => Cell::Empty,
        }
    }

    /// Parses a mover letter (`B` or `W`, either case).
    pub fn from_mover_char(c: char) -> Option<Cell> {
        match c {
            'B' | 'b' => Some(Cell::Black),
            'W' | 'w' => Some(Cell::White),
            _ => None,
        }
    }

    /// True if this cell holds a piece that belongs to the side opposing `mover`.
    pub fn is_opponent_of(self, mover: Cell) -> bool {
        self != Cell::Empty && self != mover
    }

    /// True for `Black` and `White`.
    pub const fn is_piece(self) -> bool {
        !matches!(self, Cell::Empty)
    }

    /// Uppercase side name used in the printed recommendation.
    pub const fn side_name(self) -> &'static str {
        match self {
            Cell::Empty => "NOBODY",
            Cell::Black => "BLACK",
            Cell::White => "WHITE",
        }
    }
}
