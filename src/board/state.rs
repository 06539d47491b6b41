//! Board snapshot representation.
//!
//! Holds a single static position: the playable rectangle of cells, the
//! side to move, and a free-form title carried through to the output.

use super::cell::Cell;

/// Exclusive upper bound on the number of columns (columns are lettered a..y).
pub const MAX_COLUMNS: usize = 26;

/// Exclusive upper bound on the number of rows.
pub const MAX_ROWS: usize = 26;

/// Reasons a board snapshot fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board has no columns")]
    ZeroColumns,

    #[error("board has {0} columns, must be fewer than {max}", max = MAX_COLUMNS)]
    TooManyColumns(usize),

    #[error("board has no rows")]
    ZeroRows,

    #[error("board has {0} rows, must be fewer than {max}", max = MAX_ROWS)]
    TooManyRows(usize),

    #[error("side to move must be black or white")]
    NoMover,
}

/// A single board position.
///
/// Cells are stored row-major in a flat vector of exactly `rows * columns`
/// entries. A `Board` may be built with out-of-range dimensions or an empty
/// mover so that callers can represent what they read; every analysis
/// function checks [`Board::is_valid`] first and treats an invalid board
/// as having nothing to offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    title: String,
    columns: usize,
    rows: usize,
    to_move: Cell,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an all-empty board without validating it.
    ///
    /// Cells are only allocated when both dimensions are within bounds, so
    /// an invalid board never owns a large buffer.
    pub fn new(title: impl Into<String>, columns: usize, rows: usize, to_move: Cell) -> Self {
        let len = if columns < MAX_COLUMNS && rows < MAX_ROWS {
            columns * rows
        } else {
            0
        };
        Board {
            title: title.into(),
            columns,
            rows,
            to_move,
            cells: vec![Cell::Empty; len],
        }
    }

    /// Creates an all-empty board, rejecting dimensions or movers that
    /// violate the board invariants.
    pub fn try_new(
        title: impl Into<String>,
        columns: usize,
        rows: usize,
        to_move: Cell,
    ) -> Result<Self, BoardError> {
        let board = Board::new(title, columns, rows, to_move);
        board.validate()?;
        Ok(board)
    }

    /// Checks the board invariants, reporting the first one violated.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.columns == 0 {
            return Err(BoardError::ZeroColumns);
        }
        if self.columns >= MAX_COLUMNS {
            return Err(BoardError::TooManyColumns(self.columns));
        }
        if self.rows == 0 {
            return Err(BoardError::ZeroRows);
        }
        if self.rows >= MAX_ROWS {
            return Err(BoardError::TooManyRows(self.rows));
        }
        if !self.to_move.is_piece() {
            return Err(BoardError::NoMover);
        }
        Ok(())
    }

    /// True iff the board satisfies every invariant and may be analyzed.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The side that places the next piece.
    pub fn to_move(&self) -> Cell {
        self.to_move
    }

    /// True if (row, col) lies inside the playable rectangle.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns && !self.cells.is_empty()
    }

    /// Returns the cell at (row, col), or `None` outside the playable rectangle.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.contains(row, col) {
            Some(self.cells[row * self.columns + col])
        } else {
            None
        }
    }

    /// Sets the cell at (row, col). Returns false if the coordinate is outside
    /// the playable rectangle.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        self.cells[row * self.columns + col] = cell;
        true
    }

    /// Cells of one row, left to right. Empty for rows outside the board.
    pub fn row(&self, row: usize) -> &[Cell] {
        if row < self.rows && !self.cells.is_empty() {
            &self.cells[row * self.columns..(row + 1) * self.columns]
        } else {
            &[]
        }
    }

    /// Number of pieces of the given colour on the board.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}
