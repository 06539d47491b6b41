//! Board representation.
//!
//! Contains the cell type and the board snapshot analyzed by the search.

pub mod cell;
pub mod state;

pub use cell::Cell;
pub use state::{Board, BoardError, MAX_COLUMNS, MAX_ROWS};
