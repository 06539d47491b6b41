//! Move search.
//!
//! Picks the single move that reverses the most opponent pieces, for one
//! board or for a batch of independent boards.

pub mod greedy;

pub use greedy::{best_move, best_moves, BestMove};
