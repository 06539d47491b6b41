//! Flipside greedy Reversi library.
//!
//! Exposes the board representation, capture counting, move search, and
//! text protocol modules for use by integration tests and the binaries.

pub mod board;
pub mod engine;
pub mod generate;
pub mod movegen;
pub mod protocol;
pub mod search;
