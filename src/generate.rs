//! Random position generation.
//!
//! Produces boards with pieces scattered at a chosen density, for feeding the
//! main binary, benchmarks, and cross-checking tests. Positions are not
//! reachable-by-play; they only need to satisfy the board invariants.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, BoardError, Cell};

/// Settings for a batch of random boards.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Number of boards to produce.
    pub count: usize,
    pub columns: usize,
    pub rows: usize,
    /// Probability that a cell holds a piece, clamped to 0..=1.
    pub fill: f64,
    /// Random seed (0 = use entropy).
    pub seed: u64,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            count: 10,
            columns: 8,
            rows: 8,
            fill: 0.5,
            seed: 0,
        }
    }
}

/// Builds one random board. Each cell is a piece with probability `fill`,
/// black or white with equal odds; the mover is also a coin flip.
pub fn random_board(
    rng: &mut impl Rng,
    title: impl Into<String>,
    columns: usize,
    rows: usize,
    fill: f64,
) -> Result<Board, BoardError> {
    let to_move = if rng.gen_bool(0.5) { Cell::Black } else { Cell::White };
    let mut board = Board::try_new(title, columns, rows, to_move)?;
    let fill = fill.clamp(0.0, 1.0);

    for row in 0..rows {
        for col in 0..columns {
            if rng.gen::<f64>() < fill {
                let cell = if rng.gen_bool(0.5) { Cell::Black } else { Cell::White };
                board.set(row, col, cell);
            }
        }
    }

    Ok(board)
}

/// Generates `config.count` boards titled `Random board N`.
pub fn generate_boards(config: &GenConfig) -> Result<Vec<Board>, BoardError> {
    let mut rng = if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed)
    } else {
        SmallRng::from_entropy()
    };

    (0..config.count)
        .map(|i| {
            random_board(
                &mut rng,
                format!("Random board {}", i + 1),
                config.columns,
                config.rows,
                config.fill,
            )
        })
        .collect()
}
