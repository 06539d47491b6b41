//! Line-capture counting.
//!
//! A run of opponent pieces next to the placed piece is reversed only when a
//! piece of the mover's own colour closes it, before any empty cell and
//! before the edge of the board.

use crate::board::Board;

/// One of the eight compass directions, as (row, column) steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

/// All directions, in the order captures are summed.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::NorthWest,
    Direction::North,
    Direction::NorthEast,
    Direction::West,
    Direction::East,
    Direction::SouthWest,
    Direction::South,
    Direction::SouthEast,
];

impl Direction {
    /// Row and column step. Rows grow downwards.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }

    /// Looks up the direction for a step in {-1, 0, 1}², excluding (0, 0).
    pub fn from_delta(d_row: isize, d_col: isize) -> Option<Direction> {
        ALL_DIRECTIONS
            .iter()
            .copied()
            .find(|d| d.delta() == (d_row, d_col))
    }

    /// Moves one step from (row, col). Returns `None` if the step leaves the
    /// board's playable rectangle.
    pub fn step(self, board: &Board, row: usize, col: usize) -> Option<(usize, usize)> {
        let (d_row, d_col) = self.delta();
        let r = row.checked_add_signed(d_row)?;
        let c = col.checked_add_signed(d_col)?;
        if board.contains(r, c) {
            Some((r, c))
        } else {
            None
        }
    }
}

/// Counts the opponent pieces the side to move would reverse in one
/// direction by placing a piece at (row, col).
///
/// The origin cell is not read: the count is what a piece of
/// `board.to_move()` standing there would capture. Returns 0 for an invalid
/// board or an origin outside the playable rectangle.
pub fn count_direction(board: &Board, row: usize, col: usize, direction: Direction) -> usize {
    if !board.is_valid() || !board.contains(row, col) {
        return 0;
    }

    let mover = board.to_move();
    let mut count = 0;
    let (mut r, mut c) = (row, col);

    while let Some((next_r, next_c)) = direction.step(board, r, c) {
        match board.get(next_r, next_c) {
            Some(cell) if cell == mover => return count,
            Some(cell) if cell.is_opponent_of(mover) => count += 1,
            // Empty cell: the line is open.
            _ => return 0,
        }
        r = next_r;
        c = next_c;
    }

    // Ran off the board without closing the line.
    0
}

/// Total pieces reversed over all eight directions by placing the mover's
/// piece at (row, col).
pub fn count_all(board: &Board, row: usize, col: usize) -> usize {
    ALL_DIRECTIONS
        .iter()
        .map(|&d| count_direction(board, row, col, d))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    /// Builds a board from rows of text (`B`, `W`, anything else empty).
    fn board_from(rows: &[&str], to_move: Cell) -> Board {
        let columns = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut board = Board::new("test", columns, rows.len(), to_move);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                board.set(r, c, Cell::from_text_char(ch));
            }
        }
        board
    }

    #[test]
    fn from_delta_matches_delta() {
        for d in ALL_DIRECTIONS {
            let (dr, dc) = d.delta();
            assert_eq!(Direction::from_delta(dr, dc), Some(d));
        }
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 0), None);
    }

    #[test]
    fn adjacent_empty_gives_zero() {
        let board = board_from(&["  W", "   ", "   "], Cell::Black);
        assert_eq!(count_direction(&board, 0, 0, Direction::East), 0);
        assert_eq!(count_direction(&board, 0, 0, Direction::South), 0);
    }

    #[test]
    fn off_board_first_step_gives_zero() {
        let board = board_from(&["WB", "BW"], Cell::Black);
        assert_eq!(count_direction(&board, 0, 0, Direction::North), 0);
        assert_eq!(count_direction(&board, 0, 0, Direction::West), 0);
        assert_eq!(count_direction(&board, 1, 1, Direction::SouthEast), 0);
    }

    #[test]
    fn closed_run_counts_every_opponent_piece() {
        let board = board_from(&[" WWWB"], Cell::Black);
        assert_eq!(count_direction(&board, 0, 0, Direction::East), 3);
    }

    #[test]
    fn adjacent_own_piece_captures_nothing() {
        let board = board_from(&[" BWB"], Cell::Black);
        assert_eq!(count_direction(&board, 0, 0, Direction::East), 0);
    }

    #[test]
    fn run_reaching_edge_captures_nothing() {
        let board = board_from(&[" WWW"], Cell::Black);
        assert_eq!(count_direction(&board, 0, 0, Direction::East), 0);
    }

    #[test]
    fn empty_cell_breaks_run() {
        let board = board_from(&[" WW B"], Cell::Black);
        assert_eq!(count_direction(&board, 0, 0, Direction::East), 0);
    }

    #[test]
    fn first_own_piece_closes_the_line() {
        let board = board_from(&[" WBWB"], Cell::Black);
        assert_eq!(count_direction(&board, 0, 0, Direction::East), 1);
    }

    #[test]
    fn diagonal_capture_for_white() {
        let board = board_from(&["    ", " B  ", "  B ", "   W"], Cell::White);
        assert_eq!(count_direction(&board, 0, 0, Direction::SouthEast), 2);
        assert_eq!(count_direction(&board, 0, 0, Direction::South), 0);
    }

    #[test]
    fn origin_contents_are_ignored() {
        let empty_origin = board_from(&[" WB"], Cell::Black);
        let own_origin = board_from(&["BWB"], Cell::Black);
        assert_eq!(count_direction(&empty_origin, 0, 0, Direction::East), 1);
        assert_eq!(count_direction(&own_origin, 0, 0, Direction::East), 1);
    }

    #[test]
    fn count_all_sums_directions() {
        let board = board_from(&["B B B", " WWW ", "BW WB", " WWW ", "B B B"], Cell::Black);
        assert_eq!(count_all(&board, 2, 2), 8);
    }

    #[test]
    fn count_all_zero_when_no_line_closes() {
        let board = board_from(&["B B", "WWW", "B B"], Cell::Black);
        assert_eq!(count_all(&board, 0, 1), 0);
    }

    #[test]
    fn invalid_board_counts_zero() {
        let board = Board::new("", 3, 1, Cell::Empty);
        assert_eq!(count_all(&board, 0, 0), 0);
        assert_eq!(count_direction(&board, 0, 0, Direction::East), 0);
    }

    #[test]
    fn out_of_range_origin_counts_zero() {
        let board = board_from(&[" WB"], Cell::Black);
        assert_eq!(count_direction(&board, 0, 3, Direction::West), 0);
        assert_eq!(count_direction(&board, 1, 0, Direction::North), 0);
    }
}
