//! Human-readable and JSON output for evaluated boards.

use std::fmt::Write as _;
use std::io::{self, Write};

use serde::Serialize;

use crate::board::{Board, Cell};
use crate::search::BestMove;

/// Line printed between consecutive boards in text output.
pub const BOARD_SEPARATOR: &str =
    "================================================================================";

/// Line printed once all input has been processed.
pub const END_OF_PROCESSING: &str = "*** END OF PROCESSING ***";

/// Renders the board as a lettered, numbered grid headed by its title.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    if !board.is_valid() {
        return out;
    }

    let _ = writeln!(out, "{}\n", board.title());
    push_column_names(&mut out, board.columns());
    push_row_separator(&mut out, board.columns());
    for row in 0..board.rows() {
        let _ = write!(out, "{:2}|", row + 1);
        for cell in board.row(row) {
            out.push(cell.text_char());
            out.push('|');
        }
        let _ = writeln!(out, "{:<2}", row + 1);
        push_row_separator(&mut out, board.columns());
    }
    push_column_names(&mut out, board.columns());
    out
}

fn push_column_names(out: &mut String, columns: usize) {
    out.push_str("   ");
    for letter in (b'a'..).take(columns) {
        out.push(letter as char);
        out.push(' ');
    }
    out.push_str("  \n");
}

fn push_row_separator(out: &mut String, columns: usize) {
    out.push_str("  +");
    for _ in 0..columns {
        out.push_str("-+");
    }
    out.push('\n');
}

/// The recommendation sentence for a found move.
pub fn recommendation(mover: Cell, best: &BestMove) -> String {
    format!(
        "The best move for {} is ({}, {}), which will reverse {} opponent piece(s)",
        mover.side_name(),
        best.column_letter(),
        best.row_number(),
        best.captures
    )
}

/// Writes the text report for one board: grid, then the recommendation when
/// a move exists.
pub fn write_text_report<W: Write>(
    out: &mut W,
    board: &Board,
    best: Option<&BestMove>,
) -> io::Result<()> {
    write!(out, "{}", render_board(board))?;
    writeln!(out)?;
    if let Some(best) = best {
        writeln!(out, "{}", recommendation(board.to_move(), best))?;
    }
    writeln!(out)
}

/// Serializable summary of one evaluated board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report<'a> {
    pub title: &'a str,
    pub columns: usize,
    pub rows: usize,
    pub mover: Cell,
    pub best_move: Option<MoveReport>,
}

/// The chosen move as it appears in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub row: usize,
    pub col: usize,
    pub square: String,
    pub captures: usize,
}

impl<'a> Report<'a> {
    pub fn new(board: &'a Board, best: Option<&BestMove>) -> Self {
        Report {
            title: board.title(),
            columns: board.columns(),
            rows: board.rows(),
            mover: board.to_move(),
            best_move: best.map(|b| MoveReport {
                row: b.row,
                col: b.col,
                square: b.square(),
                captures: b.captures,
            }),
        }
    }
}

/// Writes one board's report as a single JSON line.
pub fn write_json_report<W: Write>(
    out: &mut W,
    board: &Board,
    best: Option<&BestMove>,
) -> io::Result<()> {
    serde_json::to_writer(&mut *out, &Report::new(board, best))?;
    writeln!(out)
}
