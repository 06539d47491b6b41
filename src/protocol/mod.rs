//! Board text format and report output.
//!
//! `text` reads and writes the line-oriented board format consumed on stdin;
//! `render` produces the printed grid, the recommendation sentence, and the
//! JSON report.

pub mod render;
pub mod text;

pub use render::{recommendation, render_board, write_json_report, write_text_report, Report};
pub use text::{encode_board, parse_board, BoardReader, TextError};
