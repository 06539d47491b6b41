//! Board-processing driver.
//!
//! Reads boards from a text stream, finds the best move for each one, and
//! writes a report per board. Processing stops at the end of input or at the
//! first board that cannot be read.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::board::Board;
use crate::protocol::render::{
    write_json_report, write_text_report, BOARD_SEPARATOR, END_OF_PROCESSING,
};
use crate::protocol::text::{BoardReader, TextError};
use crate::search::{best_move, best_moves, BestMove};

/// How reports are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Rendered grid plus a recommendation sentence.
    #[default]
    Text,
    /// One JSON object per board, one per line.
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Engine settings, filled from command-line flags.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub format: OutputFormat,
    /// Worker threads. With more than one, all boards are read first and
    /// evaluated as a parallel batch.
    pub threads: usize,
    /// Suppress the run summary on stderr.
    pub quiet: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            format: OutputFormat::Text,
            threads: 1,
            quiet: false,
        }
    }
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Boards read and reported.
    pub boards: usize,
    /// Boards for which a capturing move was found.
    pub with_move: usize,
    /// The read error that ended processing early, if any.
    pub error: Option<TextError>,
}

pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Engine { config }
    }

    /// Processes every board in `input`, writing reports to `out`.
    ///
    /// A malformed board ends processing; it is logged to stderr and kept in
    /// the returned summary. Only write failures are returned as errors.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> io::Result<RunSummary> {
        let start = Instant::now();
        let summary = if self.config.threads > 1 {
            self.run_batch(input, out)?
        } else {
            self.run_streaming(input, out)?
        };

        if self.config.format == OutputFormat::Text {
            writeln!(out, "\n{}\n", END_OF_PROCESSING)?;
        }
        out.flush()?;

        if let Some(e) = &summary.error {
            eprintln!("stopped after {} board(s): {}", summary.boards, e);
        }
        if !self.config.quiet {
            eprintln!(
                "processed {} board(s), {} with a capturing move ({:.1}ms)",
                summary.boards,
                summary.with_move,
                start.elapsed().as_secs_f64() * 1000.0
            );
        }
        Ok(summary)
    }

    /// Evaluates and reports each board as soon as it is read.
    fn run_streaming<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut reader = BoardReader::new(input);

        loop {
            match reader.next_board() {
                Ok(Some(board)) => {
                    let best = best_move(&board);
                    self.report(out, &board, best.as_ref(), &mut summary)?;
                }
                Ok(None) => break,
                Err(e) => {
                    summary.error = Some(e);
                    break;
                }
            }
        }

        Ok(summary)
    }

    /// Reads every board, evaluates them on a dedicated rayon pool, then
    /// reports them in input order.
    fn run_batch<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut boards = Vec::new();
        for result in BoardReader::new(input) {
            match result {
                Ok(board) => boards.push(board),
                Err(e) => {
                    summary.error = Some(e);
                    break;
                }
            }
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .build()
            .map_err(io::Error::other)?;
        let results = pool.install(|| best_moves(&boards));

        for (board, best) in boards.iter().zip(&results) {
            self.report(out, board, best.as_ref(), &mut summary)?;
        }

        Ok(summary)
    }

    fn report<W: Write>(
        &self,
        out: &mut W,
        board: &Board,
        best: Option<&BestMove>,
        summary: &mut RunSummary,
    ) -> io::Result<()> {
        summary.boards += 1;
        if best.is_some() {
            summary.with_move += 1;
        }

        match self.config.format {
            OutputFormat::Text => {
                write_text_report(out, board, best)?;
                writeln!(out, "{}\n", BOARD_SEPARATOR)
            }
            OutputFormat::Json => write_json_report(out, board, best),
        }
    }
}
