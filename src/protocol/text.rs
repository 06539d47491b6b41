//! Line-oriented board text format.
//!
//! Each board is written as:
//!
//! ```text
//! <title>
//! <columns> <rows> <mover>
//! <row 1>
//! ...
//! <row N>
//! <blank separator, optional>
//! ```
//!
//! The mover is `B` or `W` and may follow the row count without a space
//! (`4 4B`). In a row, `B` and `W` are pieces and every other character is
//! an empty cell; short rows are padded with empty cells and characters past
//! the last column are ignored.
//!
//! The title is taken verbatim and may be empty. At most one blank line is
//! consumed after a board's rows; blank lines count as the end of input only
//! when nothing else follows them. Lines are decoded lossily, so a title in
//! a legacy encoding does not stop the run.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::board::{Board, BoardError, Cell};

/// Errors that can occur while reading a board.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("input contains no board")]
    NoBoard,

    #[error("board '{0}' has no header line")]
    MissingHeader(String),

    #[error("expected '<columns> <rows> <mover>', got '{0}'")]
    InvalidHeader(String),

    #[error("invalid board dimension: '{0}'")]
    InvalidDimension(String),

    #[error("invalid mover '{0}', expected 'B' or 'W'")]
    InvalidMover(String),

    #[error("expected {expected} rows, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("read failed: {0}")]
    Io(#[from] io::Error),
}

/// Reads consecutive boards from a buffered source.
pub struct BoardReader<R: BufRead> {
    input: R,
    /// Lines read ahead of the current position.
    pending: VecDeque<String>,
    buf: Vec<u8>,
}

impl<R: BufRead> BoardReader<R> {
    pub fn new(input: R) -> Self {
        BoardReader {
            input,
            pending: VecDeque::new(),
            buf: Vec::new(),
        }
    }

    /// Reads the next board. Returns `Ok(None)` once the input is exhausted.
    pub fn next_board(&mut self) -> Result<Option<Board>, TextError> {
        let title = match self.next_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        if is_blank(&title) && self.only_blank_lines_remain()? {
            return Ok(None);
        }

        let header = match self.next_line()? {
            Some(line) => line,
            None => return Err(TextError::MissingHeader(title)),
        };
        let (columns, rows, mover) = parse_header(&header)?;

        let mut board = Board::try_new(title, columns, rows, mover)?;
        for row in 0..rows {
            let line = match self.next_line()? {
                Some(line) => line,
                None => {
                    return Err(TextError::Truncated {
                        expected: rows,
                        found: row,
                    })
                }
            };
            for (col, ch) in line.chars().take(columns).enumerate() {
                board.set(row, col, Cell::from_text_char(ch));
            }
        }

        if self.peek_line()?.is_some_and(is_blank) {
            self.pending.pop_front();
        }

        Ok(Some(board))
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        match self.pending.pop_front() {
            Some(line) => Ok(Some(line)),
            None => self.read_line(),
        }
    }

    fn peek_line(&mut self) -> io::Result<Option<&str>> {
        if self.pending.is_empty() {
            if let Some(line) = self.read_line()? {
                self.pending.push_back(line);
            }
        }
        Ok(self.pending.front().map(String::as_str))
    }

    /// Reads ahead until a line with content or the end of input. The lines
    /// read stay queued for `next_line`.
    fn only_blank_lines_remain(&mut self) -> io::Result<bool> {
        if self.pending.iter().any(|line| !is_blank(line)) {
            return Ok(false);
        }
        while let Some(line) = self.read_line()? {
            let blank = is_blank(&line);
            self.pending.push_back(line);
            if !blank {
                return Ok(false);
            }
        }
        self.pending.clear();
        Ok(true)
    }

    /// Reads one raw line, strips `\n` or `\r\n`, and decodes it lossily.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

impl<R: BufRead> Iterator for BoardReader<R> {
    type Item = Result<Board, TextError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_board().transpose()
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Parses `<columns> <rows> <mover>`, also accepting `<columns> <rows><mover>`.
fn parse_header(line: &str) -> Result<(usize, usize, Cell), TextError> {
    let mut tokens = line.split_whitespace();
    let (Some(columns), Some(rows_token)) = (tokens.next(), tokens.next()) else {
        return Err(TextError::InvalidHeader(line.to_string()));
    };

    let columns = parse_dimension(columns)?;

    let digits = rows_token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rows_token.len());
    if digits == 0 {
        return Err(TextError::InvalidDimension(rows_token.to_string()));
    }
    let rows = parse_dimension(&rows_token[..digits])?;

    let mover_token = match &rows_token[digits..] {
        "" => tokens.next(),
        glued => Some(glued),
    }
    .ok_or_else(|| TextError::InvalidHeader(line.to_string()))?;

    let mut mover_chars = mover_token.chars();
    let mover = match (mover_chars.next(), mover_chars.next()) {
        (Some(c), None) => Cell::from_mover_char(c),
        _ => None,
    }
    .ok_or_else(|| TextError::InvalidMover(mover_token.to_string()))?;

    Ok((columns, rows, mover))
}

fn parse_dimension(token: &str) -> Result<usize, TextError> {
    token
        .parse()
        .map_err(|_| TextError::InvalidDimension(token.to_string()))
}

/// Parses exactly one board from a string.
pub fn parse_board(text: &str) -> Result<Board, TextError> {
    BoardReader::new(text.as_bytes())
        .next_board()?
        .ok_or(TextError::NoBoard)
}

/// Encodes a board in the text format, followed by a blank separator line.
pub fn encode_board(board: &Board) -> String {
    let mut out = String::with_capacity((board.columns() + 1) * (board.rows() + 3));
    out.push_str(board.title());
    out.push('\n');
    out.push_str(&format!(
        "{} {} {}\n",
        board.columns(),
        board.rows(),
        board.to_move().text_char()
    ));
    for row in 0..board.rows() {
        out.extend(board.row(row).iter().map(|c| c.text_char()));
        out.push('\n');
    }
    out.push('\n');
    out
}
