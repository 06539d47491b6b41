//! Random board generation CLI.
//!
//! Writes boards in the text format read by `flipside`.
//!
//! Usage:
//!   cargo run --release --bin genboards -- [OPTIONS]
//!
//! Options:
//!   --count N      Number of boards (default: 10)
//!   --columns N    Columns per board, 1-25 (default: 8)
//!   --rows N       Rows per board, 1-25 (default: 8)
//!   --fill F       Probability a cell holds a piece (default: 0.5)
//!   --seed N       Random seed, 0 for entropy (default: 0)
//!   --output FILE  Output file path (default: stdout)

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;

use flipside::generate::{generate_boards, GenConfig};
use flipside::protocol::encode_board;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = GenConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" => {
                i += 1;
                config.count = parse_value(&args, i, "--count");
            }
            "--columns" => {
                i += 1;
                config.columns = parse_value(&args, i, "--columns");
            }
            "--rows" => {
                i += 1;
                config.rows = parse_value(&args, i, "--rows");
            }
            "--fill" => {
                i += 1;
                config.fill = parse_value(&args, i, "--fill");
            }
            "--seed" => {
                i += 1;
                config.seed = parse_value(&args, i, "--seed");
            }
            "--output" => {
                i += 1;
                output_path = Some(parse_value(&args, i, "--output"));
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let boards = match generate_boards(&config) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("cannot generate boards: {}", e);
            process::exit(1);
        }
    };

    let result = match output_path {
        Some(path) => File::create(&path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            write_boards(&boards, &mut writer)?;
            eprintln!("Wrote {} boards to {}", boards.len(), path);
            Ok(())
        }),
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_boards(&boards, &mut writer)
        }
    };

    if let Err(e) = result {
        eprintln!("write failed: {}", e);
        process::exit(1);
    }
}

fn write_boards<W: Write>(boards: &[flipside::board::Board], out: &mut W) -> io::Result<()> {
    for board in boards {
        out.write_all(encode_board(board).as_bytes())?;
    }
    out.flush()
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).and_then(|v| v.parse().ok()) {
        Some(v) => v,
        None => {
            eprintln!("invalid {} value", flag);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: genboards [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --count N        Number of boards (default: 10)");
    eprintln!("  --columns N      Columns per board, 1-25 (default: 8)");
    eprintln!("  --rows N         Rows per board, 1-25 (default: 8)");
    eprintln!("  --fill F         Probability a cell holds a piece (default: 0.5)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --help           Show this help");
}
