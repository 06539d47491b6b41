//! Flipside -- reports the Reversi move that reverses the most pieces.
//!
//! Reads boards from stdin until the input ends and writes, for each one,
//! the rendered board and the best move for the side to play.
//!
//! Usage:
//!   flipside [OPTIONS] < boards.txt
//!
//! Options:
//!   --format F    Output format, `text` or `json` (default: text)
//!   --threads N   Evaluate boards in parallel on N threads (default: 1)
//!   --quiet       Suppress the summary on stderr

use std::env;
use std::io::{self, BufWriter};
use std::process;

use flipside::engine::{Engine, EngineConfig, OutputFormat};

fn main() {
    let config = parse_args(env::args().skip(1).collect());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let engine = Engine::new(config);

    if let Err(e) = engine.run(stdin.lock(), &mut out) {
        eprintln!("write failed: {}", e);
        process::exit(1);
    }
}

fn parse_args(args: Vec<String>) -> EngineConfig {
    let mut config = EngineConfig::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--format" => {
                i += 1;
                config.format = match args.get(i).and_then(|v| OutputFormat::from_name(v)) {
                    Some(f) => f,
                    None => usage_error("--format expects 'text' or 'json'"),
                };
            }
            "--threads" => {
                i += 1;
                config.threads = match args.get(i).and_then(|v| v.parse::<usize>().ok()) {
                    Some(n) if n > 0 => n,
                    _ => usage_error("--threads expects a positive number"),
                };
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => usage_error(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    config
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    print_usage();
    process::exit(1);
}

fn print_usage() {
    eprintln!("Usage: flipside [OPTIONS] < boards.txt");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --format F       Output format: text or json (default: text)");
    eprintln!("  --threads N      Evaluate boards on N threads (default: 1)");
    eprintln!("  --quiet          Suppress the summary on stderr");
    eprintln!("  --help           Show this help");
}
