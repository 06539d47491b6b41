//! Integration tests for the flipside binary.
//!
//! Spawns the binary, feeds boards on stdin, and checks what it prints.

use std::io::{Read, Write};
use std::process::{Command, Stdio};

/// Runs the binary with `args`, writes `input` to stdin, and returns
/// (stdout, stderr).
fn run_flipside(args: &[&str], input: &str) -> (String, String) {
    let exe = env!("CARGO_BIN_EXE_flipside");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start flipside");

    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(input.as_bytes()).unwrap();
    drop(stdin);

    let mut stdout = String::new();
    child.stdout.take().unwrap().read_to_string(&mut stdout).unwrap();
    let mut stderr = String::new();
    child.stderr.take().unwrap().read_to_string(&mut stderr).unwrap();

    let status = child.wait().expect("failed to wait on child");
    assert!(status.success(), "flipside exited with {:?}: {}", status, stderr);
    (stdout, stderr)
}

/// Standard 8x8 opening, black to move.
const OPENING_8X8: &str = "\
Standard opening
8 8 B



   WB
   BW




";

/// White to move; d1 closes a three-piece run to the east.
const RUN_OF_THREE: &str = "\
Run of three
5 2 W
 BBBW
B    

";

#[test]
fn opening_reports_first_of_four_moves() {
    let (out, _) = run_flipside(&["--quiet"], OPENING_8X8);
    assert!(out.starts_with("Standard opening\n\n   a b c d e f g h   \n"));
    assert!(out.contains(
        "The best move for BLACK is (d, 3), which will reverse 1 opponent piece(s)"
    ));
    assert!(out.ends_with("\n*** END OF PROCESSING ***\n\n"));
}

#[test]
fn every_board_is_reported_in_order() {
    let input = format!("{}{}", OPENING_8X8, RUN_OF_THREE);
    let (out, _) = run_flipside(&["--quiet"], &input);
    let first = out.find("Standard opening").unwrap();
    let second = out.find("Run of three").unwrap();
    assert!(first < second);
    assert!(out.contains(
        "The best move for WHITE is (a, 1), which will reverse 3 opponent piece(s)"
    ));
    let separator = "=".repeat(80);
    assert_eq!(out.matches(&separator).count(), 2);
}

#[test]
fn board_without_capture_has_no_recommendation() {
    let input = "Lonely\n3 3 B\n   \n W \n   \n";
    let (out, _) = run_flipside(&["--quiet"], input);
    assert!(out.contains(" 2| |W| |2 \n"));
    assert!(!out.contains("best move"));
}

#[test]
fn empty_input_prints_only_end_marker() {
    let (out, _) = run_flipside(&["--quiet"], "");
    assert_eq!(out, "\n*** END OF PROCESSING ***\n\n");
}

#[test]
fn malformed_board_stops_with_message() {
    let input = format!("{}Broken\n8 eight B\n{}", RUN_OF_THREE, OPENING_8X8);
    let (out, err) = run_flipside(&["--quiet"], &input);
    assert!(out.contains("Run of three"));
    assert!(!out.contains("Standard opening"));
    assert!(err.contains("invalid board dimension: 'eight'"));
    assert!(out.ends_with("*** END OF PROCESSING ***\n\n"));
}

#[test]
fn oversized_board_is_rejected() {
    let (out, err) = run_flipside(&["--quiet"], "Huge\n26 3 W\n");
    assert!(err.contains("26 columns"));
    assert_eq!(out, "\n*** END OF PROCESSING ***\n\n");
}

#[test]
fn json_output() {
    let input = format!("{}{}", OPENING_8X8, "Lonely\n3 3 B\n   \n W \n   \n");
    let (out, _) = run_flipside(&["--format", "json", "--quiet"], &input);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    let opening: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(opening["mover"], "black");
    assert_eq!(opening["best_move"]["square"], "d3");
    assert_eq!(opening["best_move"]["row"], 2);
    assert_eq!(opening["best_move"]["col"], 3);
    let lonely: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert!(lonely["best_move"].is_null());
}

#[test]
fn threaded_output_matches_sequential() {
    let input = format!("{}{}{}", OPENING_8X8, RUN_OF_THREE, OPENING_8X8);
    let (sequential, _) = run_flipside(&["--quiet"], &input);
    let (threaded, _) = run_flipside(&["--quiet", "--threads", "3"], &input);
    assert_eq!(sequential, threaded);
}

#[test]
fn summary_goes_to_stderr() {
    let (out, err) = run_flipside(&[], RUN_OF_THREE);
    assert!(err.contains("processed 1 board(s), 1 with a capturing move"));
    assert!(!out.contains("processed"));
}

#[test]
fn unknown_flag_fails() {
    let status = Command::new(env!("CARGO_BIN_EXE_flipside"))
        .arg("--bogus")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("failed to start flipside");
    assert_eq!(status.code(), Some(1));
}

#[test]
fn genboards_output_without_path_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_genboards"))
        .args(["--count", "1", "--seed", "3", "--output"])
        .stdin(Stdio::null())
        .output()
        .expect("failed to start genboards");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid --output value"));
}
