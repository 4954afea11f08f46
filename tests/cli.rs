//! CLI tests for the `algovault` binary.
//!
//! Spawns the binary and checks stdout, stderr and exit codes for the
//! `list`, `hint` and `run` commands.

use std::process::{Command, Output};

fn algovault(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_algovault"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn algovault")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is utf-8")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is utf-8")
}

#[test]
fn list_prints_every_algorithm() {
    let output = algovault(&["list"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 10);
    assert!(text.starts_with("linear-search\tLinear Search\tExample: [1,2,3,4], 3\n"));
    assert!(text.contains("binary-addition\tBinary Addition\tExample: '1010', '110'"));
}

#[test]
fn hint_accepts_menu_name() {
    let output = algovault(&["hint", "Prime Factorization"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Example: 84\n");
}

#[test]
fn run_prints_result() {
    let output = algovault(&["run", "binary-search", "[5,2,9,1], 9"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Result: 3\n");

    let output = algovault(&["run", "division", "10, 3"]);
    assert_eq!(stdout(&output), "Result: (3, 1)\n");

    let output = algovault(&["run", "binary-addition", "'1010', '110'"]);
    assert_eq!(stdout(&output), "Result: 10000\n");
}

#[test]
fn run_reports_domain_error() {
    let output = algovault(&["run", "lcm", "0, 0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("lcm is undefined when both operands are zero"));
}

#[test]
fn run_reports_malformed_input() {
    let output = algovault(&["run", "gcd", "20; 28"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("malformed input"));
}

#[test]
fn unknown_algorithm_is_rejected() {
    let output = algovault(&["run", "bubble-sort", "[3, 1]"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown algorithm"));
}
