//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "sendwindow-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn schedule_parse_normalizes_order() {
    let (stdout, _, code) = run_cli(&["schedule", "parse", "30-40;10-20", "--policy", "merging"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "10-20;30-40");
}

#[test]
fn schedule_parse_json_output() {
    let (stdout, _, code) = run_cli(&[
        "schedule", "parse", "10-20;30-40", "--policy", "strict", "--json",
    ]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed[0]["from"], 10);
    assert_eq!(parsed[1]["till"], 40);
}

#[test]
fn schedule_insert_merges() {
    let (stdout, _, code) = run_cli(&[
        "schedule", "insert", "10-20;30-40", "15-25", "--policy", "merging",
    ]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "10-25;30-40");
}

#[test]
fn schedule_insert_overlap_fails_under_strict() {
    let (_, stderr, code) = run_cli(&[
        "schedule", "insert", "10-20", "15-20", "--policy", "strict",
    ]);
    assert_eq!(code, 1);
    assert!(stderr.contains("overlaps end of existing slot"));
}

#[test]
fn query_next_between_slots() {
    let (stdout, _, code) = run_cli(&[
        "query", "next", "10-20;30-40", "--at", "25", "--policy", "strict",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("(30)"));
}

#[test]
fn query_deadline_inside_slot() {
    let (stdout, _, code) = run_cli(&[
        "query", "deadline", "10-20;30-40", "--at", "15", "--policy", "strict",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("(20)"));
}

#[test]
fn query_past_last_slot_is_none() {
    let (stdout, _, code) = run_cli(&[
        "query", "next", "10-20;30-40", "--at", "50", "--policy", "strict",
    ]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "none");
}

#[test]
fn malformed_schedule_is_an_error() {
    let (_, stderr, code) = run_cli(&["schedule", "parse", "10-20;banana", "--policy", "strict"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}
