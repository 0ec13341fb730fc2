//! Integration tests for the siliconopoly binary.
//!
//! Spawns the binary in simulation mode and verifies output and exit
//! codes. The interactive mode needs a terminal and is covered through
//! the library API instead.

use std::process::{Command, Stdio};

/// Runs the binary with the given arguments and collects stdout.
fn run_cli(args: &[&str]) -> (String, bool) {
    let exe = env!("CARGO_BIN_EXE_siliconopoly");
    let output = Command::new(exe)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to start siliconopoly");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        output.status.success(),
    )
}

#[test]
fn simulate_prints_a_summary() {
    let (stdout, ok) = run_cli(&["--simulate", "3", "--seed", "5"]);
    assert!(ok);
    assert!(stdout.contains("Simulated 3 games"));
    assert!(stdout.contains("P1 wins:"));
    assert!(stdout.contains("P2 wins:"));
}

#[test]
fn seeded_simulations_are_reproducible() {
    let (first, ok_first) = run_cli(&["--simulate", "2", "--seed", "9"]);
    let (second, ok_second) = run_cli(&["--simulate", "2", "--seed", "9"]);
    assert!(ok_first && ok_second);
    assert_eq!(first, second);
}

#[test]
fn help_exits_cleanly() {
    let (stdout, ok) = run_cli(&["--help"]);
    assert!(ok);
    assert!(stdout.is_empty());
}

#[test]
fn unknown_arguments_fail() {
    let (_, ok) = run_cli(&["--bogus"]);
    assert!(!ok);
}

#[test]
fn simulate_requires_a_count() {
    let (_, ok) = run_cli(&["--simulate"]);
    assert!(!ok);
}
