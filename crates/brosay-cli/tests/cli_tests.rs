//! Non-interactive CLI integration tests for brosay.
//!
//! All tests spawn the real binary via `std::process::Command` and work on
//! all platforms.

use std::io::Write;
use std::process::{Command, Stdio};

fn brosay() -> Command {
    Command::new(env!("CARGO_BIN_EXE_brosay"))
}

#[test]
fn version_flag() {
    let output = brosay()
        .arg("--version")
        .output()
        .expect("Failed to run brosay");

    assert!(output.status.success(), "brosay --version should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("brosay"),
        "Version output should name the binary: {}",
        stdout
    );
}

#[test]
fn help_flag_shows_options_and_sample() {
    let output = brosay()
        .arg("--help")
        .output()
        .expect("Failed to run brosay");

    assert!(output.status.success(), "brosay --help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("--max-length"),
        "Help should show the wrap width option: {}",
        stdout
    );
    assert!(
        stdout.contains('╭'),
        "Help should include a live sample render: {}",
        stdout
    );
}

#[test]
fn renders_positional_message() {
    let output = brosay()
        .arg("Sindre is a horse")
        .output()
        .expect("Failed to run brosay");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sindre is a horse"));
    assert!(stdout.contains('╭') && stdout.contains('╰') && stdout.contains('│'));
}

#[test]
fn reads_message_from_stdin() {
    let mut child = brosay()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn brosay");

    child
        .stdin
        .as_mut()
        .expect("stdin should be piped")
        .write_all(b"piped greeting")
        .expect("Failed to write to stdin");

    let output = child.wait_with_output().expect("Failed to wait for brosay");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("piped greeting"));
}

#[test]
fn max_length_flag_widens_the_bubble() {
    let output = brosay()
        .args(["hi", "--max-length", "40"])
        .output()
        .expect("Failed to run brosay");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected_top = format!("╭{}╮", "─".repeat(42));
    assert!(
        stdout.contains(&expected_top),
        "Bubble should span 40 columns: {}",
        stdout
    );
}

#[test]
fn completions_subcommand() {
    let output = brosay()
        .args(["completions", "bash"])
        .output()
        .expect("Failed to run brosay completions");

    assert!(output.status.success(), "completions should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("brosay"),
        "Completions should reference the binary name: {}",
        stdout
    );
}

#[test]
fn unknown_flag_fails() {
    let output = brosay()
        .arg("--definitely-not-a-flag")
        .output()
        .expect("Failed to run brosay");

    assert!(!output.status.success());
}
