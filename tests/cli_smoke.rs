#![allow(clippy::unwrap_used)]
//! CLI smoke tests for exit codes and fail-fast ordering.
//!
//! None of these tests reach a real API: they either stop before the first
//! request or point `--base-url` at a closed local port.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Loopback address with nothing listening; every request fails to connect.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9/api/v1";

#[allow(deprecated)]
fn rosetta(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rosetta-translate").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("OPENROUTER_API_KEY")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let dir = TempDir::new().unwrap();
    rosetta(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("English to German"))
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--api-key"));
}

#[test]
fn test_version_displays_version() {
    let dir = TempDir::new().unwrap();
    rosetta(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_required_flags_exit_1() {
    let dir = TempDir::new().unwrap();
    rosetta(&dir).args(["--input", "in.txt"]).assert().code(1);
    rosetta(&dir).args(["--output", "out.txt"]).assert().code(1);
}

#[test]
fn test_missing_api_key_exits_before_reading_input() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.txt"), "Hello world.").unwrap();

    rosetta(&dir)
        .args(["-i", "in.txt", "-o", "out.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("API key not found"))
        .stderr(predicate::str::contains("OPENROUTER_API_KEY"))
        .stderr(predicate::str::contains("Read source file").not());

    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn test_api_key_from_env_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "OPENROUTER_API_KEY=\"sk-or-file\"\n").unwrap();

    // Key resolution succeeds, so the run gets as far as reading input.
    rosetta(&dir)
        .args(["-i", "missing.txt", "-o", "out.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("API Key loaded from .env"))
        .stderr(predicate::str::contains("Error reading input file"));
}

#[test]
fn test_api_key_from_process_env() {
    let dir = TempDir::new().unwrap();

    rosetta(&dir)
        .env("OPENROUTER_API_KEY", "sk-or-env")
        .args(["-i", "missing.txt", "-o", "out.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("API Key loaded from $OPENROUTER_API_KEY"));
}

#[test]
fn test_unreadable_input_exits_before_translating() {
    let dir = TempDir::new().unwrap();

    rosetta(&dir)
        .args(["-i", "missing.txt", "-o", "out.txt", "--api-key", "sk-test"])
        .args(["--base-url", DEAD_ENDPOINT])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error reading input file"))
        .stderr(predicate::str::contains("Sending chunks").not())
        .stderr(predicate::str::contains("Translation failed").not());

    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn test_empty_input_exits_0_without_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.txt"), "\n\n   \n").unwrap();

    rosetta(&dir)
        .args(["-i", "in.txt", "-o", "out.txt", "--api-key", "sk-test"])
        .args(["--base-url", DEAD_ENDPOINT])
        .assert()
        .success()
        .stderr(predicate::str::contains("empty"));

    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn test_failed_chunks_are_marked_and_exit_0() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.txt"), "Hello world.\n\nJohn Doe: Goodbye.\n").unwrap();

    rosetta(&dir)
        .args(["-i", "in.txt", "-o", "out.txt", "--api-key", "sk-test"])
        .args(["--base-url", DEAD_ENDPOINT])
        .assert()
        .success()
        .stderr(predicate::str::contains("Translating chunk 1/2..."))
        .stderr(predicate::str::contains("Translating chunk 2/2..."))
        .stderr(predicate::str::contains("Translation failed for chunk 1/2"))
        .stderr(predicate::str::contains("Translation failed for chunk 2/2"));

    let output = fs::read_to_string(dir.path().join("out.txt")).unwrap();
    assert_eq!(
        output,
        "[TRANSLATION_FAILED] Hello world.\n\n[TRANSLATION_FAILED] John Doe: Goodbye.\n"
    );
}

#[test]
fn test_quiet_hides_status_but_not_failures() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.txt"), "Hello world.").unwrap();

    rosetta(&dir)
        .args(["-q", "-i", "in.txt", "-o", "out.txt", "--api-key", "sk-test"])
        .args(["--base-url", DEAD_ENDPOINT])
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting Translation Process").not())
        .stderr(predicate::str::contains("Translating chunk").not())
        .stderr(predicate::str::contains("Translation failed for chunk 1/1"));
}
