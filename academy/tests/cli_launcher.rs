//! CLI tests for the `academy` binary.
//!
//! Spawns the binary with piped stdin and checks the transcript and exit code.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use academy::exit_codes;

fn run_academy(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_academy"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn academy");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("academy output")
}

#[test]
fn launcher_runs_todo_and_exits() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_academy(temp.path(), &[], "4\n1\nTask A\n2\n4\n7\n");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("--- Chapter 4: To-Do List CLI App ---"));
    assert!(stdout.contains("1. Task A"));
    assert!(stdout.contains("Exiting academy examples. Goodbye!"));
}

#[test]
fn end_of_input_mid_session_exits_cleanly() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_academy(temp.path(), &[], "6\n1\nAna\n");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("=== Contact Manager ==="));
    assert!(!stdout.contains("Goodbye!"));
}

#[test]
fn run_subcommand_skips_launcher() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_academy(temp.path(), &["run", "hello"], "Ada\n");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Hello, Ada!"));
    assert!(!stdout.contains("Select an example"));
}

#[test]
fn invalid_config_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        temp.path().join("academy.toml"),
        "[guess]\nlow = 9\nhigh = 1\n",
    )
    .expect("write config");
    let output = run_academy(temp.path(), &["run", "guess"], "");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("guess.low"));
}

#[test]
fn init_config_writes_loadable_defaults() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_academy(temp.path(), &["init-config"], "");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let written = academy::io::config::load_config(&temp.path().join("academy.toml"))
        .expect("load written config");
    assert_eq!(written, academy::io::config::AcademyConfig::default());
}
