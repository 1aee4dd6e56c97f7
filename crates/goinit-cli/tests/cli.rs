use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Run `go-init` inside `dir` with an isolated home so no user config is read.
fn go_init(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_go-init"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .stdin(Stdio::null())
        .output()
        .expect("failed to run go-init")
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn missing_project_name_exits_with_one() {
    let tmp = TempDir::new().unwrap();

    let output = go_init(tmp.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: go-init <project-name> [--rest-api]"));
    assert!(listing(tmp.path()).is_empty());
}

#[test]
fn existing_directory_exits_with_one_and_changes_nothing() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("demo")).unwrap();
    fs::write(tmp.path().join("demo/keep.txt"), "original").unwrap();

    let output = go_init(tmp.path(), &["demo"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
    assert_eq!(listing(tmp.path()), ["demo"]);
    assert_eq!(listing(&tmp.path().join("demo")), ["keep.txt"]);
}

#[test]
fn unknown_arguments_do_not_cause_usage_errors() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("demo")).unwrap();

    let output = go_init(tmp.path(), &["demo", "--verbose", "-x", "--help"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Go Project Initializer"));
    assert!(!stdout.contains("REST API mode enabled"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
}

#[test]
fn rest_api_flag_is_announced() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("svc")).unwrap();

    let output = go_init(tmp.path(), &["svc", "--rest-api"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("REST API mode enabled"));
}
