// Copyright (c) 2026 TST Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! End-to-end tests for the `tst` binary.

use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

/// Runs `tst` with `args` and returns (stdout, stderr, success).
fn run_tst(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_tst"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_validate_reports_success_at_default_level() {
    let (stdout, _stderr, success) = run_tst(&["validate"]);

    assert!(success);
    assert_eq!(stdout.trim(), "configuration is valid");
}

#[test]
fn test_validate_generated_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("nested").join("tst.toml");

    let (_stdout, _stderr, success) = run_tst(&["gen-config", "--output", path_str(&config_path)]);
    assert!(success);
    assert!(config_path.exists());

    let (stdout, _stderr, success) = run_tst(&["--config", path_str(&config_path), "validate"]);
    assert!(success);
    assert_eq!(stdout.trim(), "configuration is valid");
}

#[test]
fn test_validate_rejects_bad_level() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("bad.toml");
    std::fs::write(&config_path, "[log]\nlevel = \"loud\"\n").unwrap();

    let (stdout, stderr, success) = run_tst(&["--config", path_str(&config_path), "validate"]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("error:"));
}

#[test]
fn test_count_and_search() {
    let dir = tempdir().unwrap();
    let list_path = dir.path().join("words.txt");
    std::fs::write(&list_path, "word\nword\nworld\n").unwrap();

    let (stdout, _stderr, success) = run_tst(&["count", path_str(&list_path)]);
    assert!(success);
    assert_eq!(stdout.trim(), "2");

    let (stdout, _stderr, success) =
        run_tst(&["search", path_str(&list_path), "wor", "wor", "--exact"]);
    assert!(success);
    assert_eq!(stdout, "wor\tfalse\nwor\tfalse\n");

    let (stdout, _stderr, success) = run_tst(&["search", path_str(&list_path), "wor"]);
    assert!(success);
    assert_eq!(stdout, "wor\ttrue\n");
}
