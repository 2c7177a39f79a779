//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `msptools` binary end-to-end: argument
//! parsing, file handling, solver dispatch and exit status.

use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("msptools").unwrap()
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn read_solution(path: &Path) -> Vec<f64> {
    std::fs::read_to_string(path)
        .unwrap()
        .split_whitespace()
        .map(|t| t.parse().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("msptools"));
}

#[test]
fn unknown_method_is_rejected_by_parser() {
    cmd()
        .args(["A.txt", "b.txt", "x.txt", "--method", "svd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ---------------------------------------------------------------------------
// Square solve
// ---------------------------------------------------------------------------

#[test]
fn solves_square_system() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "A.txt", "1 -2\n7 -3\n");
    let b = write_file(dir.path(), "b.txt", "-2\n19\n");
    let x = dir.path().join("x.txt");

    cmd().arg(&a).arg(&b).arg(&x).assert().success();

    let solution = read_solution(&x);
    assert_eq!(solution.len(), 2);
    assert!((solution[0] - 4.0).abs() < 1e-12);
    assert!((solution[1] - 3.0).abs() < 1e-12);
}

#[test]
fn print_flag_echoes_arrays() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "A.txt", "2 0\n0 4\n");
    let b = write_file(dir.path(), "b.txt", "2 4\n");
    let x = dir.path().join("x.txt");

    cmd()
        .arg(&a)
        .arg(&b)
        .arg(&x)
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::contains("<array2d_t shape=(2,2) order=RowMajor>"))
        .stdout(predicate::str::contains("<array_t len=2"));
}

#[test]
fn singular_system_fails() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "A.txt", "1 2\n1 2\n");
    let b = write_file(dir.path(), "b.txt", "1 1\n");
    let x = dir.path().join("x.txt");

    cmd()
        .arg(&a)
        .arg(&b)
        .arg(&x)
        .assert()
        .failure()
        .stderr(predicate::str::contains("singular"));
    assert!(!x.exists());
}

#[test]
fn non_square_matrix_fails_for_gesv() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "A.txt", "1 0\n0 1\n1 1\n");
    let b = write_file(dir.path(), "b.txt", "1 2 3\n");
    let x = dir.path().join("x.txt");

    cmd()
        .arg(&a)
        .arg(&b)
        .arg(&x)
        .assert()
        .failure()
        .stderr(predicate::str::contains("status -102"));
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let b = write_file(dir.path(), "b.txt", "1\n");
    cmd()
        .arg(dir.path().join("missing.txt"))
        .arg(&b)
        .arg(dir.path().join("x.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File does not exist"));
}

// ---------------------------------------------------------------------------
// Least squares
// ---------------------------------------------------------------------------

#[test]
fn least_squares_method_fits_line() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "A.txt", "1 0\n1 1\n1 2\n1 3\n");
    let b = write_file(dir.path(), "b.txt", "1 3 5 7\n");
    let x = dir.path().join("x.txt");

    cmd()
        .arg(&a)
        .arg(&b)
        .arg(&x)
        .args(["--method", "gels"])
        .assert()
        .success();

    let solution = read_solution(&x);
    assert_eq!(solution.len(), 2);
    assert!((solution[0] - 1.0).abs() < 1e-12);
    assert!((solution[1] - 2.0).abs() < 1e-12);
}

#[test]
fn config_file_supplies_paths_and_method() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "A.txt", "1 0\n1 1\n1 2\n");
    let b = write_file(dir.path(), "b.txt", "0 1 2\n");
    let x = dir.path().join("x.txt");
    let config = serde_json::json!({
        "matrix_file": a,
        "rhs_file": b,
        "solution_file": x,
        "method": "gels",
    });
    let config_path = write_file(dir.path(), "solve.json", &config.to_string());

    cmd().arg("--config").arg(&config_path).assert().success();

    let solution = read_solution(&x);
    assert!((solution[0] - 0.0).abs() < 1e-12);
    assert!((solution[1] - 1.0).abs() < 1e-12);
}
