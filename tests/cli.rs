mod common;

use common::{quadrants, save};
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn rmi_dup(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rmi-dup"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn duplicate_pair(dir: &TempDir) {
    save(dir.path(), "x.png", &quadrants(128, 128, false));
    save(dir.path(), "y.png", &quadrants(64, 64, false));
}

#[test]
fn test_no_arguments_is_missing_operand() {
    let output = rmi_dup(&[], "");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rmi-dup: missing operand"));
    assert!(stderr.contains("rmi-dup --help"));
}

#[test]
fn test_missing_directory_fails_on_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let output = rmi_dup(&["-d", missing.to_str().unwrap()], "");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_zero_hash_size_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = rmi_dup(&["-d", temp_dir.path().to_str().unwrap(), "-s", "0"], "");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_piped_confirmation_deletes_duplicate() {
    let temp_dir = TempDir::new().unwrap();
    duplicate_pair(&temp_dir);

    let output = rmi_dup(&["-d", temp_dir.path().to_str().unwrap()], "delete\n");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Write 'delete' to confirm"));
    assert!(stdout.contains("Deleted 1 file(s)"));
    assert!(temp_dir.path().join("x.png").exists());
    assert!(!temp_dir.path().join("y.png").exists());
}

#[test]
fn test_piped_refusal_keeps_files() {
    let temp_dir = TempDir::new().unwrap();
    duplicate_pair(&temp_dir);

    let output = rmi_dup(&["-d", temp_dir.path().to_str().unwrap()], "Delete\n");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Nothing deleted."));
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 2);
}

#[test]
fn test_list_mode_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    duplicate_pair(&temp_dir);

    let output = rmi_dup(&["-l", "-d", temp_dir.path().to_str().unwrap()], "");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Duplicates found:"));
    assert!(stdout.contains("x.png"));
    assert!(stdout.contains("y.png"));
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 2);
}
