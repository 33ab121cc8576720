//! Drives the compiled `perfget` and `perfset` binaries through their CLI
//! contract: exit codes, diagnostics on stderr, report line on stdout.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

const PERFGET: &str = env!("CARGO_BIN_EXE_perfget");
const PERFSET: &str = env!("CARGO_BIN_EXE_perfset");

fn write_input(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn perfget_reports_runs_and_key_count() {
    let path = write_input("mapbench-cli-get.txt", b"a a b");
    let output = Command::new(PERFGET).arg(&path).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.starts_with("10 runs getting 2 keys: "),
        "stdout: {stdout}"
    );
}

#[test]
fn perfset_reports_key_count() {
    let path = write_input("mapbench-cli-set.txt", b"a a b");
    let output = Command::new(PERFSET).arg(&path).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("setting 2 keys: "), "stdout: {stdout}");
}

#[test]
fn empty_file_reports_zero_keys() {
    let path = write_input("mapbench-cli-empty.txt", b"");
    let output = Command::new(PERFGET).arg(&path).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.starts_with("10 runs getting 0 keys: "),
        "stdout: {stdout}"
    );
}

#[test]
fn missing_argument_prints_usage_and_fails() {
    for bin in [PERFGET, PERFSET] {
        let output = Command::new(bin).output().unwrap();
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.starts_with("usage:"), "stderr: {stderr}");
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn unreadable_file_prints_diagnostic_and_fails() {
    let path = "/definitely/not/a/real/file";
    for bin in [PERFGET, PERFSET] {
        let output = Command::new(bin).arg(path).output().unwrap();
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("error reading"), "stderr: {stderr}");
        assert!(stderr.contains(path), "stderr: {stderr}");
    }
}
