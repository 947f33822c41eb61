//! Tests for reading RUTs from stdin

use predicates::prelude::*;
use tempfile::TempDir;

use crate::rutcheck;

#[test]
fn test_format_reads_stdin() {
    let home = TempDir::new().unwrap();
    rutcheck(&home)
        .arg("format")
        .write_stdin("123456785\n\n  111111111  \n")
        .assert()
        .success()
        .stdout("12.345.678-5\n11.111.111-1\n");
}

#[test]
fn test_validate_reads_stdin() {
    let home = TempDir::new().unwrap();
    rutcheck(&home)
        .arg("validate")
        .write_stdin("76.086.428-5\n5.126.663-3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 valid, 0 invalid"));
}

#[test]
fn test_validate_stdin_with_invalid_line() {
    let home = TempDir::new().unwrap();
    rutcheck(&home)
        .arg("validate")
        .write_stdin("76.086.428-5\n76.086.428-6\n")
        .assert()
        .code(1);
}

#[test]
fn test_args_ignore_stdin() {
    let home = TempDir::new().unwrap();
    rutcheck(&home)
        .args(["format", "19"])
        .write_stdin("123456785\n")
        .assert()
        .success()
        .stdout("1-9\n");
}
