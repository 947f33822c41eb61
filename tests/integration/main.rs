//! Integration tests for the rutcheck CLI
//!
//! Every command runs with `HOME` pointed at a temporary directory so a user
//! config file cannot change the output.

mod stdin_test;

use assert_cmd::cargo;
use tempfile::TempDir;

/// Helper to create a rutcheck command with an isolated home directory
fn rutcheck(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("rutcheck"));
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

/// Write a user config file under the given home directory
fn write_config(home: &TempDir, content: &str) {
    let dir = home.path().join(".config/rutcheck");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), content).unwrap();
}
