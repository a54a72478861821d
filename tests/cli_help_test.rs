//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("qm")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quote Manager CLI"))
        .stdout(predicate::str::contains("categories"))
        .stdout(predicate::str::contains("tui"));
}

#[test]
fn test_add_help() {
    Command::cargo_bin("qm")
        .unwrap()
        .args(["add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--category"))
        .stdout(predicate::str::contains("Quote text"));
}

#[test]
fn test_list_help() {
    Command::cargo_bin("qm")
        .unwrap()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Output in JSON format"))
        .stdout(predicate::str::contains("--simple"));
}

#[test]
fn test_export_help_shows_default_file() {
    Command::cargo_bin("qm")
        .unwrap()
        .args(["export", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quotes.json"));
}

#[test]
fn test_sync_help() {
    Command::cargo_bin("qm")
        .unwrap()
        .args(["sync", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--watch"));
}

#[test]
fn test_add_requires_category() {
    Command::cargo_bin("qm")
        .unwrap()
        .args(["add", "text only"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--category"));
}
