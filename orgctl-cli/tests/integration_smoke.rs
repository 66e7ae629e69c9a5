//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("orgctl").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_db_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("orgctl").unwrap();
    cmd.arg("db").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_db_check_rejects_bad_url() {
    let mut cmd = Command::cargo_bin("orgctl").unwrap();
    cmd.arg("db")
        .arg("check")
        .arg("--database-url")
        .arg("not a url");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to database"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let mut cmd = Command::cargo_bin("orgctl").unwrap();
    cmd.arg("serve").arg("--in-memory").arg("--bind").arg("nowhere");

    cmd.assert().failure();
}
