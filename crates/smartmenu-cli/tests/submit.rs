//! Integration tests for the headless sign-in commands.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

/// Runs `smartmenu` with an isolated home and no inherited log filter.
fn smartmenu(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("smartmenu");
    cmd.env("SMARTMENU_HOME", home.path())
        .env_remove("RUST_LOG")
        .env_remove("SMARTMENU_PASSWORD");
    cmd
}

#[test]
fn test_submit_valid_credentials() {
    let home = tempdir().unwrap();

    smartmenu(&home)
        .args(["submit", "--email", "a@b.com", "--password", "x", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login credentials: a@b.com"));
}

#[test]
fn test_submit_reads_password_from_env() {
    let home = tempdir().unwrap();

    smartmenu(&home)
        .env("SMARTMENU_PASSWORD", "x")
        .args(["--delay-ms", "0", "submit", "--email", "a@b.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login credentials: a@b.com"));
}

#[test]
fn test_submit_invalid_email() {
    let home = tempdir().unwrap();

    smartmenu(&home)
        .args(["submit", "--email", "bad-email", "--password", "x"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Login credentials").not())
        .stderr(predicate::str::contains("enter a valid email"));
}

#[test]
fn test_submit_missing_password() {
    let home = tempdir().unwrap();

    smartmenu(&home)
        .args(["submit", "--email", "bad-email"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("both fields required"));
}

#[test]
fn test_submit_uses_configured_delay() {
    let home = tempdir().unwrap();
    fs::write(home.path().join("config.toml"), "submit_delay_ms = 5\n").unwrap();

    smartmenu(&home)
        .args(["submit", "--email", "a@b.com", "--password", "x"])
        .assert()
        .success();
}

#[test]
fn test_submit_log_never_contains_password() {
    let home = tempdir().unwrap();

    smartmenu(&home)
        .args([
            "submit",
            "--email",
            "a@b.com",
            "--password",
            "hunter2",
            "--delay-ms",
            "0",
        ])
        .assert()
        .success();

    let log = fs::read_to_string(home.path().join("logs").join("smartmenu.log")).unwrap();
    assert!(log.contains("sign-in accepted"));
    assert!(log.contains("a@b.com"));
    assert!(!log.contains("hunter2"));
}

#[test]
fn test_forgot_prints_recovery_notice() {
    let home = tempdir().unwrap();

    smartmenu(&home)
        .arg("forgot")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Password recovery: a recovery link has been sent",
        ));
}
