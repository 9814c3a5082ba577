use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("smartmenu")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("forgot"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--delay-ms"));
}

#[test]
fn test_submit_help_hides_password_env_value() {
    cargo_bin_cmd!("smartmenu")
        .env("SMARTMENU_PASSWORD", "hunter2")
        .args(["submit", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--email"))
        .stdout(predicate::str::contains("SMARTMENU_PASSWORD"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("smartmenu")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_interactive_mode_requires_terminal() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("smartmenu")
        .env("SMARTMENU_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
