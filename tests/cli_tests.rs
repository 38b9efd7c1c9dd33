//! Integration tests for the command line front end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("adult-locator").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("ADULT_LOCATOR_TIMEOUT_SECS");
    cmd
}

#[test]
fn prints_one_line_per_adult() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("staff.csv");
    std::fs::write(
        &path,
        "1,Jane,Doe,25,jane@x.com,2020-01-15\n2,Tom,Lee,19,tom@x.com,2021-03-01\n3,Ann,Kim,21,ann@x.com,2019-05-05\n",
    )
    .unwrap();

    cli()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Employee #1, Jane Doe has reached the age of 21. Can be served alcohol.",
        ))
        .stdout(predicate::str::contains(
            "Employee #3, Ann Kim has reached the age of 21. Can be served alcohol.",
        ))
        .stdout(predicate::str::contains("Tom").not());
}

#[test]
fn missing_source_exits_with_usage_code() {
    cli()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing source identifier"));
}

#[test]
fn unreadable_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    cli()
        .arg(dir.path().join("absent.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn malformed_line_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("staff.csv");
    std::fs::write(&path, "1,Jane,Doe,25,jane@x.com,2020-01-15\n2,Tom\n").unwrap();

    cli()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn invalid_timeout_setting_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("staff.csv");
    std::fs::write(&path, "").unwrap();

    cli()
        .env("ADULT_LOCATOR_TIMEOUT_SECS", "forever")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ADULT_LOCATOR_TIMEOUT_SECS"));
}
