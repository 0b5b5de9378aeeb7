//! Binary-level CLI checks.
//!
//! Only flag parsing is exercised here — anything that parses successfully
//! would bind a socket and serve, so these tests stick to paths that exit
//! immediately.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_server_options() {
    Command::cargo_bin("focusd")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--focus"))
        .stdout(predicate::str::contains("--long-break-interval"))
        .stdout(predicate::str::contains("--no-sound"));
}

#[test]
fn version_prints_package_version() {
    Command::cargo_bin("focusd")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn focus_duration_out_of_range_is_rejected() {
    Command::cargo_bin("focusd")
        .unwrap()
        .args(["--focus", "0"])
        .assert()
        .failure();

    Command::cargo_bin("focusd")
        .unwrap()
        .args(["--focus", "121"])
        .assert()
        .failure();
}

#[test]
fn unknown_flag_is_rejected() {
    Command::cargo_bin("focusd")
        .unwrap()
        .arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
