//! Tests for `bullpen lock` and locked credential reads.

use crate::support::*;

fn locked() -> Test {
    let t = Test::init();
    assert_success(&t.add_with_secret("Prod", ACCOUNT_A, "admin", "hunter2"));
    let output = t
        .cmd()
        .args(["lock", "enable", "--password", "open sesame"])
        .output()
        .unwrap();
    assert_success(&output);
    t
}

#[test]
fn test_status_reports_unlock_setting() {
    let t = Test::init();
    let output = t.cmd().args(["lock", "status"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "disabled");

    let t = locked();
    let output = t.cmd().args(["lock", "status"]).output().unwrap();
    assert_stdout_contains(&output, "enabled");
}

#[test]
fn test_locked_get_requires_password() {
    let t = locked();

    let output = t
        .cmd()
        .args(["credential", "get", "Prod"])
        .write_stdin("")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "vault is locked");
    assert_stderr_contains(&output, "BULLPEN_PASSWORD");
}

#[test]
fn test_locked_get_with_password_flag() {
    let t = locked();

    let output = t
        .cmd()
        .args(["credential", "get", "Prod", "--password", "open sesame"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "hunter2");
}

#[test]
fn test_locked_get_with_password_env() {
    let t = locked();

    let output = t
        .cmd()
        .env("BULLPEN_PASSWORD", "open sesame")
        .args(["credential", "get", "Prod"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "hunter2");
}

#[test]
fn test_locked_get_with_wrong_password() {
    let t = locked();

    let output = t
        .cmd()
        .args(["credential", "get", "Prod", "--password", "nope"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "incorrect unlock password");
}

#[test]
fn test_enable_twice_warns() {
    let t = locked();
    let output = t
        .cmd()
        .args(["lock", "enable", "--password", "other"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "already enabled");
}

#[test]
fn test_disable_needs_matching_password() {
    let t = locked();

    let output = t
        .cmd()
        .args(["lock", "disable", "--password", "nope"])
        .output()
        .unwrap();
    assert_failure(&output);

    let output = t
        .cmd()
        .args(["lock", "disable", "--password", "open sesame"])
        .output()
        .unwrap();
    assert_success(&output);

    // No password needed any more
    assert_eq!(stdout(&t.credential_get("Prod")).trim(), "hunter2");
}

#[test]
fn test_enable_without_terminal_needs_password() {
    let t = Test::init();
    let output = t
        .cmd()
        .args(["lock", "enable"])
        .write_stdin("")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid password");
}

#[test]
fn test_listing_works_while_locked() {
    let t = locked();
    assert_eq!(t.profiles().len(), 1);
}
