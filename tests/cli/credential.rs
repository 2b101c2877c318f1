//! Tests for `bullpen credential`.

use crate::support::*;

#[test]
fn test_add_with_secret_then_get() {
    let t = Test::init();
    assert_success(&t.add_with_secret("Prod", ACCOUNT_A, "admin", "hunter2"));

    let output = t.credential_get("Prod");
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "hunter2");
}

#[test]
fn test_secret_never_stored_in_plaintext() {
    let t = Test::init();
    assert_success(&t.add_with_secret("Prod", ACCOUNT_A, "admin", "hunter2"));

    let document = t.document();
    assert!(!document.contains("hunter2"));
    assert!(document.contains("admin"));
}

#[test]
fn test_set_replaces_credential() {
    let t = Test::init();
    assert_success(&t.add_with_secret("Prod", ACCOUNT_A, "admin", "old"));

    let output = t
        .cmd()
        .args(["credential", "set", "Prod", "--identity", "ops"])
        .write_stdin("n3w-secret\n")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "credential stored for");

    assert_eq!(stdout(&t.credential_get("Prod")).trim(), "n3w-secret");
    assert_eq!(t.profiles()[0]["auth"]["identity"], "ops");
}

#[test]
fn test_set_on_sso_profile_switches_to_credential_pair() {
    let t = Test::init();
    t.cmd()
        .args([
            "add",
            "Corp",
            ACCOUNT_A,
            "--auth",
            "sso",
            "--portal-url",
            "https://corp.awsapps.com/start",
        ])
        .assert()
        .success();

    t.cmd()
        .args(["credential", "set", "Corp", "--identity", "admin"])
        .write_stdin("pw\n")
        .assert()
        .success();

    assert_eq!(t.profiles()[0]["auth"]["mode"], "credential-pair");
}

#[test]
fn test_get_without_secret_warns() {
    let t = Test::with_profiles(&[("Prod", ACCOUNT_A)]);

    let output = t.credential_get("Prod");
    assert_success(&output);
    assert!(stdout(&output).trim().is_empty());
    assert_stderr_contains(&output, "no password stored");
}

#[test]
fn test_get_on_role_profile_is_not_found() {
    let t = Test::init();
    t.cmd()
        .args([
            "add",
            "Ops",
            ACCOUNT_A,
            "--auth",
            "role",
            "--role-arn",
            "arn:aws:iam::111111111111:role/Ops",
        ])
        .assert()
        .success();

    let output = t.credential_get("Ops");
    assert_failure(&output);
    assert_stderr_contains(&output, "profile not found");
}
