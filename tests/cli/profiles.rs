//! Tests for profile commands: add, list, show, edit, rm, use.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_add_and_list() {
    let t = Test::with_profiles(&[("Prod", ACCOUNT_A), ("Staging", ACCOUNT_B)]);

    let output = t.list();
    assert_success(&output);
    assert_stdout_contains(&output, "Other (2)");
    assert_stdout_contains(&output, "Prod");
    assert_stdout_contains(&output, ACCOUNT_B);
}

#[test]
fn test_list_groups_favorites_first() {
    let t = Test::init();
    t.cmd()
        .args(["add", "Billing", ACCOUNT_A, "--group", "Finance"])
        .assert()
        .success();
    t.cmd()
        .args(["add", "Root", ACCOUNT_B, "--favorite"])
        .assert()
        .success();

    let out = stdout(&t.list());
    let favorites = out.find("Favorites (1)").expect("favorites group");
    let finance = out.find("Finance (1)").expect("finance group");
    assert!(favorites < finance);
}

#[test]
fn test_list_query_filters() {
    let t = Test::with_profiles(&[("Production", ACCOUNT_A), ("Staging", ACCOUNT_B)]);

    let output = t.cmd().args(["list", "--query", "PROD"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Production");
    assert_stdout_excludes(&output, "Staging");

    t.cmd()
        .args(["list", "-q", "nothing-matches"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no matching profiles"));
}

#[test]
fn test_list_json_is_parseable() {
    let t = Test::with_profiles(&[("Prod", ACCOUNT_A)]);
    let profiles = t.profiles();

    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0]["display_name"], "Prod");
    assert_eq!(profiles[0]["account_id"], ACCOUNT_A);
    assert_eq!(profiles[0]["auth"]["mode"], "credential-pair");
}

#[test]
fn test_list_json_redacts_secrets() {
    let t = Test::init();
    assert_success(&t.add_with_secret("Prod", ACCOUNT_A, "admin", "hunter2"));

    let output = t.list_json();
    assert_stdout_contains(&output, "[REDACTED]");
    assert_stdout_excludes(&output, "hunter2");
}

#[test]
fn test_show_by_name_and_id_prefix() {
    let t = Test::with_profiles(&[("Prod", ACCOUNT_A)]);
    let id = t.profiles()[0]["id"].as_str().unwrap().to_string();

    let output = t.show("prod");
    assert_success(&output);
    assert_stdout_contains(&output, ACCOUNT_A);
    assert_stdout_contains(&output, "iam");

    let output = t.show(&id[..8]);
    assert_success(&output);
    assert_stdout_contains(&output, &id);
}

#[test]
fn test_add_sso_profile() {
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
            "--role-name",
            "Admin",
        ])
        .assert()
        .success();

    let profile = &t.profiles()[0];
    assert_eq!(profile["auth"]["mode"], "federated-sso");
    assert_eq!(profile["auth"]["role_name"], "Admin");
}

#[test]
fn test_add_sso_requires_portal_url() {
    let t = Test::init();
    let output = t
        .cmd()
        .args(["add", "Corp", ACCOUNT_A, "--auth", "sso"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "portal_url");
}

#[test]
fn test_edit_fields_and_tags() {
    let t = Test::init();
    t.cmd()
        .args(["add", "Prod", ACCOUNT_A, "--tag", "a", "--tag", "b"])
        .assert()
        .success();

    t.cmd()
        .args([
            "edit",
            "Prod",
            "--name",
            "Production",
            "--region",
            "eu-west-1",
            "--group",
            "Core",
            "--favorite",
            "true",
            "--add-tag",
            "c",
            "--remove-tag",
            "a",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated"));

    let profile = &t.profiles()[0];
    assert_eq!(profile["display_name"], "Production");
    assert_eq!(profile["default_region"], "eu-west-1");
    assert_eq!(profile["group"], "Core");
    assert_eq!(profile["favorite"], true);
    assert_eq!(profile["tags"], serde_json::json!(["b", "c"]));
}

#[test]
fn test_rm() {
    let t = Test::with_profiles(&[("Prod", ACCOUNT_A)]);

    let output = t.rm("Prod");
    assert_success(&output);
    assert_stdout_contains(&output, "removed");
    assert!(t.profiles().is_empty());
}

#[test]
fn test_use_prints_url_and_touches() {
    let t = Test::with_profiles(&[("Prod", ACCOUNT_A)]);
    assert!(t.profiles()[0].get("last_used_at").is_none());

    let output = t.cmd().args(["use", "Prod"]).output().unwrap();
    assert_success(&output);
    assert_eq!(
        stdout(&output).trim(),
        "https://111111111111.signin.aws.amazon.com/console?region=us-east-1"
    );
    assert!(t.profiles()[0]["last_used_at"].is_string());
}

#[test]
fn test_duplicate_accounts_allowed_by_default() {
    let t = Test::with_profiles(&[("Prod", ACCOUNT_A), ("prod", ACCOUNT_A)]);
    assert_eq!(t.profiles().len(), 2);

    // Names match case-insensitively, so this one is ambiguous
    let output = t.show("PROD");
    assert_failure(&output);
    assert_stderr_contains(&output, "profile not found");
}
