//! Tests for `bullpen init`, global flags, and completions.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_init_creates_vault_and_config() {
    let t = Test::new();
    let output = t.init_cmd();

    assert_success(&output);
    assert_stdout_contains(&output, "✓ vault ready");
    assert!(t.home.path().join("vault.json").exists());
    assert!(t.home.path().join("config.toml").exists());
}

#[test]
fn test_init_twice_keeps_profiles() {
    let t = Test::with_profiles(&[("Prod", ACCOUNT_A)]);
    assert_success(&t.init_cmd());
    assert_eq!(t.profiles().len(), 1);
}

#[test]
fn test_init_region_applies_to_new_profiles() {
    let t = Test::new();
    t.cmd()
        .args(["init", "--region", "eu-central-1"])
        .assert()
        .success();

    let config = std::fs::read_to_string(t.home.path().join("config.toml")).unwrap();
    assert!(config.contains("eu-central-1"));

    assert_success(&t.add("Prod", ACCOUNT_A));
    assert_eq!(t.profiles()[0]["default_region"], "eu-central-1");
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let t = Test::with_profiles(&[("Prod", ACCOUNT_A)]);
    let other = tempfile::TempDir::new().unwrap();

    t.cmd()
        .args(["list", "--data-dir"])
        .arg(other.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no profiles stored"));
}

#[test]
fn test_config_log_filter_does_not_break_output() {
    let t = Test::init();
    std::fs::write(t.home.path().join("config.toml"), "log = \"bullpen=debug\"\n").unwrap();

    let output = t.list_json();
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "[]");
}

#[test]
fn test_completions() {
    let t = Test::new();
    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bullpen"));
}
