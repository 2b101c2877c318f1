//! Error reporting: messages, hints, and exit status.

use crate::support::*;

#[test]
fn test_invalid_account_id() {
    let t = Test::init();
    let output = t.add("Bad", INVALID_ACCOUNT);
    assert_failure(&output);
    assert_stderr_contains(&output, "12 digits");
    assert!(t.profiles().is_empty());
}

#[test]
fn test_blank_name() {
    let t = Test::init();
    let output = t.add("   ", ACCOUNT_A);
    assert_failure(&output);
    assert_stderr_contains(&output, "display name cannot be empty");
}

#[test]
fn test_missing_profile_hint() {
    let t = Test::init();
    let output = t.show("nope");
    assert_failure(&output);
    assert_stderr_contains(&output, "profile not found: nope");
    assert_stderr_contains(&output, "bullpen list");
}

#[test]
fn test_missing_import_file() {
    let t = Test::init();
    let output = t.import("csv", "does-not-exist.csv");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read import file");
}

#[test]
fn test_unparseable_json_import() {
    let t = Test::init();
    let path = t.write_file("bad.json", "{ not json");
    let output = t.import("json", &path);
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot parse json input");
    assert!(t.profiles().is_empty());
}

#[test]
fn test_unknown_format_rejected_by_parser() {
    let t = Test::init();
    let output = t.import("yaml", "x.yaml");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid value");
}

#[test]
fn test_corrupt_vault_document() {
    let t = Test::init();
    std::fs::write(t.home.path().join("vault.json"), "{ broken").unwrap();

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "corrupt");
}

#[test]
fn test_invalid_config_file() {
    let t = Test::new();
    std::fs::write(t.home.path().join("config.toml"), "default_region = [").unwrap();

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}
