//! Tests for `bullpen import` and `bullpen export`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_import_csv() {
    let t = Test::init();
    let path = t.write_file("accounts.csv", SAMPLE_CSV);

    let output = t.import("csv", &path);
    assert_success(&output);
    assert_stdout_contains(&output, "import finished: 2 imported, 1 skipped");

    let profiles = t.profiles();
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0]["display_name"], "Prod, EU");
    assert_eq!(profiles[0]["account_id"], ACCOUNT_A);
    assert_eq!(profiles[0]["tags"], serde_json::json!(["prod", "billing"]));
    assert_eq!(profiles[1]["auth"]["mode"], "federated-sso");
}

#[test]
fn test_import_twice_skips_existing() {
    let t = Test::init();
    let path = t.write_file("accounts.csv", SAMPLE_CSV);
    assert_success(&t.import("csv", &path));

    let output = t.import("csv", &path);
    assert_success(&output);
    assert_stdout_contains(&output, "0 imported, 3 skipped");
    assert_eq!(t.profiles().len(), 2);
}

#[test]
fn test_import_provider_config() {
    let t = Test::init();
    let path = t.write_file("config", SAMPLE_PROVIDER_CONFIG);

    let output = t.import("config", &path);
    assert_success(&output);
    assert_stdout_contains(&output, "2 imported");

    let profiles = t.profiles();
    let dev = profiles.iter().find(|p| p["display_name"] == "dev").unwrap();
    assert_eq!(dev["auth"]["mode"], "federated-sso");
    assert_eq!(dev["auth"]["portal_url"], "https://corp.awsapps.com/start");
    assert_eq!(dev["default_region"], "us-west-2");

    let ops = profiles.iter().find(|p| p["display_name"] == "ops").unwrap();
    assert_eq!(ops["auth"]["mode"], "delegated-role");
    assert_eq!(ops["account_id"], "333333333333");
}

#[test]
fn test_json_export_then_import_elsewhere() {
    let t = Test::init();
    assert_success(&t.add_with_secret("Prod", ACCOUNT_A, "admin", "hunter2"));
    assert_success(&t.add("Staging", ACCOUNT_B));

    let output = t.export("json");
    assert_success(&output);
    assert_stdout_contains(&output, "[REDACTED]");
    assert_stdout_excludes(&output, "hunter2");

    let other = Test::init();
    let path = other.write_file("export.json", &stdout(&output));
    let output = other.import("json", &path);
    assert_success(&output);
    assert_stdout_contains(&output, "2 imported, 0 skipped");
    assert_stderr_contains(&output, "passwords are never imported");
}

#[test]
fn test_export_csv_with_password_column() {
    let t = Test::with_profiles(&[("Prod", ACCOUNT_A)]);

    t.cmd()
        .args(["export", "csv", "--with-password-column"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name,"))
        .stdout(predicate::str::contains(",password"))
        .stdout(predicate::str::contains(ACCOUNT_A));
}

#[test]
fn test_export_to_file() {
    let t = Test::with_profiles(&[("Prod", ACCOUNT_A)]);
    let target = t.dir.path().join("out.csv");

    let output = t
        .cmd()
        .args(["export", "csv", "--output"])
        .arg(&target)
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "exported to");

    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.contains("Prod"));
}
