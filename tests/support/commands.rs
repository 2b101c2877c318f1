//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a bullpen command bound to this test's data directory.
    ///
    /// Returns a Command configured with:
    /// - BULLPEN_HOME set to the temporary data directory
    /// - BULLPEN_PASSWORD and BULLPEN_LOG cleared
    /// - NO_COLOR set so output can be matched as plain text
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("bullpen").expect("failed to find bullpen binary");
        cmd.env("BULLPEN_HOME", self.home.path());
        cmd.env_remove("BULLPEN_PASSWORD");
        cmd.env_remove("BULLPEN_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `bullpen init`.
    pub fn init_cmd(&self) -> Output {
        self.cmd()
            .arg("init")
            .output()
            .expect("failed to run bullpen init")
    }

    /// Shortcut for `bullpen add <name> <account>`.
    pub fn add(&self, name: &str, account_id: &str) -> Output {
        self.cmd()
            .args(["add", name, account_id])
            .output()
            .expect("failed to run bullpen add")
    }

    /// Shortcut for `bullpen add` with an identity and a piped password.
    pub fn add_with_secret(
        &self,
        name: &str,
        account_id: &str,
        identity: &str,
        secret: &str,
    ) -> Output {
        self.cmd()
            .args(["add", name, account_id, "--identity", identity, "--with-secret"])
            .write_stdin(format!("{}\n", secret))
            .output()
            .expect("failed to run bullpen add --with-secret")
    }

    /// Shortcut for `bullpen list`.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run bullpen list")
    }

    /// Shortcut for `bullpen list --json`.
    pub fn list_json(&self) -> Output {
        self.cmd()
            .args(["list", "--json"])
            .output()
            .expect("failed to run bullpen list --json")
    }

    /// Parsed `bullpen list --json`.
    pub fn profiles(&self) -> Vec<serde_json::Value> {
        let output = self.list_json();
        assert!(output.status.success(), "list --json failed");
        serde_json::from_slice(&output.stdout).expect("list --json is not JSON")
    }

    /// Shortcut for `bullpen show <id>`.
    pub fn show(&self, id: &str) -> Output {
        self.cmd()
            .args(["show", id])
            .output()
            .expect("failed to run bullpen show")
    }

    /// Shortcut for `bullpen rm <id>`.
    pub fn rm(&self, id: &str) -> Output {
        self.cmd()
            .args(["rm", id])
            .output()
            .expect("failed to run bullpen rm")
    }

    /// Shortcut for `bullpen credential get <id>`.
    pub fn credential_get(&self, id: &str) -> Output {
        self.cmd()
            .args(["credential", "get", id])
            .output()
            .expect("failed to run bullpen credential get")
    }

    /// Shortcut for `bullpen import <format> <path>`.
    pub fn import(&self, format: &str, path: &str) -> Output {
        self.cmd()
            .args(["import", format, path])
            .output()
            .expect("failed to run bullpen import")
    }

    /// Shortcut for `bullpen export <format>`.
    pub fn export(&self, format: &str) -> Output {
        self.cmd()
            .args(["export", format])
            .output()
            .expect("failed to run bullpen export")
    }
}
