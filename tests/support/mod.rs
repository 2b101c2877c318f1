//! Test support utilities for bullpen integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use tempfile::TempDir;

/// Test environment with an isolated data directory.
///
/// Child processes get `BULLPEN_HOME` pointed at `home`, so tests never touch
/// the real data directory and can run in parallel.
pub struct Test {
    /// Working directory for files passed to import/export
    pub dir: TempDir,
    /// Data directory holding the vault
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with the vault initialized.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_cmd();
        assert!(
            output.status.success(),
            "Failed to initialize vault: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create a test environment with profiles added as `(name, account_id)`.
    pub fn with_profiles(profiles: &[(&str, &str)]) -> Self {
        let t = Self::init();
        for (name, account) in profiles {
            let output = t.add(name, account);
            assert!(
                output.status.success(),
                "Failed to add profile {}: {}",
                name,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Write a file into the working directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write fixture");
        path.to_string_lossy().to_string()
    }

    /// Raw vault document text.
    pub fn document(&self) -> String {
        std::fs::read_to_string(self.home.path().join("vault.json"))
            .expect("failed to read vault document")
    }
}
