//! Import and export through the vault.

use tracing::info;

use super::Vault;
use crate::core::domain::ImportSummary;
use crate::core::transfer::{self, csv, json, provider_config, Parsed};
use crate::error::Result;

impl Vault {
    /// Export all profiles as the JSON envelope, secrets redacted.
    pub fn export_json(&self) -> Result<String> {
        json::export(&self.list()?)
    }

    /// Export all profiles as CSV. With `password_column`, credential-pair rows
    /// carry a placeholder, never the secret.
    pub fn export_csv(&self, password_column: bool) -> Result<String> {
        Ok(csv::export(&self.list()?, password_column))
    }

    /// Import a JSON envelope or bare array.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::Parse` when the text is not JSON or has neither
    /// shape. Individual bad elements are only counted as skipped.
    pub fn import_json(&self, text: &str) -> Result<ImportSummary> {
        self.import("json", json::parse(text)?)
    }

    /// Import CSV rows.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::Parse` without a header and at least one row.
    pub fn import_csv(&self, text: &str) -> Result<ImportSummary> {
        self.import("csv", csv::parse(text)?)
    }

    /// Import profiles from provider CLI configuration text.
    pub fn import_provider_config(&self, text: &str) -> Result<ImportSummary> {
        self.import("config", provider_config::parse(text)?)
    }

    fn import(&self, format: &'static str, parsed: Parsed) -> Result<ImportSummary> {
        let summary = self.mutate(|doc| Ok(transfer::merge(doc, parsed)))?;
        info!(
            format = %format,
            imported = summary.imported,
            skipped = summary.skipped,
            "import finished"
        );
        Ok(summary)
    }
}
