//! Import and export of profiles.
//!
//! Three formats share one merge rule: a candidate is imported only if no
//! profile (including candidates imported earlier in the same batch) already
//! has its account id. Otherwise it is skipped, never overwritten.
//!
//! - `json`: native envelope, secrets redacted on export, stripped on import
//! - `csv`: spreadsheet-friendly rows with synonym-tolerant headers
//! - `provider_config`: INI-style provider CLI configuration

pub mod csv;
pub mod json;
pub mod provider_config;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::core::document::Document;
use crate::core::domain::profile::dedupe_tags;
use crate::core::domain::{Auth, ImportSummary, NewProfile, Profile};
use crate::core::validation::validate_profile;

/// Parser output: usable candidates plus rows already rejected.
#[derive(Debug, Default)]
pub struct Parsed {
    pub candidates: Vec<NewProfile>,
    /// Rows or sections dropped during parsing (no usable account id, bad shape)
    pub skipped: usize,
}

/// Display name used when a source row carries none.
pub(crate) fn fallback_name(account_id: &str) -> String {
    format!("Account {}", account_id)
}

/// Drop any stored secret, keeping the identity.
pub(crate) fn strip_secret(auth: &mut Auth) {
    if let Auth::CredentialPair(pair) = auth {
        pair.encrypted_secret.clear();
    }
}

/// Append every valid candidate whose account id is not present yet.
///
/// Imported profiles get a fresh id, `created_at = now`, and never carry a
/// credential secret. A candidate that would fail profile validation (blank
/// name, bad portal URL, malformed source account id) counts as skipped.
pub fn merge(doc: &mut Document, parsed: Parsed) -> ImportSummary {
    let mut summary = ImportSummary {
        imported: 0,
        skipped: parsed.skipped,
    };

    for candidate in parsed.candidates {
        if doc.has_account(&candidate.account_id) {
            debug!(account = %candidate.account_id, "skipping duplicate account");
            summary.skipped += 1;
            continue;
        }

        let mut auth = candidate.auth;
        strip_secret(&mut auth);

        let profile = Profile {
            id: Uuid::new_v4().to_string(),
            display_name: candidate.display_name,
            account_id: candidate.account_id,
            default_region: candidate
                .default_region
                .unwrap_or_else(|| doc.settings.default_region.clone()),
            auth,
            tags: dedupe_tags(&candidate.tags),
            group: candidate.group,
            color: candidate.color,
            favorite: candidate.favorite,
            created_at: Utc::now(),
            last_used_at: None,
        };
        if let Err(e) = validate_profile(&profile) {
            debug!(account = %profile.account_id, error = %e, "skipping invalid candidate");
            summary.skipped += 1;
            continue;
        }

        doc.profiles.push(profile);
        summary.imported += 1;
    }

    summary
}
