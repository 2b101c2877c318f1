//! Native JSON export and import.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{fallback_name, strip_secret, Parsed};
use crate::core::constants::{EXPORT_VERSION, REDACTED};
use crate::core::domain::{Auth, NewProfile, Profile};
use crate::core::validation::is_account_id;
use crate::error::{ImportError, Result, StoreError};

#[derive(Serialize)]
struct Envelope<'a> {
    version: u32,
    exported_at: DateTime<Utc>,
    profiles: &'a [Profile],
}

/// Replace a stored encrypted secret with the redaction marker.
///
/// A blob only decrypts with this vault's local key, so exporting it would
/// mislead whoever imports the file.
pub fn redact(profile: &mut Profile) {
    if let Auth::CredentialPair(pair) = &mut profile.auth {
        if !pair.encrypted_secret.is_empty() {
            pair.encrypted_secret = REDACTED.to_string();
        }
    }
}

/// Serialize profiles to the export envelope with secrets redacted.
///
/// # Errors
///
/// Returns `StoreError::Serialize` if serialization fails.
pub fn export(profiles: &[Profile]) -> Result<String> {
    let mut redacted = profiles.to_vec();
    redacted.iter_mut().for_each(redact);

    let envelope = Envelope {
        version: EXPORT_VERSION,
        exported_at: Utc::now(),
        profiles: &redacted,
    };
    Ok(serde_json::to_string_pretty(&envelope).map_err(StoreError::Serialize)?)
}

/// One element of an import array; every field is optional so partially
/// shaped input still yields what it can.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Record {
    #[serde(alias = "displayName", alias = "name")]
    display_name: Option<String>,
    #[serde(alias = "accountId", alias = "providerAccountId")]
    account_id: Option<Value>,
    #[serde(alias = "defaultRegion", alias = "region")]
    default_region: Option<String>,
    auth: Option<Auth>,
    tags: Vec<String>,
    #[serde(alias = "groupLabel")]
    group: Option<String>,
    #[serde(alias = "colorTag")]
    color: Option<String>,
    #[serde(alias = "isFavorite")]
    favorite: bool,
}

/// Account ids may arrive as strings or bare numbers.
fn account_id_of(value: &Value) -> Option<String> {
    let id = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    is_account_id(&id).then_some(id)
}

impl Record {
    fn into_candidate(self) -> Option<NewProfile> {
        let account_id = self.account_id.as_ref().and_then(account_id_of)?;

        let mut auth = self.auth.unwrap_or_default();
        strip_secret(&mut auth);

        let display_name = self
            .display_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| fallback_name(&account_id));

        Some(NewProfile {
            display_name,
            account_id,
            default_region: self.default_region.filter(|r| !r.trim().is_empty()),
            auth,
            secret: None,
            tags: self.tags,
            group: self.group.filter(|g| !g.trim().is_empty()),
            color: self.color,
            favorite: self.favorite,
        })
    }
}

/// Parse an export envelope or a bare array of profile-shaped objects.
///
/// # Errors
///
/// Returns `ImportError::Parse` if the text is not JSON, or is neither an
/// array nor an object with a `profiles` array. Bad elements are skipped.
pub fn parse(text: &str) -> Result<Parsed> {
    let root: Value =
        serde_json::from_str(text).map_err(|e| ImportError::parse("json", e.to_string()))?;

    let items = match root {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("profiles") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(ImportError::parse("json", "expected a \"profiles\" array").into())
            }
        },
        _ => return Err(ImportError::parse("json", "expected an array of profiles").into()),
    };

    let mut parsed = Parsed::default();
    for (index, item) in items.into_iter().enumerate() {
        let candidate = serde_json::from_value::<Record>(item)
            .ok()
            .and_then(Record::into_candidate);
        match candidate {
            Some(candidate) => parsed.candidates.push(candidate),
            None => {
                debug!(index, "skipping unusable json record");
                parsed.skipped += 1;
            }
        }
    }

    Ok(parsed)
}
