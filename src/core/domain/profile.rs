//! Profile type.
//!
//! One stored cloud account entry and its authentication configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{AccountId, EncryptedBlob, ProfileId};

/// Authentication mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMode {
    CredentialPair,
    FederatedSso,
    DelegatedRole,
}

impl AuthMode {
    /// Short label used in CSV files and listings.
    pub fn label(&self) -> &'static str {
        match self {
            AuthMode::CredentialPair => "iam",
            AuthMode::FederatedSso => "sso",
            AuthMode::DelegatedRole => "role",
        }
    }

    /// Parse a label or one of its synonyms, case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "iam" | "credential-pair" | "credentials" | "user" => Some(AuthMode::CredentialPair),
            "sso" | "federated-sso" | "federated" => Some(AuthMode::FederatedSso),
            "role" | "delegated-role" | "assume-role" => Some(AuthMode::DelegatedRole),
            _ => None,
        }
    }
}

impl std::fmt::Display for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Authentication configuration. The variant is the auth mode, so exactly one
/// configuration is ever populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Auth {
    CredentialPair(CredentialPair),
    FederatedSso(FederatedConfig),
    DelegatedRole(DelegatedRoleConfig),
}

impl Auth {
    /// The mode selector for this configuration.
    pub fn mode(&self) -> AuthMode {
        match self {
            Auth::CredentialPair(_) => AuthMode::CredentialPair,
            Auth::FederatedSso(_) => AuthMode::FederatedSso,
            Auth::DelegatedRole(_) => AuthMode::DelegatedRole,
        }
    }

    /// Identity-only credential pair with no stored secret.
    pub fn identity(identity: impl Into<String>) -> Self {
        Auth::CredentialPair(CredentialPair {
            identity: identity.into(),
            encrypted_secret: EncryptedBlob::new(),
        })
    }

    /// The credential pair, when this is one.
    pub fn credentials(&self) -> Option<&CredentialPair> {
        match self {
            Auth::CredentialPair(pair) => Some(pair),
            _ => None,
        }
    }
}

impl Default for Auth {
    fn default() -> Self {
        Auth::identity("")
    }
}

/// Identity and encrypted password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialPair {
    pub identity: String,
    /// Empty when only the identity is stored.
    pub encrypted_secret: EncryptedBlob,
}

/// Single sign-on portal configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FederatedConfig {
    pub portal_url: String,
    pub account_id: AccountId,
    pub role_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sso_region: Option<String>,
}

/// Assumed-role configuration, optionally cross-account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegatedRoleConfig {
    pub role_arn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_account_id: Option<AccountId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_duration_seconds: Option<u32>,
}

/// A stored account profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub display_name: String,
    pub account_id: AccountId,
    pub default_region: String,
    pub auth: Auth,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Auth mode of this profile.
    pub fn auth_mode(&self) -> AuthMode {
        self.auth.mode()
    }

    /// Add a tag unless an equal one is already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Whether a non-empty encrypted secret is stored.
    pub fn has_secret(&self) -> bool {
        self.auth
            .credentials()
            .is_some_and(|pair| !pair.encrypted_secret.is_empty())
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name, self.account_id)
    }
}

/// Fields for creating a profile. The vault assigns id and timestamps.
#[derive(Debug, Clone, Default)]
pub struct NewProfile {
    pub display_name: String,
    pub account_id: AccountId,
    pub default_region: Option<String>,
    pub auth: Auth,
    /// Plaintext secret for a credential pair, encrypted before it is stored.
    pub secret: Option<String>,
    pub tags: Vec<String>,
    pub group: Option<String>,
    pub color: Option<String>,
    pub favorite: bool,
}

impl NewProfile {
    /// Minimal identity-less credential-pair profile.
    pub fn new(display_name: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            account_id: account_id.into(),
            ..Default::default()
        }
    }
}

/// Normalize a tag list: trimmed, non-empty, first occurrence wins.
pub fn dedupe_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}
