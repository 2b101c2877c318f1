//! The persisted vault document.
//!
//! Profiles, unlock state, the local key, and app settings are one JSON
//! document, read whole and written whole.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::cipher;
use crate::core::constants::{DEFAULT_REGION, DOCUMENT_KEY, DOCUMENT_VERSION};
use crate::core::domain::Profile;
use crate::core::store::Store;
use crate::error::{Result, StoreError};

/// App-level settings stored with the profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fill sign-in forms automatically
    pub auto_fill: bool,
    /// Show the account banner on provider pages
    pub show_banner: bool,
    /// Region for new profiles that do not name one
    pub default_region: String,
    /// Reject direct creation of a profile whose account id already exists
    pub reject_duplicate_accounts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_fill: true,
            show_banner: true,
            default_region: DEFAULT_REGION.to_string(),
            reject_duplicate_accounts: false,
        }
    }
}

/// Whole persisted state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub vault_unlock_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_password_hash: Option<String>,
    /// Random key used as the encryption passphrase. Empty until first open.
    #[serde(default)]
    pub local_key: String,
    #[serde(default)]
    pub settings: Settings,
}

fn default_version() -> u32 {
    DOCUMENT_VERSION
}

impl Default for Document {
    fn default() -> Self {
        Self {
            version: DOCUMENT_VERSION,
            profiles: Vec::new(),
            vault_unlock_enabled: false,
            unlock_password_hash: None,
            local_key: String::new(),
            settings: Settings::default(),
        }
    }
}

impl Document {
    /// Load the document, or `None` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored text is not a document.
    pub fn load(store: &dyn Store) -> Result<Option<Self>> {
        let Some(text) = store.get(DOCUMENT_KEY)? else {
            return Ok(None);
        };
        let doc: Self = serde_json::from_str(&text).map_err(StoreError::Corrupt)?;
        debug!(profiles = doc.profiles.len(), "document loaded");
        Ok(Some(doc))
    }

    /// Load the document, creating and persisting a fresh one with a new local
    /// key when missing. Also backfills the local key of older documents.
    pub fn load_or_init(store: &dyn Store) -> Result<Self> {
        let mut doc = Self::load(store)?.unwrap_or_default();
        if doc.local_key.is_empty() {
            debug!("generating local key");
            doc.local_key = cipher::generate_random_key();
            doc.save(store)?;
        }
        Ok(doc)
    }

    /// Replace the stored document.
    pub fn save(&self, store: &dyn Store) -> Result<()> {
        let text = serde_json::to_string_pretty(self).map_err(StoreError::Serialize)?;
        store.set(DOCUMENT_KEY, &text)?;
        debug!(profiles = self.profiles.len(), "document saved");
        Ok(())
    }

    /// Whether a profile with this account id exists.
    pub fn has_account(&self, account_id: &str) -> bool {
        self.profiles.iter().any(|p| p.account_id == account_id)
    }

    pub fn find(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Profile> {
        self.profiles.iter_mut().find(|p| p.id == id)
    }
}
