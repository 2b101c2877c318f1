//! Unlock password gate and app settings.
//!
//! The unlock password only gates access to decrypted secrets; it is not an
//! encryption key. Its SHA-256 hash is stored in the document.

use tracing::{debug, info, warn};

use super::Vault;
use crate::core::cipher::{hash_password, verify_password};
use crate::core::document::Settings;
use crate::core::validation::check_region;
use crate::error::{ProfileError, Result, ValidationError};

impl Vault {
    /// Require `password` before secrets are released. The current session
    /// stays unlocked.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidField` for an empty password.
    pub fn enable_unlock(&mut self, password: &str) -> Result<()> {
        if password.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "password",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        self.mutate(|doc| {
            doc.vault_unlock_enabled = true;
            doc.unlock_password_hash = Some(hash_password(password));
            Ok(())
        })?;
        self.unlocked = true;
        info!("unlock password enabled");
        Ok(())
    }

    /// Remove the unlock password.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::WrongPassword` if `password` does not match.
    pub fn disable_unlock(&mut self, password: &str) -> Result<()> {
        let doc = self.document()?;
        if !doc.vault_unlock_enabled {
            return Ok(());
        }
        if !matches_hash(password, doc.unlock_password_hash.as_deref()) {
            warn!("rejected unlock password");
            return Err(ProfileError::WrongPassword.into());
        }

        self.mutate(|doc| {
            doc.vault_unlock_enabled = false;
            doc.unlock_password_hash = None;
            Ok(())
        })?;
        self.unlocked = true;
        info!("unlock password disabled");
        Ok(())
    }

    /// Try to unlock. Returns whether the vault is now unlocked.
    pub fn unlock(&mut self, password: &str) -> Result<bool> {
        let doc = self.document()?;
        if !doc.vault_unlock_enabled {
            self.unlocked = true;
            return Ok(true);
        }

        let ok = matches_hash(password, doc.unlock_password_hash.as_deref());
        if ok {
            debug!("vault unlocked");
            self.unlocked = true;
        } else {
            warn!("rejected unlock password");
        }
        Ok(ok)
    }

    /// Lock this session again.
    pub fn lock(&mut self) {
        self.unlocked = false;
    }

    /// Whether secrets are currently withheld.
    pub fn is_locked(&self) -> bool {
        !self.unlocked
    }

    /// Whether an unlock password is configured.
    pub fn unlock_enabled(&self) -> Result<bool> {
        Ok(self.document()?.vault_unlock_enabled)
    }

    pub fn settings(&self) -> Result<Settings> {
        Ok(self.document()?.settings)
    }

    /// Replace the app settings.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidField` for an empty default region.
    pub fn update_settings(&self, settings: Settings) -> Result<()> {
        if settings.default_region.trim().is_empty() {
            return Err(ValidationError::InvalidField {
                field: "default_region",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        check_region(&settings.default_region);

        self.mutate(|doc| {
            doc.settings = settings;
            Ok(())
        })
    }
}

fn matches_hash(password: &str, stored: Option<&str>) -> bool {
    stored.is_some_and(|hash| verify_password(password, hash))
}
