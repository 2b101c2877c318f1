//! Profile and credential operations.

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::Vault;
use crate::core::cipher;
use crate::core::domain::profile::dedupe_tags;
use crate::core::domain::{Auth, Credential, CredentialPair, NewProfile, Profile};
use crate::core::types::EncryptedBlob;
use crate::core::validation::{
    check_region, validate_account_id, validate_auth, validate_display_name, validate_profile,
};
use crate::error::{ProfileError, Result};

/// Encrypt a secret with the local key; an empty secret stores an empty blob.
fn seal(secret: &str, local_key: &str) -> Result<EncryptedBlob> {
    if secret.is_empty() {
        return Ok(EncryptedBlob::new());
    }
    cipher::encrypt(secret, local_key)
}

impl Vault {
    /// All profiles in insertion order.
    pub fn list(&self) -> Result<Vec<Profile>> {
        Ok(self.document()?.profiles)
    }

    /// Profile by id.
    pub fn get(&self, id: &str) -> Result<Option<Profile>> {
        Ok(self.document()?.find(id).cloned())
    }

    /// Create and persist a profile.
    ///
    /// Assigns a fresh id and `created_at`. A plaintext secret on a
    /// credential-pair profile is encrypted before it is stored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty name or a malformed account id,
    /// and `ProfileError::DuplicateAccount` when duplicates are rejected in
    /// settings and the account already has a profile.
    pub fn create(&self, new: NewProfile) -> Result<Profile> {
        let display_name = new.display_name.trim().to_string();
        validate_display_name(&display_name)?;
        validate_account_id(&new.account_id)?;
        validate_auth(&new.auth)?;

        let profile = self.mutate(|doc| {
            if doc.settings.reject_duplicate_accounts && doc.has_account(&new.account_id) {
                return Err(ProfileError::DuplicateAccount(new.account_id.clone()).into());
            }

            let mut auth = new.auth;
            if let (Auth::CredentialPair(pair), Some(secret)) = (&mut auth, new.secret.as_deref()) {
                pair.encrypted_secret = seal(secret, &doc.local_key)?;
            }

            let default_region = new
                .default_region
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| doc.settings.default_region.clone());
            check_region(&default_region);

            let profile = Profile {
                id: Uuid::new_v4().to_string(),
                display_name,
                account_id: new.account_id,
                default_region,
                auth,
                tags: dedupe_tags(&new.tags),
                group: new.group.filter(|g| !g.trim().is_empty()),
                color: new.color,
                favorite: new.favorite,
                created_at: Utc::now(),
                last_used_at: None,
            };
            doc.profiles.push(profile.clone());
            Ok(profile)
        })?;

        info!(id = %profile.id, account = %profile.account_id, mode = %profile.auth_mode(), "profile created");
        Ok(profile)
    }

    /// Replace a stored profile by id.
    ///
    /// The new contents are stored as given, so `id` and `created_at` keep
    /// their values unless the caller changed them. A profile id that is not
    /// stored is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the new contents are invalid.
    pub fn update(&self, mut profile: Profile) -> Result<()> {
        validate_profile(&profile)?;
        profile.tags = dedupe_tags(&profile.tags);

        self.mutate(|doc| {
            match doc.find_mut(&profile.id) {
                Some(existing) => {
                    debug!(id = %profile.id, "profile updated");
                    *existing = profile;
                }
                None => debug!(id = %profile.id, "update of unknown profile ignored"),
            }
            Ok(())
        })
    }

    /// Remove a profile. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let removed = self.mutate(|doc| {
            let before = doc.profiles.len();
            doc.profiles.retain(|p| p.id != id);
            Ok(doc.profiles.len() != before)
        })?;
        if removed {
            info!(id = %id, "profile deleted");
        }
        Ok(removed)
    }

    /// Mark a profile as used now.
    pub fn touch_last_used(&self, id: &str) -> Result<()> {
        self.mutate(|doc| {
            if let Some(profile) = doc.find_mut(id) {
                profile.last_used_at = Some(Utc::now());
            }
            Ok(())
        })
    }

    /// Store a credential pair on a profile, switching it to credential-pair
    /// auth. Returns false when the profile does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Encryption` if the secret cannot be encrypted.
    pub fn set_credential(&self, id: &str, identity: &str, secret: &str) -> Result<bool> {
        let updated = self.mutate(|doc| {
            let encrypted_secret = seal(secret, &doc.local_key)?;
            let Some(profile) = doc.find_mut(id) else {
                return Ok(false);
            };
            profile.auth = Auth::CredentialPair(CredentialPair {
                identity: identity.to_string(),
                encrypted_secret,
            });
            Ok(true)
        })?;
        if updated {
            info!(id = %id, "credential stored");
        }
        Ok(updated)
    }

    /// Decrypted credential for a profile.
    ///
    /// `None` when the profile is missing or does not use a credential pair.
    /// The secret is empty when none is stored, when the vault is locked, or
    /// when the stored blob does not decrypt; the failure is logged and never
    /// retried.
    pub fn decrypt_credential(&self, id: &str) -> Result<Option<Credential>> {
        let doc = self.document()?;
        let Some(pair) = doc.find(id).and_then(|p| p.auth.credentials()) else {
            return Ok(None);
        };

        if pair.encrypted_secret.is_empty() {
            return Ok(Some(Credential::identity_only(&pair.identity)));
        }
        if doc.vault_unlock_enabled && !self.unlocked {
            debug!(id = %id, "vault locked, withholding secret");
            return Ok(Some(Credential::identity_only(&pair.identity)));
        }

        match cipher::decrypt(&pair.encrypted_secret, &doc.local_key) {
            Ok(secret) => Ok(Some(Credential::new(&pair.identity, secret))),
            Err(e) => {
                warn!(id = %id, error = %e, "stored credential could not be decrypted");
                Ok(Some(Credential::identity_only(&pair.identity)))
            }
        }
    }
}
