//! Passphrase cipher backend.
//!
//! AES-256-GCM with a PBKDF2-derived key. Salt and nonce travel in front of
//! the ciphertext so a blob is self-contained given the passphrase.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use rand::{rngs::OsRng, RngCore};
use tracing::trace;
use zeroize::Zeroizing;

use super::{derive_key, Cipher};
use crate::core::constants::{HEADER_LEN, NONCE_LEN, SALT_LEN};
use crate::core::encoding::{bytes_to_text, text_to_bytes};
use crate::core::types::EncryptedBlob;
use crate::error::{CipherError, Result};

/// Passphrase-keyed backend.
///
/// Holds the passphrase for its lifetime; it is zeroized on drop.
pub struct Passphrase {
    secret: Zeroizing<String>,
}

impl Passphrase {
    /// Create a backend keyed by `passphrase`.
    pub fn new(passphrase: &str) -> Self {
        Self {
            secret: Zeroizing::new(passphrase.to_string()),
        }
    }

    fn cipher_for(&self, salt: &[u8; SALT_LEN]) -> Result<Aes256Gcm> {
        let key = derive_key(&self.secret, salt);
        Aes256Gcm::new_from_slice(&key[..])
            .map_err(|e| CipherError::InvalidKey(e.to_string()).into())
    }
}

impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Passphrase").finish_non_exhaustive()
    }
}

impl Cipher for Passphrase {
    fn name(&self) -> &'static str {
        "aes-256-gcm+pbkdf2"
    }

    fn encrypt(&self, plaintext: &str) -> Result<EncryptedBlob> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let mut salt = [0u8; SALT_LEN];
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut salt);
        OsRng.fill_bytes(&mut nonce);

        let ciphertext = self
            .cipher_for(&salt)?
            .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
            .map_err(|e| CipherError::Encryption(e.to_string()))?;

        let mut combined = Vec::with_capacity(HEADER_LEN + ciphertext.len());
        combined.extend_from_slice(&salt);
        combined.extend_from_slice(&nonce);
        combined.extend_from_slice(&ciphertext);

        trace!(blob_len = combined.len(), "encrypted");

        Ok(bytes_to_text(&combined))
    }

    fn decrypt(&self, blob: &str) -> Result<Zeroizing<String>> {
        let combined = text_to_bytes(blob.trim())?;
        trace!(blob_len = combined.len(), "decrypting");

        // A header with no ciphertext can never authenticate.
        if combined.len() <= HEADER_LEN {
            return Err(CipherError::Malformed {
                actual: combined.len(),
                minimum: HEADER_LEN,
            }
            .into());
        }

        let (salt, rest) = combined.split_at(SALT_LEN);
        let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

        let mut salt_bytes = [0u8; SALT_LEN];
        salt_bytes.copy_from_slice(salt);

        let plaintext = self
            .cipher_for(&salt_bytes)?
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CipherError::Authentication)?;

        String::from_utf8(plaintext)
            .map(Zeroizing::new)
            .map_err(|_| CipherError::Authentication.into())
    }
}
