//! Cryptographic operations.
//!
//! Provides the vault's encryption abstraction and its passphrase-based
//! implementation.
//!
//! ## Wire format
//!
//! Every encrypted value is a single base64 string:
//!
//! ```text
//! base64( salt[16] || nonce[12] || ciphertext || tag[16] )
//! ```
//!
//! The key is derived from the passphrase with PBKDF2-HMAC-SHA256
//! (100,000 iterations) and the cipher is AES-256-GCM. This layout is a
//! compatibility contract with previously stored data.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use zeroize::Zeroizing;

use crate::core::types::EncryptedBlob;
use crate::error::Result;

mod kdf;
mod passphrase;
mod password;

pub use kdf::derive_key;
pub use passphrase::Passphrase;
pub use password::{generate_random_key, hash_password, verify_password};

/// Cryptographic backend trait.
///
/// Abstracts authenticated encryption of credential strings so the vault
/// never depends on a concrete algorithm.
pub trait Cipher {
    /// Encrypt a UTF-8 plaintext.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Encryption` if the backend fails.
    fn encrypt(&self, plaintext: &str) -> Result<EncryptedBlob>;

    /// Decrypt a blob produced by [`Cipher::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `EncodingError` for invalid base64, `CipherError::Malformed`
    /// for a truncated blob, and `CipherError::Authentication` when the tag
    /// does not verify.
    fn decrypt(&self, blob: &str) -> Result<Zeroizing<String>>;

    /// Backend name for display/logging.
    fn name(&self) -> &'static str;
}

/// Encrypt plaintext with a passphrase.
///
/// Convenience wrapper around `Passphrase::encrypt`. Every call draws a fresh
/// salt and nonce, so identical inputs produce unrelated blobs.
///
/// # Errors
///
/// Returns `CipherError` if encryption fails.
pub fn encrypt(plaintext: &str, passphrase: &str) -> Result<EncryptedBlob> {
    Passphrase::new(passphrase).encrypt(plaintext)
}

/// Decrypt a blob with a passphrase.
///
/// Convenience wrapper around `Passphrase::decrypt`.
///
/// # Errors
///
/// Returns `CipherError::Authentication` for a wrong passphrase or tampered
/// data, and `CipherError::Malformed` for blobs no longer than the header.
pub fn decrypt(blob: &str, passphrase: &str) -> Result<Zeroizing<String>> {
    Passphrase::new(passphrase).decrypt(blob)
}
