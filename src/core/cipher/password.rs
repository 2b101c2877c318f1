//! Unlock password hashing and local key generation.

use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::core::constants::KEY_LEN;
use crate::core::encoding::bytes_to_text;

/// One-way SHA-256 digest of an unlock password, base64 encoded.
pub fn hash_password(password: &str) -> String {
    bytes_to_text(&Sha256::digest(password.as_bytes()))
}

/// Check a password against a stored [`hash_password`] digest.
///
/// Comparison is constant time over the encoded digests.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let computed = hash_password(password);
    computed.as_bytes().ct_eq(stored_hash.as_bytes()).into()
}

/// Generate a random 256-bit key, base64 encoded.
///
/// Used as the vault passphrase when no master password is configured. It is
/// stored next to the data it protects, so it only hides secrets from casual
/// inspection.
pub fn generate_random_key() -> String {
    let mut key = [0u8; KEY_LEN];
    OsRng.fill_bytes(&mut key);
    bytes_to_text(&key)
}
