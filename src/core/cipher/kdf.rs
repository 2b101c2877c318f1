//! Password-based key derivation.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::core::constants::{KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN};

/// Derive a 256-bit AES key from a passphrase and salt.
///
/// PBKDF2-HMAC-SHA256 with [`PBKDF2_ITERATIONS`] rounds. Deterministic for a
/// given passphrase and salt. The key is wiped from memory on drop.
pub fn derive_key(passphrase: &str, salt: &[u8; SALT_LEN]) -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, PBKDF2_ITERATIONS, &mut *key);
    key
}
