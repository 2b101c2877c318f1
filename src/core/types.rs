//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// Opaque profile identifier (UUID v4 string).
pub type ProfileId = String;

/// A 12-digit cloud account identifier.
pub type AccountId = String;

/// An encrypted credential value.
///
/// `base64(salt[16] || nonce[12] || ciphertext || tag[16])`. Empty means no
/// secret is stored.
pub type EncryptedBlob = String;

/// Browser tab identifier used by the session registry.
pub type TabId = u64;
