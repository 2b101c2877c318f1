//! Credential type.
//!
//! A decrypted identity/secret pair handed to auto-fill.

use zeroize::Zeroizing;

/// Decrypted sign-in credential.
///
/// `secret` is empty when none is stored or it could not be decrypted; callers
/// fill the identity and skip the password field.
pub struct Credential {
    pub identity: String,
    pub secret: Zeroizing<String>,
}

impl Credential {
    pub fn new(identity: impl Into<String>, secret: Zeroizing<String>) -> Self {
        Self {
            identity: identity.into(),
            secret,
        }
    }

    /// Identity with no usable secret.
    pub fn identity_only(identity: impl Into<String>) -> Self {
        Self::new(identity, Zeroizing::new(String::new()))
    }

    /// Whether a secret is available to fill.
    pub fn has_secret(&self) -> bool {
        !self.secret.is_empty()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("identity", &self.identity)
            .field("secret", &if self.has_secret() { "***" } else { "" })
            .finish()
    }
}
