//! Error types for bullpen.
//!
//! Each concern has its own error enum; [`Error`] aggregates them so callers
//! can match on the domain they care about.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Text to binary decoding failures.
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("invalid base64 input: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Vault crypto failures.
///
/// `Authentication` deliberately carries no detail: a wrong passphrase and a
/// tampered blob must look the same to the caller.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encrypted value is malformed: {actual} bytes, need more than {minimum}")]
    Malformed { actual: usize, minimum: usize },

    #[error("could not decrypt")]
    Authentication,

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),
}

/// Input validation failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("display name cannot be empty")]
    EmptyName,

    #[error("invalid account id '{0}': must be exactly 12 digits")]
    InvalidAccountId(String),

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Profile store failures.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("profile not found: {0}")]
    NotFound(String),

    #[error("account {0} already has a profile")]
    DuplicateAccount(String),

    #[error("vault is locked")]
    Locked,

    #[error("incorrect unlock password")]
    WrongPassword,
}

/// Import pipeline failures.
///
/// Row-level problems never surface here; they are counted as skipped.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("cannot parse {format} input: {reason}")]
    Parse { format: &'static str, reason: String },

    #[error("failed to read import file: {0}")]
    Read(#[source] std::io::Error),
}

/// Persistence backend failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {key}: {source}")]
    ReadFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {key}: {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("stored document is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// Configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot determine data directory; set BULLPEN_HOME")]
    NoDataDir,

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ImportError {
    pub(crate) fn parse(format: &'static str, reason: impl Into<String>) -> Self {
        Self::Parse {
            format,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
