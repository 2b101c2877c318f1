//! Constants used throughout bullpen.
//!
//! Centralizes crypto parameters, storage names, and display sentinels.

/// Salt length in bytes for key derivation.
pub const SALT_LEN: usize = 16;

/// AES-GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// AES-GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Bytes preceding the ciphertext in an encrypted blob.
pub const HEADER_LEN: usize = SALT_LEN + NONCE_LEN;

/// PBKDF2-HMAC-SHA256 iteration count.
///
/// Part of the blob compatibility contract; changing it breaks every stored value.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Storage key holding the vault document.
pub const DOCUMENT_KEY: &str = "vault";

/// Current document schema version.
pub const DOCUMENT_VERSION: u32 = 1;

/// Current JSON export envelope version.
pub const EXPORT_VERSION: u32 = 1;

/// Marker written in place of encrypted secrets on JSON export.
pub const REDACTED: &str = "[REDACTED]";

/// Placeholder written in the optional CSV password column.
pub const PASSWORD_PLACEHOLDER: &str = "<re-enter manually>";

/// Group name for favorites in grouped views.
pub const FAVORITES_GROUP: &str = "Favorites";

/// Group name for profiles without a group label.
pub const OTHER_GROUP: &str = "Other";

/// Region used when neither the profile nor the import source names one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "BULLPEN_HOME";

/// Data directory name under the platform data dir.
pub const DATA_DIR: &str = "bullpen";

/// Optional configuration file name inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "BULLPEN_LOG";

/// Environment variable holding the unlock password for non-interactive use.
pub const PASSWORD_ENV: &str = "BULLPEN_PASSWORD";
