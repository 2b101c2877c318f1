//! Bullpen - a local vault for cloud account profiles.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Initialize the data directory
//! │   ├── profiles      # Profile CRUD, listing, sign-in URLs
//! │   ├── credential    # Store and read sign-in credentials
//! │   ├── transfer      # Import/export
//! │   ├── lock          # Unlock password gate
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── cipher/       # PBKDF2 + AES-256-GCM blobs, password hashing
//!     ├── store/        # Document storage backends
//!     │   ├── fs        # One file per key in the data directory
//!     │   └── memory    # In-memory, for tests and embedding
//!     ├── vault/        # Profile, credential, lock, transfer operations
//!     ├── transfer/     # JSON, CSV, provider config formats
//!     ├── tokenize      # CSV and INI tokenizers
//!     ├── view          # Search and display grouping
//!     ├── console       # Sign-in handoff URLs
//!     ├── session       # Tab to profile session registry
//!     └── message       # Request dispatch for extension surfaces
//! ```
//!
//! # Features
//!
//! - Credential secrets encrypted at rest (PBKDF2-HMAC-SHA256, AES-256-GCM)
//! - Credential-pair, federated SSO, and delegated role profiles
//! - Optional unlock password gating secret access
//! - JSON, CSV, and provider CLI config import; JSON and CSV export
//!
//! # Example
//!
//! ```
//! use bullpen::core::domain::NewProfile;
//! use bullpen::core::store::Memory;
//! use bullpen::core::vault::Vault;
//!
//! let vault = Vault::open(Memory::new())?;
//! let profile = vault.create(NewProfile::new("Production", "123456789012"))?;
//! assert_eq!(vault.list()?.len(), 1);
//! assert_eq!(profile.default_region, "us-east-1");
//! # Ok::<(), bullpen::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
