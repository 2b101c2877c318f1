//! Document persistence.
//!
//! The vault reads and writes one serialized document through a small
//! key-value trait so the backing medium can change without touching vault
//! logic.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Remote { /* ... */ }
//!
//! impl Store for Remote {
//!     fn get(&self, key: &str) -> Result<Option<String>> {
//!         // Fetch the whole value
//!     }
//!     fn set(&self, key: &str, value: &str) -> Result<()> {
//!         // Replace the whole value
//!     }
//! }
//! ```

use crate::error::Result;

mod fs;
mod memory;

pub use fs::Filesystem;
pub use memory::Memory;

/// Key-value persistence trait.
///
/// Values are whole documents. Backends are not expected to support partial
/// updates or transactions; two writers racing on the same key resolve as
/// last-write-wins.
pub trait Store {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
