//! The primary interface for bullpen operations.
//!
//! Vault owns the storage backend and the unlock state, and provides all
//! profile, credential, and transfer operations. Every mutation reads the
//! whole document, changes it, and writes it back.

mod lock;
mod profiles;
mod transfer;

use tracing::debug;

use crate::core::document::Document;
use crate::core::store::Store;
use crate::error::Result;

/// The primary interface for bullpen operations.
pub struct Vault {
    store: Box<dyn Store>,
    unlocked: bool,
}

impl std::fmt::Debug for Vault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault")
            .field("unlocked", &self.unlocked)
            .finish_non_exhaustive()
    }
}

impl Vault {
    /// Open the vault kept in `store`.
    ///
    /// The first open creates the document and its local key. A vault with
    /// the unlock password enabled opens locked.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the document cannot be read, parsed, or
    /// initialized.
    pub fn open(store: impl Store + 'static) -> Result<Self> {
        let doc = Document::load_or_init(&store)?;
        debug!(
            profiles = doc.profiles.len(),
            locked = doc.vault_unlock_enabled,
            "vault opened"
        );

        Ok(Self {
            store: Box::new(store),
            unlocked: !doc.vault_unlock_enabled,
        })
    }

    /// Fresh copy of the stored document.
    pub(super) fn document(&self) -> Result<Document> {
        Document::load_or_init(self.store.as_ref())
    }

    /// Read, modify, and write back the document.
    ///
    /// Nothing is written when `f` fails.
    pub(super) fn mutate<T>(&self, f: impl FnOnce(&mut Document) -> Result<T>) -> Result<T> {
        let mut doc = self.document()?;
        let out = f(&mut doc)?;
        doc.save(self.store.as_ref())?;
        Ok(out)
    }
}
