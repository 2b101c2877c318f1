//! In-memory storage, for tests and embedding.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::Store;
use crate::error::Result;

/// In-memory key-value store.
///
/// Clones share the same map, which lets tests open several vaults over one
/// "disk".
#[derive(Debug, Clone, Default)]
pub struct Memory {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for Memory {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
