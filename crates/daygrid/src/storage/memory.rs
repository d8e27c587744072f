//! In-memory persistence adapter.

use std::collections::HashMap;
use std::sync::RwLock;

use daygrid_core::storage::{PersistenceAdapter, Result, StorageError};

/// In-memory key-value store for tests and ephemeral sessions.
///
/// Values are lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a single key/value pair.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        let mut values = store.values.write().expect("Lock poisoned");
        values.insert(key.into(), value.into());
        drop(values);
        store
    }
}

impl PersistenceAdapter for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().map_err(|_| StorageError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().map_err(|_| StorageError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
