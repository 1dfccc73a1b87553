//! # In-Memory Backend
//!
//! Ephemeral backend for tests and throwaway sessions.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::backend::KvBackend;
use super::errors::StoreResult;

/// In-memory key-value backend
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a raw value, bypassing the store. Used by tests to
    /// simulate corrupt or legacy snapshots.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Raw value at key, if any. Used by tests for byte-identity checks.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
