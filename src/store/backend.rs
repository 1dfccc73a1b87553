//! # Key-Value Backend Trait
//!
//! The persistence seam. Values are whole-collection snapshots; keys
//! are namespaced strings. Tests substitute [`MemoryBackend`] without
//! touching call sites.
//!
//! [`MemoryBackend`]: super::MemoryBackend

use super::errors::StoreResult;

/// Backend trait for durable key-value persistence
pub trait KvBackend: std::fmt::Debug {
    /// Read the value at key, `None` if the key was never written
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write the value at key, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete the key; no-op if absent
    fn remove(&self, key: &str) -> StoreResult<()>;
}
