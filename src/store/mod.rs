//! Collection store: durable CRUD over three named collections.
//!
//! The store is a thin typed layer over an injected [`KvBackend`].
//! Each collection is persisted as one JSON snapshot under a
//! namespaced key; every mutation rewrites the whole snapshot
//! synchronously before returning.

mod backend;
mod collection;
mod errors;
mod local;
mod memory;

pub use backend::KvBackend;
pub use collection::{Collection, Document};
pub use errors::{StoreError, StoreResult};
pub use local::DirBackend;
pub use memory::MemoryBackend;

use crate::model::{Consultant, Inquiry, Project};

/// Namespace prefix for every persisted key
pub const KEY_PREFIX: &str = "consultbridge:";

/// Key holding the dataset version marker
pub const VERSION_KEY: &str = "consultbridge:version";

/// Typed facade over a key-value backend.
#[derive(Debug)]
pub struct Store<B: KvBackend> {
    backend: B,
}

impl<B: KvBackend> Store<B> {
    /// Wrap a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Handle to the consultants collection.
    pub fn consultants(&self) -> Collection<'_, Consultant> {
        Collection::new(&self.backend)
    }

    /// Handle to the projects collection.
    pub fn projects(&self) -> Collection<'_, Project> {
        Collection::new(&self.backend)
    }

    /// Handle to the inquiries collection.
    pub fn inquiries(&self) -> Collection<'_, Inquiry> {
        Collection::new(&self.backend)
    }

    /// The persisted dataset version marker, if any.
    pub fn version_marker(&self) -> Option<String> {
        self.backend.get(VERSION_KEY).ok().flatten()
    }

    /// Persist the dataset version marker.
    pub fn set_version_marker(&self, version: &str) -> StoreResult<()> {
        self.backend.set(VERSION_KEY, version)
    }

    /// The underlying backend. Tests use this for raw snapshot access.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
