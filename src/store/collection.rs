//! Typed collection handles over the key-value backend.
//!
//! Every mutation follows the same discipline: read the whole
//! snapshot, modify it in memory, persist the whole snapshot before
//! returning. Reads are defensive: a snapshot that fails to decode
//! degrades to an empty collection instead of failing the caller.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::{Consultant, Inquiry, Project};
use crate::observability::{Event, Logger};

use super::backend::KvBackend;
use super::errors::{StoreError, StoreResult};
use super::KEY_PREFIX;

/// An entity that lives in a named collection, keyed by id.
pub trait Document: Serialize + DeserializeOwned + Clone {
    /// Collection name, also the persistence key suffix
    const COLLECTION: &'static str;

    /// Unique id of this record
    fn id(&self) -> &str;
}

impl Document for Consultant {
    const COLLECTION: &'static str = "consultants";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Document for Project {
    const COLLECTION: &'static str = "projects";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Document for Inquiry {
    const COLLECTION: &'static str = "inquiries";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Handle to one named collection.
pub struct Collection<'a, T: Document> {
    backend: &'a dyn KvBackend,
    _marker: PhantomData<T>,
}

impl<'a, T: Document> Collection<'a, T> {
    pub(crate) fn new(backend: &'a dyn KvBackend) -> Self {
        Self {
            backend,
            _marker: PhantomData,
        }
    }

    fn key() -> String {
        format!("{}{}", KEY_PREFIX, T::COLLECTION)
    }

    /// All records in insertion order. Empty if never seeded; empty
    /// (with a logged warning) if the persisted snapshot is corrupt.
    pub fn list(&self) -> Vec<T> {
        let key = Self::key();
        let raw = match self.backend.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                Logger::warn(
                    Event::CollectionCorrupt.as_str(),
                    &[("collection", T::COLLECTION), ("reason", &e.to_string())],
                );
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                Logger::warn(
                    Event::CollectionCorrupt.as_str(),
                    &[("collection", T::COLLECTION), ("reason", &e.to_string())],
                );
                Vec::new()
            }
        }
    }

    /// The record with the given id, if present.
    pub fn get(&self, id: &str) -> Option<T> {
        self.list().into_iter().find(|item| item.id() == id)
    }

    /// Append a record. An id that already exists is rejected.
    pub fn add(&self, item: T) -> StoreResult<()> {
        let mut items = self.list();
        if items.iter().any(|existing| existing.id() == item.id()) {
            return Err(StoreError::DuplicateId {
                collection: T::COLLECTION,
                id: item.id().to_string(),
            });
        }
        items.push(item);
        self.persist(&items)
    }

    /// Replace the record whose id matches. Silent no-op when no record
    /// matches, so an admin edit against a stale reference never
    /// crashes.
    pub fn update(&self, updated: T) -> StoreResult<()> {
        let items: Vec<T> = self
            .list()
            .into_iter()
            .map(|item| {
                if item.id() == updated.id() {
                    updated.clone()
                } else {
                    item
                }
            })
            .collect();
        self.persist(&items)
    }

    /// Delete the record with the given id; no-op if absent.
    pub fn remove(&self, id: &str) -> StoreResult<()> {
        let mut items = self.list();
        items.retain(|item| item.id() != id);
        self.persist(&items)
    }

    /// Replace the entire collection in one snapshot write. Seeding
    /// uses this; everything else goes through add/update/remove.
    pub fn replace_all(&self, items: &[T]) -> StoreResult<()> {
        self.persist(items)
    }

    fn persist(&self, items: &[T]) -> StoreResult<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(&Self::key(), &raw)?;
        Logger::trace(
            Event::CollectionWrite.as_str(),
            &[
                ("collection", T::COLLECTION),
                ("count", &items.len().to_string()),
            ],
        );
        Ok(())
    }
}
