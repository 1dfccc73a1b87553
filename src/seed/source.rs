//! # Fixture Source Trait
//!
//! Where canonical fixture documents come from. The engine only ever
//! asks for a named document; the deployment decides whether that is a
//! directory on disk or something preloaded in memory.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use super::errors::{SeedError, SeedResult};

/// Source of named fixture documents
pub trait FixtureSource {
    /// Load the raw bytes of the named fixture document
    fn load(&self, name: &str) -> SeedResult<Vec<u8>>;
}

/// Fixture source reading documents relative to a base directory
#[derive(Debug)]
pub struct DirFixtureSource {
    base: PathBuf,
}

impl DirFixtureSource {
    /// Create a source rooted at the given directory.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl FixtureSource for DirFixtureSource {
    fn load(&self, name: &str) -> SeedResult<Vec<u8>> {
        fs::read(self.base.join(name)).map_err(|e| SeedError::FetchFailed {
            name: name.to_string(),
            source: e,
        })
    }
}

/// Fixture source serving preloaded documents. Tests use this to seed
/// without touching the filesystem.
#[derive(Debug, Default)]
pub struct StaticFixtureSource {
    documents: HashMap<String, Vec<u8>>,
}

impl StaticFixtureSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document under a name.
    pub fn with_document(mut self, name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.documents.insert(name.to_string(), bytes.into());
        self
    }
}

impl FixtureSource for StaticFixtureSource {
    fn load(&self, name: &str) -> SeedResult<Vec<u8>> {
        self.documents
            .get(name)
            .cloned()
            .ok_or_else(|| SeedError::FetchFailed {
                name: name.to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no such fixture document",
                ),
            })
    }
}
