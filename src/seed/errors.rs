//! Seeding error types.

use std::io;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for seeding operations
pub type SeedResult<T> = Result<T, SeedError>;

/// Errors raised while seeding the store from fixture data.
///
/// Any of these leaves previously persisted state untouched: both
/// fixture documents are loaded and decoded before the first write.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A fixture document could not be loaded from its source
    #[error("fixture '{name}' could not be loaded: {source}")]
    FetchFailed {
        name: String,
        #[source]
        source: io::Error,
    },

    /// A fixture document loaded but did not decode as entity records
    #[error("fixture '{name}' is malformed: {source}")]
    Malformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the seeded collections failed
    #[error(transparent)]
    Store(#[from] StoreError),
}
