//! Collection store error types.

use std::io;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the collection store and its backends.
///
/// Read-side corruption is deliberately NOT represented here: a
/// snapshot that fails to decode degrades to an empty collection so
/// unrelated features stay available.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Persisting a collection snapshot failed
    #[error("failed to persist snapshot at '{key}': {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Reading a persisted value failed for a reason other than absence
    #[error("failed to read key '{key}': {source}")]
    ReadFailed {
        key: String,
        #[source]
        source: io::Error,
    },

    /// An `add` was attempted with an id that already exists
    #[error("duplicate id '{id}' in collection '{collection}'")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },

    /// Encoding a collection snapshot failed
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}
