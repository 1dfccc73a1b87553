//! CLI-specific error types.
//!
//! Everything a command can fail with, flattened to one type so the
//! entry point prints a single line and exits non-zero.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::seed::SeedError;
use crate::store::StoreError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// An input document could not be read
    #[error("failed to read '{path}': {source}")]
    ReadInput {
        path: String,
        #[source]
        source: io::Error,
    },

    /// An input document was not valid JSON for the expected shape
    #[error("invalid document '{path}': {source}")]
    ParseInput {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A form failed validation; details were already written out
    #[error("validation failed on {0} field(s)")]
    Validation(usize),

    /// The admin passcode was rejected
    #[error("passcode rejected")]
    PasscodeRejected,

    /// Seeding failed
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// A store operation failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Writing a result to stdout/stderr failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Encoding a result document failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Read failure with the offending path attached.
    pub fn read_input(path: &Path, source: io::Error) -> Self {
        Self::ReadInput {
            path: path.display().to_string(),
            source,
        }
    }

    /// Parse failure with the offending path attached.
    pub fn parse_input(path: &Path, source: serde_json::Error) -> Self {
        Self::ParseInput {
            path: path.display().to_string(),
            source,
        }
    }
}
