//! CLI input and output helpers.
//!
//! Results are single-line JSON on stdout; errors are single-line JSON
//! on stderr. One line per invocation, so output stays scriptable.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Write a result document to stdout.
pub fn write_json(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", value)?;
    Ok(())
}

/// Write an error document to stderr.
pub fn write_error(value: &Value) -> CliResult<()> {
    let mut stderr = io::stderr();
    writeln!(stderr, "{}", value)?;
    Ok(())
}

/// Read and decode a JSON document from a file.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let raw = fs::read_to_string(path).map_err(|e| CliError::read_input(path, e))?;
    serde_json::from_str(&raw).map_err(|e| CliError::parse_input(path, e))
}
