//! Command-line interface: the thin presentation boundary over the
//! directory engine.

pub mod args;
mod commands;
mod errors;
mod io;

pub use args::Cli;
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
