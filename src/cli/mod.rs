//! CLI module for order-status
//!
//! Provides command-line interface for:
//! - start: Serve the HTTP API
//! - lookup: One-shot status lookup

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{load_config, lookup, lookup_status, resolve_config, run, run_command, start};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_response, write_response_to};
