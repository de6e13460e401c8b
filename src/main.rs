//! order-status CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, logs a FATAL line on
//! failure and exits non-zero.

use order_status::cli;
use order_status::observability::{log_event, Event};

fn main() {
    if let Err(e) = cli::run() {
        log_event(
            Event::CommandFailed,
            &[("code", e.code().code()), ("message", e.message())],
        );
        std::process::exit(1);
    }
}
