//! CLI argument definitions using clap
//!
//! Commands:
//! - order-status start [--config <path>] [--host <host>] [--port <port>]
//! - order-status lookup --id <id>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// order-status - A minimal order-status lookup service
#[derive(Parser, Debug)]
#[command(name = "order-status")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Start {
        /// Path to a JSON configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the bind port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Look up a single order status and exit
    Lookup {
        /// Order identifier
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_with_overrides() {
        let cli = Cli::try_parse_from(["order-status", "start", "--port", "9000"]).unwrap();
        match cli.command {
            Command::Start { config, host, port } => {
                assert!(config.is_none());
                assert!(host.is_none());
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_lookup_negative_id() {
        let cli = Cli::try_parse_from(["order-status", "lookup", "--id", "-4"]).unwrap();
        match cli.command {
            Command::Lookup { id } => assert_eq!(id, -4),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_lookup_rejects_text_id() {
        assert!(Cli::try_parse_from(["order-status", "lookup", "--id", "abc"]).is_err());
    }
}
