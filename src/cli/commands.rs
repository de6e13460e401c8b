//! CLI command implementations
//!
//! `start` wires the DAO, service and HTTP server together and serves until
//! the process is stopped. `lookup` runs one status lookup through the same
//! chain and prints the result.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use crate::dao::{OrderDao, OrderRepository};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, Event};
use crate::service::OrderService;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Start { config, host, port } => {
            let config = resolve_config(config.as_deref(), host, port)?;
            start(config)
        }
        Command::Lookup { id } => lookup(id),
    }
}

/// Load the server configuration from a JSON file
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
}

/// Build the effective configuration: file (or defaults), then overrides
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    config.validate().map_err(CliError::config_error)?;

    let port_str = config.port.to_string();
    log_event(
        Event::ConfigLoaded,
        &[("host", config.host.as_str()), ("port", port_str.as_str())],
    );

    Ok(config)
}

/// Start the HTTP server and block until it exits
pub fn start(config: HttpServerConfig) -> CliResult<()> {
    let service = OrderService::new(OrderDao::new());
    let server = HttpServer::with_service(config, service);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Look up one order status and print it to stdout
pub fn lookup(id: i64) -> CliResult<()> {
    let service = OrderService::new(OrderDao::new());
    let data = lookup_status(&service, id)?;
    write_response(data)
}

/// Run a lookup and shape the result for output
pub fn lookup_status<R: OrderRepository>(service: &OrderService<R>, id: i64) -> CliResult<Value> {
    let status = service.get_status(id)?;
    Ok(json!({ "id": id, "status": status }))
}
