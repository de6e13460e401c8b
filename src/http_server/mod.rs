//! # Order-Status HTTP Server
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/orders/:id` - Order status as plain text

pub mod config;
pub mod observability_routes;
pub mod order_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
