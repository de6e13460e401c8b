//! # HTTP Server
//!
//! Assembles the route table once at startup and serves it with axum.
//! Components are wired by hand: the DAO goes into the service, the service
//! into the order routes.

use std::io;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use super::order_routes::order_routes;
use crate::dao::{OrderDao, OrderRepository};
use crate::observability::{log_event, Event};
use crate::service::OrderService;

/// HTTP server for the order-status API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a server backed by the stub DAO
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_service(config, OrderService::new(OrderDao::new()))
    }

    /// Create a server around an already-built status service
    pub fn with_service<R: OrderRepository + 'static>(
        config: HttpServerConfig,
        service: OrderService<R>,
    ) -> Self {
        let router = Self::build_router(&config, service);
        Self { config, router }
    }

    fn build_router<R: OrderRepository + 'static>(
        config: &HttpServerConfig,
        service: OrderService<R>,
    ) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let mut origins: Vec<HeaderValue> = Vec::with_capacity(config.cors_origins.len());
            for origin in &config.cors_origins {
                match origin.parse::<HeaderValue>() {
                    Ok(value) => origins.push(value),
                    Err(_) => log_event(Event::CorsOriginRejected, &[("origin", origin.as_str())]),
                }
            }

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(order_routes(service))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listener; hostnames are resolved by tokio
    pub async fn bind(&self) -> io::Result<TcpListener> {
        TcpListener::bind(self.config.socket_addr()).await
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> io::Result<()> {
        let addr = self.config.socket_addr();
        log_event(Event::ServerStarting, &[("addr", addr.as_str())]);

        let listener = match self.bind().await {
            Ok(listener) => listener,
            Err(e) => {
                log_event(
                    Event::ServerFailed,
                    &[("addr", addr.as_str()), ("error", e.to_string().as_str())],
                );
                return Err(e);
            }
        };

        if let Err(e) = axum::serve(listener, self.router).await {
            log_event(
                Event::ServerFailed,
                &[("addr", addr.as_str()), ("error", e.to_string().as_str())],
            );
            return Err(e);
        }

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
