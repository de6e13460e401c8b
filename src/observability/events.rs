//! Observable events
//!
//! Every log line names one of these events. Each event has a fixed severity.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded
    ConfigLoaded,
    /// Configured CORS origin is not a valid header value and was skipped
    CorsOriginRejected,
    /// HTTP listener about to bind
    ServerStarting,
    /// HTTP server could not bind or stopped with an error
    ServerFailed,
    /// Status lookup answered
    OrderStatusServed,
    /// Status lookup failed below the HTTP layer
    OrderStatusFailed,
    /// CLI command failed; the process exits
    CommandFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CorsOriginRejected => "CORS_ORIGIN_REJECTED",
            Event::ServerStarting => "SERVER_STARTING",
            Event::ServerFailed => "SERVER_FAILED",
            Event::OrderStatusServed => "ORDER_STATUS_SERVED",
            Event::OrderStatusFailed => "ORDER_STATUS_FAILED",
            Event::CommandFailed => "COMMAND_FAILED",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::ConfigLoaded | Event::ServerStarting | Event::OrderStatusServed => {
                Severity::Info
            }
            Event::CorsOriginRejected => Severity::Warn,
            Event::ServerFailed | Event::OrderStatusFailed => Severity::Error,
            Event::CommandFailed => Severity::Fatal,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
