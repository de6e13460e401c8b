//! Observability for the order-status service
//!
//! Structured JSON logging of typed lifecycle and request events.
//!
//! ```ignore
//! use order_status::observability::{log_event, Event};
//!
//! log_event(Event::OrderStatusServed, &[("order_id", "42"), ("status", "CREATED")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event with fields at the event's severity
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

/// Render the line `log_event` would write
#[cfg(test)]
pub fn render_event(event: Event, fields: &[(&str, &str)]) -> String {
    Logger::render(event.severity(), event.as_str(), fields)
}
