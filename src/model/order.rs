//! Order value record
//!
//! Orders are fabricated on demand and never persisted. A record lives for
//! exactly one lookup and is dropped once its status has been read.

use serde::{Deserialize, Serialize};

/// Status assigned to every fabricated order.
pub const STATUS_CREATED: &str = "CREATED";

/// Prefix of the generated description; the order id follows it verbatim.
pub const DESCRIPTION_PREFIX: &str = "Order for customer ID: ";

/// A customer order as seen by the status lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Caller-supplied identifier, not validated for existence
    pub id: i64,
    /// Current order status
    pub status: String,
    /// Human-readable label
    pub description: String,
}

impl Order {
    pub fn new(id: i64, status: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            status: status.into(),
            description: description.into(),
        }
    }

    /// Build the description label for an order id.
    pub fn describe(id: i64) -> String {
        format!("{}{}", DESCRIPTION_PREFIX, id)
    }
}
