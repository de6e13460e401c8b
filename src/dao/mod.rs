//! # Order Data Access
//!
//! `OrderRepository` is the lookup seam used by the status service.
//! `OrderDao` is the in-memory stub behind it: it fabricates a record for
//! any id and never touches storage.

use crate::errors::OrderResult;
use crate::model::{Order, STATUS_CREATED};

/// Order lookup trait
pub trait OrderRepository: Send + Sync {
    /// Fetch the order with the given id
    fn fetch_order(&self, id: i64) -> OrderResult<Order>;
}

/// Stub repository that fabricates orders
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderDao;

impl OrderDao {
    pub fn new() -> Self {
        Self
    }
}

impl OrderRepository for OrderDao {
    fn fetch_order(&self, id: i64) -> OrderResult<Order> {
        Ok(Order::new(id, STATUS_CREATED, Order::describe(id)))
    }
}
