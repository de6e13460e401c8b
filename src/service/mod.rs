//! # Order Status Service
//!
//! Delegates lookups to an `OrderRepository` and extracts the status field.

use std::sync::Arc;

use crate::dao::OrderRepository;
use crate::errors::OrderResult;

/// Status lookup service
pub struct OrderService<R: OrderRepository> {
    dao: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(dao: R) -> Self {
        Self { dao: Arc::new(dao) }
    }

    /// Return the status of the order with the given id.
    ///
    /// Repository failures are returned unchanged.
    pub fn get_status(&self, id: i64) -> OrderResult<String> {
        let order = self.dao.fetch_order(id)?;
        Ok(order.status)
    }
}

impl<R: OrderRepository> Clone for OrderService<R> {
    fn clone(&self) -> Self {
        Self {
            dao: Arc::clone(&self.dao),
        }
    }
}
