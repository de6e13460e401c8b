//! order-status - A minimal order-status lookup web service
//!
//! `GET /orders/:id` → `OrderService` → `OrderDao` (fabricated record).

pub mod cli;
pub mod dao;
pub mod errors;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod service;
