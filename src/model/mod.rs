//! Domain model

mod order;

pub use order::{Order, DESCRIPTION_PREFIX, STATUS_CREATED};
