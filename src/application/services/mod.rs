//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod order;

pub use order::{OrderService, OrderSummary};
