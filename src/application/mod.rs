//! Application layer: services and use cases
//!
//! This layer turns menu keys and settings into domain orders.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{OrderService, OrderSummary};
