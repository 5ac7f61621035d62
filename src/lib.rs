//! Composite coffee-shop orders.
//!
//! An [`Order`](domain::Order) holds [`Coffee`](domain::Coffee) items, a
//! coffee holds [`Addin`](domain::Addin) items, and every participant answers
//! `title()`, `amount()` and `count()` through the
//! [`Orderable`](domain::Orderable) trait.
//!
//! ```
//! use brewtree::domain::{Addin, Coffee, Order, Orderable};
//! use rust_decimal::Decimal;
//!
//! let coffee = Coffee::new("Turkish Coffee", Decimal::new(5, 0))
//!     .with(Addin::new("Sugar", Decimal::new(2, 1)))
//!     .with(Addin::new("Milk", Decimal::new(7, 1)));
//! let order = Order::new().with(coffee);
//!
//! assert_eq!(order.amount().to_string(), "5.9");
//! assert_eq!(order.count(), 3);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
