//! Domain layer: the composite order model
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod composite;
pub mod error;
pub mod format;
pub mod items;
pub mod line;
pub mod menu;
pub mod orderable;
pub mod priced;
pub mod tree;

pub use composite::Composite;
pub use error::{DomainError, DomainResult};
pub use format::PriceFormat;
pub use items::{Addin, Coffee, Order, OrderItem, ORDER_HEADER};
pub use line::OrderLine;
pub use menu::{ItemKind, Menu, MenuEntry};
pub use orderable::{ItemId, Orderable};
pub use priced::PricedItem;
pub use tree::OrderTree;
