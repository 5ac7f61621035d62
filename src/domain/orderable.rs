//! The capability shared by every order participant.

use std::fmt;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::items::OrderItem;

/// Identity of an order participant.
///
/// Two items with the same name and price are still different items;
/// removal and lookup go through this id, never through value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Anything that can take part in an order.
///
/// The three queries are pure and infallible. Composites answer them by
/// aggregating over their children, leaves answer from their own state.
pub trait Orderable {
    fn id(&self) -> ItemId;

    /// Human readable description, including children where relevant.
    fn title(&self) -> String;

    /// Price of this participant including everything below it.
    fn amount(&self) -> Decimal;

    /// Number of countable items, this participant included if it counts itself.
    fn count(&self) -> usize;

    /// Direct children in insertion order. Empty for leaves.
    fn children(&self) -> &[OrderItem];

    /// Short node label used when rendering trees.
    fn label(&self) -> String {
        self.title()
    }
}
