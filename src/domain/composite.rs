use rust_decimal::Decimal;
use tracing::{instrument, trace};

use crate::domain::items::OrderItem;
use crate::domain::orderable::{ItemId, Orderable};

/// Owned, ordered collection of order participants with aggregation.
///
/// Used by every participant that can hold sub-items. Children are owned
/// exclusively, so the structure is always a tree; there are no parent
/// back-references.
#[derive(Debug, Clone, Default)]
pub struct Composite {
    items: Vec<OrderItem>,
}

impl Composite {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends `item` and returns its id. No duplicate check.
    #[instrument(level = "trace", skip_all)]
    pub fn add_item(&mut self, item: impl Into<OrderItem>) -> ItemId {
        let item = item.into();
        let id = item.id();
        trace!(%id, title = %item.title(), "attach");
        self.items.push(item);
        id
    }

    /// Removes the first direct child with the given id.
    ///
    /// Stops after the first match and hands the removed item back to the
    /// caller. Unknown ids are a no-op.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_item(&mut self, id: ItemId) -> Option<OrderItem> {
        let pos = self.items.iter().position(|item| item.id() == id)?;
        trace!(%id, pos, "detach");
        Some(self.items.remove(pos))
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderItem> {
        self.items.iter()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the children's counts.
    pub fn count(&self) -> usize {
        self.items.iter().map(Orderable::count).sum()
    }

    /// Sum of the children's amounts, in insertion order.
    pub fn amount(&self) -> Decimal {
        self.items.iter().map(Orderable::amount).sum()
    }

    /// Depth-first lookup of a descendant.
    pub fn find(&self, id: ItemId) -> Option<&OrderItem> {
        for item in &self.items {
            if item.id() == id {
                return Some(item);
            }
            if let Some(found) = item.composite().and_then(|c| c.find(id)) {
                return Some(found);
            }
        }
        None
    }

    /// Depth-first mutable lookup of a descendant.
    pub fn find_mut(&mut self, id: ItemId) -> Option<&mut OrderItem> {
        for item in self.items.iter_mut() {
            if item.id() == id {
                return Some(item);
            }
            if let Some(found) = item.composite_mut().and_then(|c| c.find_mut(id)) {
                return Some(found);
            }
        }
        None
    }

    /// Deep copy where every descendant gets a fresh id.
    pub(crate) fn duplicate(&self) -> Self {
        Self {
            items: self.items.iter().map(OrderItem::duplicate).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Composite {
    type Item = &'a OrderItem;
    type IntoIter = std::slice::Iter<'a, OrderItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
