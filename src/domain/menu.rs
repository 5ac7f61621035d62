//! Catalog of named coffees and add-ins.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::items::{Addin, Coffee};
use crate::domain::priced::PricedItem;

pub const TURKISH_COFFEE: &str = "turkish";
pub const FRANCE_COFFEE: &str = "france";
pub const SUGAR: &str = "sugar";
pub const MILK: &str = "milk";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Coffee,
    Addin,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Coffee => write!(f, "coffee"),
            ItemKind::Addin => write!(f, "addin"),
        }
    }
}

/// One orderable line of the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    pub price: Decimal,
    pub kind: ItemKind,
}

impl MenuEntry {
    pub fn coffee(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            kind: ItemKind::Coffee,
        }
    }

    pub fn addin(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            kind: ItemKind::Addin,
        }
    }

    fn priced(&self) -> PricedItem {
        PricedItem::new(self.name.clone(), self.price)
    }
}

/// Menu keyed by lowercase short names such as `turkish` or `milk`.
///
/// Every lookup creates a new item, so ordering the same key twice yields
/// two independent participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Menu {
    entries: BTreeMap<String, MenuEntry>,
}

impl Default for Menu {
    fn default() -> Self {
        let mut menu = Self::empty();
        menu.insert(
            TURKISH_COFFEE,
            MenuEntry::coffee("Turkish Coffee", Decimal::new(5, 0)),
        );
        menu.insert(
            FRANCE_COFFEE,
            MenuEntry::coffee("France Coffee", Decimal::new(7, 0)),
        );
        menu.insert(SUGAR, MenuEntry::addin("Sugar", Decimal::new(2, 1)));
        menu.insert(MILK, MenuEntry::addin("Milk", Decimal::new(7, 1)));
        menu
    }
}

impl Menu {
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Adds or replaces an entry, returning the previous one.
    pub fn insert(&mut self, key: &str, entry: MenuEntry) -> Option<MenuEntry> {
        self.entries.insert(normalize(key), entry)
    }

    pub fn remove(&mut self, key: &str) -> Option<MenuEntry> {
        self.entries.remove(&normalize(key))
    }

    pub fn get(&self, key: &str) -> Option<&MenuEntry> {
        self.entries.get(&normalize(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MenuEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn coffee(&self, key: &str) -> DomainResult<Coffee> {
        let entry = self.lookup(key, ItemKind::Coffee)?;
        Ok(Coffee::from(entry.priced()))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn addin(&self, key: &str) -> DomainResult<Addin> {
        let entry = self.lookup(key, ItemKind::Addin)?;
        Ok(Addin::from(entry.priced()))
    }

    fn lookup(&self, key: &str, expected: ItemKind) -> DomainResult<&MenuEntry> {
        let entry = self
            .get(key)
            .ok_or_else(|| DomainError::UnknownMenuItem(key.to_string()))?;
        if entry.kind != expected {
            return Err(DomainError::WrongKind {
                key: key.to_string(),
                expected,
            });
        }
        Ok(entry)
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}
