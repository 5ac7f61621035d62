//! Concrete order participants: add-ins, coffees and orders.

use itertools::Itertools;
use rust_decimal::Decimal;

use crate::domain::composite::Composite;
use crate::domain::format::PriceFormat;
use crate::domain::orderable::{ItemId, Orderable};
use crate::domain::priced::PricedItem;

/// Leaf item such as sugar or milk.
#[derive(Debug, Clone)]
pub struct Addin {
    id: ItemId,
    item: PricedItem,
}

impl Addin {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self::from(PricedItem::new(name, price))
    }

    pub fn name(&self) -> &str {
        self.item.name()
    }

    pub fn price(&self) -> Decimal {
        self.item.price()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.item.set_name(name);
        self
    }

    pub fn set_price(&mut self, price: Decimal) -> &mut Self {
        self.item.set_price(price);
        self
    }

    /// Independent copy with a fresh id.
    pub fn duplicate(&self) -> Self {
        Self::from(self.item.clone())
    }
}

impl From<PricedItem> for Addin {
    fn from(item: PricedItem) -> Self {
        Self {
            id: ItemId::new(),
            item,
        }
    }
}

impl Orderable for Addin {
    fn id(&self) -> ItemId {
        self.id
    }

    fn title(&self) -> String {
        self.item.name().to_string()
    }

    fn amount(&self) -> Decimal {
        self.item.price()
    }

    fn count(&self) -> usize {
        1
    }

    fn children(&self) -> &[OrderItem] {
        &[]
    }
}

/// Priced item that also carries add-ins.
#[derive(Debug, Clone)]
pub struct Coffee {
    id: ItemId,
    item: PricedItem,
    items: Composite,
}

impl Coffee {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self::from(PricedItem::new(name, price))
    }

    pub fn name(&self) -> &str {
        self.item.name()
    }

    pub fn price(&self) -> Decimal {
        self.item.price()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.item.set_name(name);
        self
    }

    pub fn set_price(&mut self, price: Decimal) -> &mut Self {
        self.item.set_price(price);
        self
    }

    pub fn add_item(&mut self, item: impl Into<OrderItem>) -> ItemId {
        self.items.add_item(item)
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<OrderItem> {
        self.items.remove_item(id)
    }

    /// Builder-style variant of [`Coffee::add_item`].
    pub fn with(mut self, item: impl Into<OrderItem>) -> Self {
        self.items.add_item(item);
        self
    }

    pub fn items(&self) -> &Composite {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Composite {
        &mut self.items
    }

    /// Independent deep copy; the coffee and every add-in get fresh ids.
    pub fn duplicate(&self) -> Self {
        Self {
            id: ItemId::new(),
            item: self.item.clone(),
            items: self.items.duplicate(),
        }
    }
}

impl From<PricedItem> for Coffee {
    fn from(item: PricedItem) -> Self {
        Self {
            id: ItemId::new(),
            item,
            items: Composite::new(),
        }
    }
}

impl Orderable for Coffee {
    fn id(&self) -> ItemId {
        self.id
    }

    fn title(&self) -> String {
        if self.items.is_empty() {
            return self.item.name().to_string();
        }
        format!(
            "{} with {}",
            self.item.name(),
            self.items.iter().map(Orderable::title).join(" and ")
        )
    }

    fn amount(&self) -> Decimal {
        self.item.price() + self.items.amount()
    }

    fn count(&self) -> usize {
        1 + self.items.count()
    }

    fn children(&self) -> &[OrderItem] {
        self.items.items()
    }

    fn label(&self) -> String {
        self.item.name().to_string()
    }
}

pub const ORDER_HEADER: &str = "Order of";

/// Unpriced container of order participants.
#[derive(Debug, Clone, Default)]
pub struct Order {
    id: ItemId,
    items: Composite,
    format: PriceFormat,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(format: PriceFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn format(&self) -> &PriceFormat {
        &self.format
    }

    pub fn set_format(&mut self, format: PriceFormat) -> &mut Self {
        self.format = format;
        self
    }

    pub fn add_item(&mut self, item: impl Into<OrderItem>) -> ItemId {
        self.items.add_item(item)
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<OrderItem> {
        self.items.remove_item(id)
    }

    pub fn with(mut self, item: impl Into<OrderItem>) -> Self {
        self.items.add_item(item);
        self
    }

    pub fn items(&self) -> &Composite {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Composite {
        &mut self.items
    }

    /// Finds any descendant, e.g. a coffee to attach another add-in to.
    pub fn find_mut(&mut self, id: ItemId) -> Option<&mut OrderItem> {
        self.items.find_mut(id)
    }

    pub fn duplicate(&self) -> Self {
        Self {
            id: ItemId::new(),
            items: self.items.duplicate(),
            format: self.format.clone(),
        }
    }
}

impl Orderable for Order {
    fn id(&self) -> ItemId {
        self.id
    }

    fn title(&self) -> String {
        let mut title = String::from(ORDER_HEADER);
        for item in &self.items {
            title.push_str(&format!(
                "\n  - {} : {}",
                line_title(item),
                self.format.render(item.amount())
            ));
        }
        title
    }

    fn amount(&self) -> Decimal {
        self.items.amount()
    }

    fn count(&self) -> usize {
        self.items.count()
    }

    fn children(&self) -> &[OrderItem] {
        self.items.items()
    }

    fn label(&self) -> String {
        "Order".to_string()
    }
}

/// A nested order is listed by its label so each title line stays one item.
fn line_title(item: &OrderItem) -> String {
    match item {
        OrderItem::Order(order) => order.label(),
        other => other.title(),
    }
}

/// Closed set of order participants.
#[derive(Debug, Clone)]
pub enum OrderItem {
    Addin(Addin),
    Coffee(Coffee),
    Order(Order),
}

impl OrderItem {
    pub fn as_coffee_mut(&mut self) -> Option<&mut Coffee> {
        match self {
            OrderItem::Coffee(coffee) => Some(coffee),
            _ => None,
        }
    }

    pub fn composite(&self) -> Option<&Composite> {
        match self {
            OrderItem::Addin(_) => None,
            OrderItem::Coffee(coffee) => Some(coffee.items()),
            OrderItem::Order(order) => Some(order.items()),
        }
    }

    pub fn composite_mut(&mut self) -> Option<&mut Composite> {
        match self {
            OrderItem::Addin(_) => None,
            OrderItem::Coffee(coffee) => Some(coffee.items_mut()),
            OrderItem::Order(order) => Some(order.items_mut()),
        }
    }

    pub fn duplicate(&self) -> Self {
        match self {
            OrderItem::Addin(addin) => OrderItem::Addin(addin.duplicate()),
            OrderItem::Coffee(coffee) => OrderItem::Coffee(coffee.duplicate()),
            OrderItem::Order(order) => OrderItem::Order(order.duplicate()),
        }
    }

    fn inner(&self) -> &dyn Orderable {
        match self {
            OrderItem::Addin(addin) => addin,
            OrderItem::Coffee(coffee) => coffee,
            OrderItem::Order(order) => order,
        }
    }
}

impl Orderable for OrderItem {
    fn id(&self) -> ItemId {
        self.inner().id()
    }

    fn title(&self) -> String {
        self.inner().title()
    }

    fn amount(&self) -> Decimal {
        self.inner().amount()
    }

    fn count(&self) -> usize {
        self.inner().count()
    }

    fn children(&self) -> &[OrderItem] {
        self.inner().children()
    }

    fn label(&self) -> String {
        self.inner().label()
    }
}

impl From<Addin> for OrderItem {
    fn from(addin: Addin) -> Self {
        OrderItem::Addin(addin)
    }
}

impl From<Coffee> for OrderItem {
    fn from(coffee: Coffee) -> Self {
        OrderItem::Coffee(coffee)
    }
}

impl From<Order> for OrderItem {
    fn from(order: Order) -> Self {
        OrderItem::Order(order)
    }
}
