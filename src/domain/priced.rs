//! Name/price pair shared by leaves and composites.

use rust_decimal::Decimal;

/// Intrinsic name and unit price of a catalog item.
///
/// Embedded by value in [`Addin`](crate::domain::Addin) and
/// [`Coffee`](crate::domain::Coffee). Setters are fluent and perform no
/// validation: negative prices and empty names are accepted as given.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PricedItem {
    name: String,
    price: Decimal,
}

impl PricedItem {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn set_price(&mut self, price: Decimal) -> &mut Self {
        self.price = price;
        self
    }
}
