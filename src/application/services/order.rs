//! Order assembly service
//!
//! Turns menu keys into a composite order and summarises it.

use std::fmt;

use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::menu::{FRANCE_COFFEE, MILK, SUGAR, TURKISH_COFFEE};
use crate::domain::{Coffee, Menu, Order, OrderLine, Orderable, PriceFormat};

/// The three figures printed for an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub title: String,
    pub count: usize,
    pub amount: Decimal,
    pub format: PriceFormat,
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Items: {}", self.count)?;
        write!(f, "Total: {}", self.format.render(self.amount))
    }
}

/// Builds orders from a menu.
pub struct OrderService {
    menu: Menu,
    format: PriceFormat,
}

impl OrderService {
    pub fn new(menu: Menu, format: PriceFormat) -> Self {
        Self { menu, format }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn format(&self) -> &PriceFormat {
        &self.format
    }

    /// Builds one coffee with its add-ins.
    #[instrument(level = "debug", skip(self))]
    pub fn build_coffee(&self, line: &OrderLine) -> ApplicationResult<Coffee> {
        let mut coffee = self.menu.coffee(&line.coffee)?;
        for key in &line.addins {
            coffee.add_item(self.menu.addin(key)?);
        }
        debug!(title = %coffee.title(), "built coffee");
        Ok(coffee)
    }

    /// Builds an order with one coffee per line, in line order.
    #[instrument(level = "debug", skip(self, lines), fields(lines = lines.len()))]
    pub fn build_order(&self, lines: &[OrderLine]) -> ApplicationResult<Order> {
        if lines.is_empty() {
            return Err(ApplicationError::EmptyOrder);
        }
        let mut order = Order::with_format(self.format.clone());
        for line in lines {
            order.add_item(self.build_coffee(line)?);
        }
        info!(count = order.count(), amount = %order.amount(), "order built");
        Ok(order)
    }

    /// Parses `coffee[+addin...]` lines and builds the order.
    #[instrument(level = "debug", skip(self))]
    pub fn parse_and_build(&self, raw: &[String]) -> ApplicationResult<Order> {
        let lines = raw
            .iter()
            .map(|s| s.parse::<OrderLine>())
            .collect::<Result<Vec<_>, _>>()?;
        self.build_order(&lines)
    }

    /// The reference order: a Turkish coffee with sugar and milk and a
    /// France coffee with milk.
    #[instrument(level = "debug", skip(self))]
    pub fn demo_order(&self) -> ApplicationResult<Order> {
        let lines = [
            OrderLine::new(TURKISH_COFFEE, vec![SUGAR.to_string(), MILK.to_string()]),
            OrderLine::new(FRANCE_COFFEE, vec![MILK.to_string()]),
        ];
        self.build_order(&lines)
    }

    pub fn summary(&self, order: &Order) -> OrderSummary {
        OrderSummary {
            title: order.title(),
            count: order.count(),
            amount: order.amount(),
            format: self.format.clone(),
        }
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new(Menu::default(), PriceFormat::default())
    }
}
