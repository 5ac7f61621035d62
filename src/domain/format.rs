use rust_decimal::{Decimal, RoundingStrategy};

/// How monetary amounts are interpolated into titles.
///
/// `scale: None` prints the decimal as it is (`5.9`), `Some(n)` rounds to
/// `n` places and pads with zeros (`5.90`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    pub currency: String,
    pub scale: Option<u32>,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
            scale: None,
        }
    }
}

impl PriceFormat {
    pub fn new(currency: impl Into<String>, scale: Option<u32>) -> Self {
        Self {
            currency: currency.into(),
            scale,
        }
    }

    pub fn render(&self, amount: Decimal) -> String {
        match self.scale {
            Some(dp) => format!(
                "{}{:.*}",
                self.currency,
                dp as usize,
                amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
            ),
            None => format!("{}{}", self.currency, amount),
        }
    }
}
