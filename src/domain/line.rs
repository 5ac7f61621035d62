//! Textual order lines: `coffee[+addin...]`.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

pub const SEPARATOR: char = '+';

/// One coffee with its add-ins, referenced by menu keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub coffee: String,
    pub addins: Vec<String>,
}

impl OrderLine {
    pub fn new(coffee: impl Into<String>, addins: Vec<String>) -> Self {
        Self {
            coffee: coffee.into(),
            addins,
        }
    }
}

impl FromStr for OrderLine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidOrderLine {
            line: s.to_string(),
            reason: reason.to_string(),
        };

        if s.trim().is_empty() {
            return Err(invalid("empty line"));
        }

        let mut segments = s.split(SEPARATOR).map(str::trim);
        let coffee = segments.next().unwrap_or_default();
        if coffee.is_empty() {
            return Err(invalid("missing coffee"));
        }

        let mut addins = Vec::new();
        for segment in segments {
            if segment.is_empty() {
                return Err(invalid("empty add-in"));
            }
            addins.push(segment.to_string());
        }

        Ok(Self::new(coffee, addins))
    }
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coffee)?;
        for addin in &self.addins {
            write!(f, "{}{}", SEPARATOR, addin)?;
        }
        Ok(())
    }
}
