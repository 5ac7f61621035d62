//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::menu::ItemKind;

/// Domain errors represent lookups and parses that cannot be satisfied.
/// The composite model itself is total and never produces these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown menu item: {0}")]
    UnknownMenuItem(String),

    #[error("menu item '{key}' is not a {expected}")]
    WrongKind { key: String, expected: ItemKind },

    #[error("invalid order line '{line}': {reason}")]
    InvalidOrderLine { line: String, reason: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
