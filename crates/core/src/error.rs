//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant describes a rejected stock operation. None of them is fatal:
/// callers log the error and leave the store untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An input failed validation (bad item name, bad quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The item is not present in the store.
    #[error("item {0} not found in stock")]
    NotFound(String),

    /// A removal asked for more units than are on hand.
    #[error("not enough stock of {item} to remove (available: {available}, requested: {requested})")]
    InsufficientStock {
        item: String,
        available: i64,
        requested: i64,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn insufficient(item: impl Into<String>, available: i64, requested: i64) -> Self {
        Self::InsufficientStock {
            item: item.into(),
            available,
            requested,
        }
    }
}
