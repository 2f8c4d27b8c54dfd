//! Boundary for loosely-typed input (e.g. values from untyped JSON).
//!
//! Static types cover the typed API; this module covers the callers that
//! hand over whatever they parsed. Badly-shaped input is a validation error,
//! never a panic.

use chrono::Utc;
use serde_json::Value as JsonValue;

use stockroom_core::{DomainError, DomainResult, ItemName};

use crate::command::{AddStock, RemoveStock, StockCommand};
use crate::journal::TransactionLog;
use crate::store::{InventoryStore, warn_rejected};

/// An item/quantity pair that passed the type checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockInput {
    pub item: ItemName,
    pub quantity: i64,
}

impl StockInput {
    /// Validate an item value and a quantity value.
    ///
    /// The item must be a non-empty string; the quantity must be an integer
    /// (floats, strings and booleans are rejected). Sign rules belong to the
    /// individual operations.
    pub fn from_values(item: &JsonValue, quantity: &JsonValue) -> DomainResult<Self> {
        let item = match item {
            JsonValue::String(s) => ItemName::parse(s.as_str())?,
            _ => return Err(DomainError::validation("invalid item name")),
        };
        let quantity = quantity
            .as_i64()
            .ok_or_else(|| DomainError::validation("invalid quantity value"))?;
        Ok(Self { item, quantity })
    }
}

impl InventoryStore {
    /// `add` for untyped input: shape errors are logged and ignored.
    pub fn add_input(
        &mut self,
        item: &JsonValue,
        quantity: &JsonValue,
        log: Option<&mut TransactionLog>,
    ) {
        match StockInput::from_values(item, quantity) {
            Ok(input) => {
                let command = StockCommand::AddStock(AddStock {
                    item: input.item.into_inner(),
                    quantity: input.quantity,
                    occurred_at: Utc::now(),
                });
                self.execute_logged(&command, log);
            }
            Err(err) => warn_rejected(&err),
        }
    }

    /// `remove` for untyped input. A non-text item is reported as not found.
    pub fn remove_input(&mut self, item: &JsonValue, quantity: &JsonValue) {
        let item = match item {
            JsonValue::String(s) => s.clone(),
            other => {
                warn_rejected(&DomainError::not_found(other.to_string()));
                return;
            }
        };
        match StockInput::from_values(&JsonValue::String(item.clone()), quantity) {
            Ok(input) => {
                let command = StockCommand::RemoveStock(RemoveStock {
                    item: input.item.into_inner(),
                    quantity: input.quantity,
                    occurred_at: Utc::now(),
                });
                self.execute_logged(&command, None);
            }
            Err(_) if !self.contains(&item) => warn_rejected(&DomainError::not_found(item)),
            Err(err) => warn_rejected(&err),
        }
    }
}
