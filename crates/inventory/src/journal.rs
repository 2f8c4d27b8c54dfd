//! Caller-owned transaction log of successful additions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::ItemName;

use crate::command::StockAdded;

/// One successful addition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEntry {
    pub occurred_at: DateTime<Utc>,
    pub quantity: i64,
    pub item: ItemName,
}

impl core::fmt::Display for TransactionEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: Added {} of {}", self.occurred_at, self.quantity, self.item)
    }
}

/// Append-only log. The store writes to it but never reads or clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionLog {
    entries: Vec<TransactionEntry>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, added: &StockAdded) {
        self.entries.push(TransactionEntry {
            occurred_at: added.occurred_at,
            quantity: added.quantity,
            item: added.item.clone(),
        });
    }

    pub fn entries(&self) -> &[TransactionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Human-readable lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}
