//! Commands (caller intent) and changes (validated outcomes) for the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::ItemName;

/// Command: AddStock.
///
/// `item` is raw caller text; it becomes an [`ItemName`] only once decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddStock {
    pub item: String,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveStock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveStock {
    pub item: String,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockCommand {
    AddStock(AddStock),
    RemoveStock(RemoveStock),
}

impl StockCommand {
    pub fn add(item: impl Into<String>, quantity: i64) -> Self {
        StockCommand::AddStock(AddStock {
            item: item.into(),
            quantity,
            occurred_at: Utc::now(),
        })
    }

    pub fn remove(item: impl Into<String>, quantity: i64) -> Self {
        StockCommand::RemoveStock(RemoveStock {
            item: item.into(),
            quantity,
            occurred_at: Utc::now(),
        })
    }
}

/// Change: StockAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdded {
    pub item: ItemName,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Change: StockRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRemoved {
    pub item: ItemName,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockChange {
    StockAdded(StockAdded),
    StockRemoved(StockRemoved),
}

impl StockChange {
    pub fn change_type(&self) -> &'static str {
        match self {
            StockChange::StockAdded(_) => "inventory.stock.added",
            StockChange::StockRemoved(_) => "inventory.stock.removed",
        }
    }

    pub fn item(&self) -> &ItemName {
        match self {
            StockChange::StockAdded(c) => &c.item,
            StockChange::StockRemoved(c) => &c.item,
        }
    }
}

impl core::fmt::Display for StockChange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StockChange::StockAdded(c) => write!(f, "Added {} of {}", c.quantity, c.item),
            StockChange::StockRemoved(c) => write!(f, "Removed {} of {}", c.quantity, c.item),
        }
    }
}
