//! Inventory store.
//!
//! An in-memory mapping of item name to on-hand quantity, with add/remove
//! commands, low-stock queries, a console report and JSON file persistence.
//! Rejected operations are logged through `tracing` and leave the store as
//! it was.

pub mod command;
pub mod input;
pub mod journal;
pub mod persistence;
pub mod store;

#[cfg(test)]
mod test_support;

pub use command::{AddStock, RemoveStock, StockAdded, StockChange, StockCommand, StockRemoved};
pub use input::StockInput;
pub use journal::{TransactionEntry, TransactionLog};
pub use persistence::{DEFAULT_DATA_FILE, PersistenceError, Snapshot, read_snapshot, write_snapshot};
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore, REPORT_HEADER};
