use std::collections::BTreeMap;
use std::io::{self, Write};

use stockroom_core::{DomainError, DomainResult, ItemName};

use crate::command::{AddStock, RemoveStock, StockAdded, StockChange, StockCommand, StockRemoved};
use crate::journal::TransactionLog;

/// Threshold used by [`InventoryStore::check_low_stock`] callers that have no
/// preference of their own.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Header line printed before the item lines of a report.
pub const REPORT_HEADER: &str = "Items Report:";

/// In-memory stock: item name -> on-hand quantity.
///
/// Every entry holds a strictly positive quantity. Removing the last units of
/// an item deletes its entry, and adding zero units of an unknown item does
/// not create one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    items: BTreeMap<ItemName, i64>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored quantity for `item`, or 0 when the item is unknown.
    pub fn get_quantity(&self, item: &str) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in map order with their quantities.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, i64)> {
        self.items.iter().map(|(name, qty)| (name, *qty))
    }

    /// Items whose quantity is strictly below `threshold`.
    pub fn check_low_stock(&self, threshold: i64) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Copy of the full mapping, suitable for persisting.
    pub fn snapshot(&self) -> BTreeMap<ItemName, i64> {
        self.items.clone()
    }

    /// Overwrite the whole mapping. Non-positive entries are dropped.
    pub fn replace(&mut self, items: BTreeMap<ItemName, i64>) {
        self.items = items.into_iter().filter(|(_, qty)| *qty > 0).collect();
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Decide which change a command produces against the current state.
    ///
    /// This must not mutate state. State evolution is done through `execute`.
    pub fn decide(&self, command: &StockCommand) -> DomainResult<StockChange> {
        match command {
            StockCommand::AddStock(cmd) => self.decide_add(cmd),
            StockCommand::RemoveStock(cmd) => self.decide_remove(cmd),
        }
    }

    /// Evolve the mapping from a change produced by `decide`.
    ///
    /// Entries that end up non-positive are removed.
    fn apply(&mut self, change: &StockChange) {
        let (item, next) = match change {
            StockChange::StockAdded(c) => {
                (&c.item, self.get_quantity(c.item.as_str()).saturating_add(c.quantity))
            }
            StockChange::StockRemoved(c) => {
                (&c.item, self.get_quantity(c.item.as_str()).saturating_sub(c.quantity))
            }
        };
        if next > 0 {
            self.items.insert(item.clone(), next);
        } else {
            self.items.remove(item);
        }
    }

    /// Decide and apply a command; on success, additions go to `log`.
    pub fn execute(
        &mut self,
        command: &StockCommand,
        log: Option<&mut TransactionLog>,
    ) -> DomainResult<StockChange> {
        let change = self.decide(command)?;
        self.apply(&change);
        if let (Some(log), StockChange::StockAdded(added)) = (log, &change) {
            log.record(added);
        }
        Ok(change)
    }

    /// Add `quantity` units of `item`, reporting why the addition was rejected.
    pub fn try_add(
        &mut self,
        item: &str,
        quantity: i64,
        log: Option<&mut TransactionLog>,
    ) -> DomainResult<()> {
        self.execute(&StockCommand::add(item, quantity), log).map(|_| ())
    }

    /// Remove `quantity` units of `item`, reporting why the removal was rejected.
    pub fn try_remove(&mut self, item: &str, quantity: i64) -> DomainResult<()> {
        self.execute(&StockCommand::remove(item, quantity), None).map(|_| ())
    }

    /// Add stock. Invalid input is logged at warn level and ignored.
    pub fn add(&mut self, item: &str, quantity: i64, log: Option<&mut TransactionLog>) {
        let command = StockCommand::add(item, quantity);
        self.execute_logged(&command, log);
    }

    /// Remove stock. Unknown items, invalid quantities and insufficient stock
    /// are logged at warn level and ignored.
    pub fn remove(&mut self, item: &str, quantity: i64) {
        let command = StockCommand::remove(item, quantity);
        self.execute_logged(&command, None);
    }

    pub(crate) fn execute_logged(
        &mut self,
        command: &StockCommand,
        log: Option<&mut TransactionLog>,
    ) {
        match self.execute(command, log) {
            Ok(change) => tracing::info!(change_type = change.change_type(), "{change}"),
            Err(err) => warn_rejected(&err),
        }
    }

    /// Render the report (header plus one `<name> -> <quantity>` line per item).
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Print the report to standard output.
    pub fn report(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(err) = self.write_report(&mut out) {
            tracing::error!("Error printing report: {err}");
        }
    }

    fn decide_add(&self, cmd: &AddStock) -> DomainResult<StockChange> {
        let item = ItemName::parse(cmd.item.as_str())?;
        if cmd.quantity < 0 {
            return Err(DomainError::validation("invalid quantity value"));
        }
        let current = self.get_quantity(item.as_str());
        if current.checked_add(cmd.quantity).is_none() {
            return Err(DomainError::validation("quantity overflow"));
        }

        Ok(StockChange::StockAdded(StockAdded {
            item,
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        }))
    }

    fn decide_remove(&self, cmd: &RemoveStock) -> DomainResult<StockChange> {
        let Some(available) = self.items.get(cmd.item.as_str()).copied() else {
            return Err(DomainError::not_found(cmd.item.as_str()));
        };
        if cmd.quantity <= 0 {
            return Err(DomainError::validation("invalid quantity value"));
        }
        if available < cmd.quantity {
            return Err(DomainError::insufficient(
                cmd.item.as_str(),
                available,
                cmd.quantity,
            ));
        }

        Ok(StockChange::StockRemoved(StockRemoved {
            item: ItemName::parse(cmd.item.as_str())?,
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        }))
    }
}

pub(crate) fn warn_rejected(err: &DomainError) {
    tracing::warn!("{err}");
}

impl core::fmt::Display for InventoryStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;
        for (name, qty) in self.iter() {
            writeln!(f, "{name} -> {qty}")?;
        }
        Ok(())
    }
}
