//! Demonstration run: every store operation once, happy and failure paths.

use std::io::Write;

use anyhow::Context;
use serde_json::json;

use stockroom_inventory::{InventoryStore, TransactionLog};

use crate::config::Config;

/// Run the demonstration against `config.data_file`.
///
/// The stock report goes to stdout; the other console lines go to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<InventoryStore> {
    let mut log = TransactionLog::new();
    let mut store = InventoryStore::new();

    store.add("apple", 10, Some(&mut log));
    store.add("banana", -2, Some(&mut log));
    store.add_input(&json!(123), &json!("ten"), Some(&mut log));
    store.remove("apple", 3);
    store.remove("orange", 1);

    writeln!(out, "Apple stock: {}", store.get_quantity("apple"))
        .context("failed to write apple stock")?;
    writeln!(
        out,
        "Low items: {:?}",
        store.check_low_stock(config.low_stock_threshold)
    )
    .context("failed to write low items")?;

    store.save(&config.data_file);
    store.load(&config.data_file);
    store.report();

    if log.is_empty() {
        return Ok(store);
    }
    writeln!(out, "Transactions:").context("failed to write transaction log")?;
    for line in log.lines() {
        writeln!(out, "  {line}").context("failed to write transaction log")?;
    }

    Ok(store)
}
