//! JSON file persistence for the store.
//!
//! The file holds one JSON object mapping item names to quantities. It is
//! read and written whole; there is no versioning and no partial recovery.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use stockroom_core::ItemName;

use crate::store::InventoryStore;

/// Data file used when the caller does not pick one.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

/// Persisted form of the store.
pub type Snapshot = BTreeMap<ItemName, i64>;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("malformed inventory file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PersistenceError {
    fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound(path.to_path_buf())
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    fn malformed(path: &Path, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Read and parse a data file.
///
/// Quantities must be non-negative integers. Zero entries are accepted and
/// dropped when the snapshot is installed into a store.
pub fn read_snapshot(path: &Path) -> Result<Snapshot, PersistenceError> {
    let raw = fs::read_to_string(path).map_err(|e| PersistenceError::io(path, e))?;
    let snapshot: Snapshot =
        serde_json::from_str(&raw).map_err(|e| PersistenceError::malformed(path, e.to_string()))?;

    if let Some((item, qty)) = snapshot.iter().find(|(_, qty)| **qty < 0) {
        return Err(PersistenceError::malformed(
            path,
            format!("negative quantity {qty} for {item}"),
        ));
    }
    Ok(snapshot)
}

/// Serialize a snapshot and overwrite `path` with it.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), PersistenceError> {
    let body = serde_json::to_string(snapshot)
        .map_err(|e| PersistenceError::malformed(path, e.to_string()))?;
    fs::write(path, body).map_err(|e| PersistenceError::io(path, e))
}

impl InventoryStore {
    /// Replace the whole store with the contents of `path`.
    ///
    /// - missing file: warn, store becomes empty
    /// - malformed file or other read failure: error, store unchanged
    pub fn load(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match read_snapshot(path) {
            Ok(snapshot) => {
                self.replace(snapshot);
                tracing::info!(items = self.len(), "Data loaded successfully.");
            }
            Err(PersistenceError::NotFound(_)) => {
                self.clear();
                tracing::warn!(
                    "{} not found. Starting with an empty inventory.",
                    path.display()
                );
            }
            Err(err @ PersistenceError::Malformed { .. }) => {
                tracing::error!(
                    "Error decoding the inventory file. Please check the file format. ({err})"
                );
            }
            Err(err) => tracing::error!("Error loading data: {err}"),
        }
    }

    /// Write the whole store to `path`. Failures are logged; the store is untouched.
    pub fn save(&self, path: impl AsRef<Path>) {
        match write_snapshot(path.as_ref(), &self.snapshot()) {
            Ok(()) => tracing::info!(items = self.len(), "Data saved successfully."),
            Err(err) => tracing::error!("Error saving data: {err}"),
        }
    }
}
