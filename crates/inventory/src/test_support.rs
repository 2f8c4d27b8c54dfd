//! Helpers shared by the unit tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::store::InventoryStore;

pub fn stocked(items: &[(&str, i64)]) -> InventoryStore {
    let mut store = InventoryStore::new();
    for (name, qty) in items {
        store.try_add(name, *qty, None).unwrap();
    }
    store
}

/// In-memory sink for formatted diagnostics.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Diagnostics emitted while running `f`, one `LEVEL message` line per event.
pub fn captured_logs(f: impl FnOnce()) -> Vec<String> {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let raw = buffer.0.lock().unwrap().clone();
    String::from_utf8(raw)
        .unwrap()
        .lines()
        .map(|line| line.trim().to_string())
        .collect()
}

/// Assert exactly one event was emitted, at `level`, containing `message`.
pub fn assert_single_event(logs: &[String], level: &str, message: &str) {
    assert_eq!(logs.len(), 1, "expected one event, got {logs:?}");
    assert!(
        logs[0].starts_with(level) && logs[0].contains(message),
        "expected {level} event containing {message:?}, got {:?}",
        logs[0]
    );
}
