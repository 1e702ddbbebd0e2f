//! Test support utilities
//!
//! In-memory sink for asserting on console-bound bytes. Only available
//! with the `test-support` feature.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::sink::Sink;

/// A sink that captures every entry in memory for inspection.
#[derive(Clone, Default)]
pub struct CaptureSink {
    entries: Arc<Mutex<Vec<u8>>>,
}

impl CaptureSink {
    /// Create an empty capture sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured bytes, in write order.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.entries.lock().clone()
    }

    /// Captured bytes decoded as UTF-8.
    #[must_use]
    pub fn contents_utf8(&self) -> String {
        String::from_utf8_lossy(&self.entries.lock()).into_owned()
    }

    /// Number of line breaks captured so far.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.entries.lock().iter().filter(|b| **b == b'\n').count()
    }

    /// Whether the captured output contains `text`.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.contents_utf8().contains(text)
    }

    /// Discard everything captured so far.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Sink for CaptureSink {
    fn write(&self, entry: &[u8]) -> Result<()> {
        self.entries.lock().extend_from_slice(entry);
        Ok(())
    }
}
