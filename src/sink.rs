//! Sink seam and the console sink

use std::io::{self, Write};

use crate::error::{Error, Result};

/// Destination for formatted log bytes.
///
/// Exactly one sink is selected per logger at construction. Sinks must be
/// internally safe for arbitrary concurrent use; callers never
/// synchronize around them.
pub trait Sink: Send + Sync {
    /// Write one rendered entry. The result carries the error only,
    /// never a byte count.
    fn write(&self, entry: &[u8]) -> Result<()>;

    /// Arm size-based rotation. Returns whether the current size already
    /// exceeds the new limit. Only meaningful for file-backed sinks.
    fn set_size_limit(&self, _bytes: u64) -> Result<bool> {
        Err(Error::NotFileBacked)
    }

    /// Release any owned resources. Idempotent; a no-op for sinks that
    /// own none.
    fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// Sink writing raw bytes to the standard error stream.
#[derive(Debug, Default)]
pub struct StderrSink;

impl StderrSink {
    /// Create a new stderr sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StderrSink {
    fn write(&self, entry: &[u8]) -> Result<()> {
        // The stream lock keeps concurrent entries from interleaving.
        io::stderr().lock().write_all(entry)?;
        Ok(())
    }
}
