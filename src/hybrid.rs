//! Hybrid publish sink
//!
//! Wraps a console sink and, once activated, forwards every entry to an
//! externally supplied publish callback together with the 3-byte level
//! tag extracted at a precomputed offset. Forwarding starts disabled so
//! that logging about the publish transport's own startup does not
//! require the transport; the one-shot [`ActivationHandle`] flips it on
//! once the transport is confirmed ready.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::format::TIMESTAMP_WIDTH;
use crate::level::LABEL_LEN;
use crate::sink::{Sink, StderrSink};

/// Callback receiving the 3-byte level tag and the raw entry bytes.
pub type PublishFn = Box<dyn Fn(&str, &[u8]) + Send + Sync>;

/// Sink that always writes to a console target and conditionally
/// forwards to a publish callback.
pub struct HybridSink {
    console: Box<dyn Sink>,
    publish: PublishFn,
    /// Byte offset of the level tag inside a rendered entry. Computed
    /// once from the prefix flags; assumes plain labels.
    label_offset: usize,
    /// Guarded by its own lock, independent of any file-sink state.
    enabled: Arc<Mutex<bool>>,
}

/// One-shot handle enabling a hybrid sink's forwarding.
pub struct ActivationHandle {
    enabled: Arc<Mutex<bool>>,
}

impl ActivationHandle {
    /// Enable publish forwarding. Consumes the handle; the flag never
    /// reverts.
    pub fn activate(self) {
        *self.enabled.lock() = true;
    }
}

/// Level-tag offset for entries with the given prefix choices: byte 1
/// skips the label's opening bracket, then the literal prefix and the
/// timestamp block (separator space included) shift it right.
pub(crate) fn label_offset(prefix_len: usize, timestamps: bool) -> usize {
    let mut offset = 1 + prefix_len;
    if timestamps {
        offset += TIMESTAMP_WIDTH;
    }
    offset
}

impl HybridSink {
    pub(crate) fn new(
        console: Box<dyn Sink>,
        publish: PublishFn,
        label_offset: usize,
    ) -> (Self, ActivationHandle) {
        let enabled = Arc::new(Mutex::new(false));
        let sink = Self {
            console,
            publish,
            label_offset,
            enabled: enabled.clone(),
        };
        (sink, ActivationHandle { enabled })
    }

    /// Build a hybrid sink over standard error.
    pub fn stderr(publish: PublishFn, label_offset: usize) -> (Self, ActivationHandle) {
        Self::new(Box::new(StderrSink::new()), publish, label_offset)
    }
}

impl Sink for HybridSink {
    fn write(&self, entry: &[u8]) -> Result<()> {
        let enabled = *self.enabled.lock();
        if enabled {
            let tag = entry
                .get(self.label_offset..self.label_offset + LABEL_LEN)
                .and_then(|bytes| std::str::from_utf8(bytes).ok());
            if let Some(label) = tag {
                (self.publish)(label, entry);
            }
        }
        self.console.write(entry)
    }
}
