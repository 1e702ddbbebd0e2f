//! Severity levels and their precomputed label fragments

/// Byte length of the severity tag inside a label (`INF`, `ERR`, ...).
pub const LABEL_LEN: usize = 3;

/// Log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Normal operational messages
    Notice,
    /// Something unexpected but recoverable
    Warn,
    /// An operation failed
    Error,
    /// The process is about to terminate
    Fatal,
    /// Developer diagnostics, gated by configuration
    Debug,
    /// Fine-grained diagnostics, gated by configuration
    Trace,
}

/// One label string per level, chosen once at construction and never
/// changed afterwards.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LabelSet {
    pub(crate) notice: &'static str,
    pub(crate) warn: &'static str,
    pub(crate) error: &'static str,
    pub(crate) fatal: &'static str,
    pub(crate) debug: &'static str,
    pub(crate) trace: &'static str,
}

impl LabelSet {
    pub(crate) const fn plain() -> Self {
        Self {
            notice: "[INF] ",
            warn: "[WRN] ",
            error: "[ERR] ",
            fatal: "[FTL] ",
            debug: "[DBG] ",
            trace: "[TRC] ",
        }
    }

    pub(crate) const fn colored() -> Self {
        Self {
            notice: "[\x1b[32mINF\x1b[0m] ",
            warn: "[\x1b[0;93mWRN\x1b[0m] ",
            error: "[\x1b[31mERR\x1b[0m] ",
            fatal: "[\x1b[31mFTL\x1b[0m] ",
            debug: "[\x1b[36mDBG\x1b[0m] ",
            trace: "[\x1b[33mTRC\x1b[0m] ",
        }
    }

    pub(crate) const fn get(&self, level: Level) -> &'static str {
        match level {
            Level::Notice => self.notice,
            Level::Warn => self.warn,
            Level::Error => self.error,
            Level::Fatal => self.fatal,
            Level::Debug => self.debug,
            Level::Trace => self.trace,
        }
    }
}
