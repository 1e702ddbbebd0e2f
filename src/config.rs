//! Logger configuration flags

/// Construction-time flags, immutable once a logger is built.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerConfig {
    /// Prefix each entry with a local timestamp (microsecond precision)
    pub timestamps: bool,
    /// Emit `debugf` output
    pub debug: bool,
    /// Emit `tracef` output
    pub trace: bool,
    /// Use ANSI-colored level labels (console sinks only; file output is
    /// always plain)
    pub colorize: bool,
    /// Prefix each entry with the process id
    pub pid: bool,
}

impl LoggerConfig {
    /// Create a config with every flag off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable entry timestamps.
    #[must_use]
    pub const fn with_timestamps(mut self, on: bool) -> Self {
        self.timestamps = on;
        self
    }

    /// Enable or disable debug output.
    #[must_use]
    pub const fn with_debug(mut self, on: bool) -> Self {
        self.debug = on;
        self
    }

    /// Enable or disable trace output.
    #[must_use]
    pub const fn with_trace(mut self, on: bool) -> Self {
        self.trace = on;
        self
    }

    /// Enable or disable colored labels.
    #[must_use]
    pub const fn with_colorize(mut self, on: bool) -> Self {
        self.colorize = on;
        self
    }

    /// Enable or disable the pid prefix.
    #[must_use]
    pub const fn with_pid(mut self, on: bool) -> Self {
        self.pid = on;
        self
    }
}
