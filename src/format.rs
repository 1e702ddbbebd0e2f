//! Raw entry assembly
//!
//! One rendered entry is `[prefix][timestamp ][label]<message>\n`. The
//! same builder serves the logger facade and the file sink's internal
//! raw-append path, so both produce byte-identical layouts.

use std::fmt::{self, Write};

use chrono::Local;

/// Width of the rendered timestamp block, trailing separator space
/// included: `YYYY/MM/DD HH:MM:SS.NNNNNN ` is 26 characters plus one.
pub(crate) const TIMESTAMP_WIDTH: usize = 27;

/// Assembles raw log lines from the construction-time prefix choices.
#[derive(Debug, Clone)]
pub(crate) struct EntryFormat {
    /// Literal line prefix: the pid prefix, a test-variant literal, or
    /// empty. Carries its own trailing separator when non-empty.
    prefix: String,
    timestamps: bool,
}

impl EntryFormat {
    pub(crate) fn new(prefix: String, timestamps: bool) -> Self {
        Self { prefix, timestamps }
    }

    /// The pid prefix used when the pid flag is set: `"[<pid>] "`.
    pub(crate) fn pid_prefix() -> String {
        format!("[{}] ", std::process::id())
    }

    pub(crate) fn prefix_len(&self) -> usize {
        self.prefix.len()
    }

    pub(crate) fn timestamps(&self) -> bool {
        self.timestamps
    }

    /// Render one complete entry, line break included.
    pub(crate) fn render(&self, label: &str, args: fmt::Arguments<'_>) -> String {
        let mut line = String::with_capacity(64);
        line.push_str(&self.prefix);
        if self.timestamps {
            let now = Local::now();
            let _ = write!(line, "{} ", now.format("%Y/%m/%d %H:%M:%S%.6f"));
        }
        line.push_str(label);
        let _ = line.write_fmt(args);
        line.push('\n');
        line
    }
}
