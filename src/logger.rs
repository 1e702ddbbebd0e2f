//! Logger facade
//!
//! Selects exactly one sink at construction, owns the label set and entry
//! format derived from the config, gates debug/trace output, and exposes
//! the leveled write methods plus `set_size_limit`/`close`.

use std::fmt;
use std::path::Path;
use std::process;

use crate::config::LoggerConfig;
use crate::error::Result;
use crate::file::FileSink;
use crate::format::EntryFormat;
use crate::hybrid::{self, ActivationHandle, HybridSink};
use crate::level::{LabelSet, Level};
use crate::sink::{Sink, StderrSink};

/// A leveled logger bound to a single sink.
///
/// Safe for arbitrary concurrent use; share it behind an `Arc` and thread
/// it through call sites explicitly rather than through a global.
pub struct Logger {
    labels: LabelSet,
    format: EntryFormat,
    debug: bool,
    trace: bool,
    sink: Box<dyn Sink>,
}

impl Logger {
    fn entry_format(config: LoggerConfig) -> EntryFormat {
        let prefix = if config.pid {
            EntryFormat::pid_prefix()
        } else {
            String::new()
        };
        EntryFormat::new(prefix, config.timestamps)
    }

    fn build(sink: Box<dyn Sink>, config: LoggerConfig, colorize: bool) -> Self {
        Self {
            labels: if colorize {
                LabelSet::colored()
            } else {
                LabelSet::plain()
            },
            format: Self::entry_format(config),
            debug: config.debug,
            trace: config.trace,
            sink,
        }
    }

    /// Logger writing to standard error.
    #[must_use]
    pub fn stderr(config: LoggerConfig) -> Self {
        Self::build(Box::new(StderrSink::new()), config, config.colorize)
    }

    /// Logger writing to standard error and, once the returned handle is
    /// activated, forwarding every entry to `publish` together with the
    /// 3-byte level tag.
    pub fn hybrid(
        publish: impl Fn(&str, &[u8]) + Send + Sync + 'static,
        config: LoggerConfig,
    ) -> (Self, ActivationHandle) {
        Self::hybrid_over(Box::new(StderrSink::new()), Box::new(publish), config)
    }

    /// Logger appending to the file at `path`. File output is always
    /// plain; the `colorize` flag is ignored. Fails if the path cannot
    /// be opened.
    pub fn file(path: impl AsRef<Path>, config: LoggerConfig) -> Result<Self> {
        // The sink keeps its own copy of the format for raw appends
        // during rotation.
        let sink = FileSink::open(path.as_ref().to_path_buf(), Self::entry_format(config))?;
        Ok(Self::build(Box::new(sink), config, false))
    }

    /// Logger writing to standard error with an arbitrary literal prefix,
    /// for disambiguating concurrent instances sharing one stream in
    /// tests. Debug and trace are forced on; labels are colored.
    #[must_use]
    pub fn test(prefix: &str, timestamps: bool) -> Self {
        Self {
            labels: LabelSet::colored(),
            format: EntryFormat::new(prefix.to_string(), timestamps),
            debug: true,
            trace: true,
            sink: Box::new(StderrSink::new()),
        }
    }

    /// Logger writing through an arbitrary sink. Test seam.
    #[cfg(feature = "test-support")]
    #[must_use]
    pub fn with_sink(sink: Box<dyn Sink>, config: LoggerConfig) -> Self {
        Self::build(sink, config, config.colorize)
    }

    /// Hybrid logger over an arbitrary console target. Test seam.
    #[cfg(feature = "test-support")]
    pub fn hybrid_to(
        console: Box<dyn Sink>,
        publish: impl Fn(&str, &[u8]) + Send + Sync + 'static,
        config: LoggerConfig,
    ) -> (Self, ActivationHandle) {
        Self::hybrid_over(console, Box::new(publish), config)
    }

    fn hybrid_over(
        console: Box<dyn Sink>,
        publish: crate::hybrid::PublishFn,
        config: LoggerConfig,
    ) -> (Self, ActivationHandle) {
        let format = Self::entry_format(config);
        let offset = hybrid::label_offset(format.prefix_len(), format.timestamps());
        let (sink, handle) = HybridSink::new(console, publish, offset);
        let logger = Self {
            labels: if config.colorize {
                LabelSet::colored()
            } else {
                LabelSet::plain()
            },
            format,
            debug: config.debug,
            trace: config.trace,
            sink: Box::new(sink),
        };
        (logger, handle)
    }

    fn write(&self, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        let line = self.format.render(self.labels.get(level), args);
        self.sink.write(line.as_bytes())
    }

    /// Log a notice.
    pub fn noticef(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.write(Level::Notice, args)
    }

    /// Log a warning.
    pub fn warnf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.write(Level::Warn, args)
    }

    /// Log an error.
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.write(Level::Error, args)
    }

    /// Log a debug message. No-op unless debug output is enabled.
    pub fn debugf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.debug {
            return Ok(());
        }
        self.write(Level::Debug, args)
    }

    /// Log a trace message. No-op unless trace output is enabled.
    pub fn tracef(&self, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.trace {
            return Ok(());
        }
        self.write(Level::Trace, args)
    }

    /// Log a fatal message, then terminate the process. Never returns,
    /// regardless of sink errors.
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let _ = self.write(Level::Fatal, args);
        process::exit(1);
    }

    /// Arm size-based rotation on a file-backed logger.
    ///
    /// Fails with a configuration error on other sinks. If the file
    /// already exceeds `bytes`, a notice is emitted; rotation itself
    /// happens on the next write that crosses the threshold.
    pub fn set_size_limit(&self, bytes: u64) -> Result<()> {
        if self.sink.set_size_limit(bytes)? {
            self.noticef(format_args!("Rotating logfile..."))?;
        }
        Ok(())
    }

    /// Release the file handle if this logger is file-backed. Idempotent.
    pub fn close(&self) -> Result<()> {
        self.sink.close()
    }
}
