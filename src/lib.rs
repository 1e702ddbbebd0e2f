//! Leveled logging with size-based file rotation and an optional publish
//! fan-out.
//!
//! A [`Logger`] selects exactly one sink at construction:
//! - standard error, optionally colorized;
//! - a hybrid sink that always writes to standard error and, once
//!   activated, forwards every line to a caller-supplied publish callback;
//! - a rotating file that renames itself to a timestamped backup whenever
//!   a configured size limit is crossed.
//!
//! All sinks are safe for arbitrary concurrent use, writes are synchronous,
//! and there is no process-wide singleton: thread the instance through
//! call sites explicitly.

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod file;
mod format;
mod hybrid;
mod level;
mod logger;
mod macros;
mod sink;
#[cfg(feature = "test-support")]
mod test_support;

pub use config::LoggerConfig;
pub use error::{Error, Result};
pub use file::FileSink;
pub use hybrid::{ActivationHandle, HybridSink, PublishFn};
pub use level::{LABEL_LEN, Level};
pub use logger::Logger;
pub use sink::{Sink, StderrSink};
#[cfg(feature = "test-support")]
pub use test_support::CaptureSink;
