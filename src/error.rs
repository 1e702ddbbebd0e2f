//! Error types for logger construction and writes

use std::io;
use std::path::PathBuf;

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while constructing or using a logger
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to open the log file at construction
    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        /// The path that failed to open
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// A size limit was requested on a sink that is not file-backed
    #[error("size limits require a file-backed logger")]
    NotFileBacked,

    /// The sink was already closed
    #[error("logger is closed")]
    Closed,

    /// I/O error from the underlying device
    #[error("write error: {0}")]
    Io(#[from] io::Error),
}
