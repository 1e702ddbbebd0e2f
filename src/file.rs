//! Rotating file sink
//!
//! The sink is a two-state machine. **Unbounded** (rotation not armed)
//! appends through a shared handle and tracks size with a lock-free
//! atomic add. **Bounded** (armed via [`Sink::set_size_limit`]) runs the
//! whole check-and-maybe-rotate sequence under a single mutex so no two
//! rotations can interleave. The transition is one-way.
//!
//! Rotation closes the current file, renames it to
//! `<path>.<YYYY>.<MM>.<DD>.<HH>.<MM>.<SS>.<nanoseconds>` (UTC) and
//! reopens a fresh file at the original path. A close failure backs off
//! by doubling the limit and the sink keeps writing un-rotated; a reopen
//! failure aborts the process, since silently losing the only log sink
//! is worse than crashing. Diagnostics emitted mid-rotation go through a
//! raw-append primitive that never re-enters the public write entry
//! point, which would self-deadlock on the rotation mutex.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::mem;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use parking_lot::{Mutex, RwLock};

use crate::error::{Error, Result};
use crate::format::EntryFormat;
use crate::level::LabelSet;
use crate::sink::Sink;

/// File handle with an observable close step.
///
/// Rotation must know whether closing the outgoing file succeeded before
/// it renames anything, so the handle is held behind this seam rather
/// than as a bare [`File`].
trait BackingFile: Write + Send {
    fn close(&mut self) -> io::Result<()>;
}

impl BackingFile for File {
    fn close(&mut self) -> io::Result<()> {
        self.sync_all()
    }
}

/// Mutable state of a bounded (rotation-armed) sink.
struct BoundedFile {
    file: Box<dyn BackingFile>,
    /// Bytes successfully appended to the currently open file since it
    /// was opened or last reset by rotation.
    written: u64,
    limit: u64,
    original_limit: u64,
}

enum Mode {
    /// Rotation not armed: shared handle, atomic byte counter, no mutex.
    Unbounded { file: File, written: AtomicU64 },
    /// Rotation armed: everything under one mutex.
    Bounded(Mutex<BoundedFile>),
    /// Terminal: the handle has been released.
    Closed,
}

/// Sink that appends to a file and rotates it once a size limit is
/// armed and crossed.
pub struct FileSink {
    path: PathBuf,
    format: EntryFormat,
    mode: RwLock<Mode>,
}

fn open_log_file(path: &Path) -> io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o660);
    }
    opts.open(path)
}

impl FileSink {
    /// Open `path` in append/create mode. The byte counter starts at the
    /// file's existing size so a pre-populated file still rotates at the
    /// right threshold.
    pub(crate) fn open(path: PathBuf, format: EntryFormat) -> Result<Self> {
        let file = open_log_file(&path).map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;
        let size = file
            .metadata()
            .map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?
            .len();
        Ok(Self {
            path,
            format,
            mode: RwLock::new(Mode::Unbounded {
                file,
                written: AtomicU64::new(size),
            }),
        })
    }

    /// Close the outgoing file and swap in a fresh one, or back off.
    ///
    /// Called with the bounded mutex held; everything written here goes
    /// through raw appends on the handle itself.
    fn rotate(&self, bounded: &mut BoundedFile) -> Result<()> {
        let labels = LabelSet::plain();
        if let Err(err) = bounded.file.close() {
            bounded.limit *= 2;
            let line = self.format.render(
                labels.error,
                format_args!(
                    "unable to close log file for rotation ({err}), will attempt next rotation at {} bytes",
                    bounded.limit
                ),
            );
            let _ = bounded.file.write_all(line.as_bytes());
            return Err(err.into());
        }

        let backup = format!(
            "{}.{}",
            self.path.display(),
            Utc::now().format("%Y.%m.%d.%H.%M.%S.%f")
        );
        // A failed rename leaves the old file in place; the reopen below
        // then appends to it.
        let _ = fs::rename(&self.path, &backup);

        let file = match open_log_file(&self.path) {
            Ok(file) => file,
            Err(err) => {
                eprintln!(
                    "unable to reopen log file {} after rotation: {err}",
                    self.path.display()
                );
                process::abort();
            }
        };
        bounded.file = Box::new(file);

        let line = self.format.render(
            labels.notice,
            format_args!("rotated log, backup saved as {backup:?}"),
        );
        let _ = bounded.file.write_all(line.as_bytes());
        bounded.written = line.len() as u64;
        bounded.limit = bounded.original_limit;
        Ok(())
    }
}

impl Sink for FileSink {
    fn write(&self, entry: &[u8]) -> Result<()> {
        let mode = self.mode.read();
        match &*mode {
            Mode::Unbounded { file, written } => {
                let mut handle: &File = file;
                handle.write_all(entry)?;
                written.fetch_add(entry.len() as u64, Ordering::Relaxed);
                Ok(())
            }
            Mode::Bounded(inner) => {
                let mut bounded = inner.lock();
                bounded.file.write_all(entry)?;
                bounded.written += entry.len() as u64;
                if bounded.written > bounded.limit {
                    self.rotate(&mut bounded)?;
                }
                Ok(())
            }
            Mode::Closed => Err(Error::Closed),
        }
    }

    fn set_size_limit(&self, bytes: u64) -> Result<bool> {
        let mut mode = self.mode.write();
        match mem::replace(&mut *mode, Mode::Closed) {
            Mode::Unbounded { file, written } => {
                let written = written.into_inner();
                *mode = Mode::Bounded(Mutex::new(BoundedFile {
                    file: Box::new(file),
                    written,
                    limit: bytes,
                    original_limit: bytes,
                }));
                Ok(written > bytes)
            }
            Mode::Bounded(inner) => {
                let over = {
                    let mut bounded = inner.lock();
                    bounded.limit = bytes;
                    bounded.original_limit = bytes;
                    bounded.written > bytes
                };
                *mode = Mode::Bounded(inner);
                Ok(over)
            }
            Mode::Closed => Err(Error::Closed),
        }
    }

    fn close(&self) -> Result<()> {
        let mut mode = self.mode.write();
        match mem::replace(&mut *mode, Mode::Closed) {
            Mode::Unbounded { file, .. } => {
                file.sync_all()?;
                Ok(())
            }
            Mode::Bounded(inner) => {
                inner.into_inner().file.close()?;
                Ok(())
            }
            Mode::Closed => Ok(()),
        }
    }
}
