//! Advisory lock keeping a single process in charge of the store.
//!
//! The store has no locking discipline of its own beyond SQLite defaults, so
//! a second `mindcaps` process is refused up front rather than allowed to
//! interleave its writes.

use crate::constants::LOCK_FILE_NAME;
use crate::errors::{AppResult, LockError};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Holds the exclusive lock until dropped.
#[derive(Debug)]
pub struct StoreLock {
    file: File,
    path: PathBuf,
}

impl StoreLock {
    /// Takes the lock in `data_dir` without waiting.
    ///
    /// # Errors
    ///
    /// Returns `LockError::StoreBusy` if another process holds the lock, or
    /// `LockError::AcquisitionFailed` if the lock file cannot be opened.
    pub fn acquire(data_dir: &Path) -> AppResult<Self> {
        let path = data_dir.join(LOCK_FILE_NAME);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|source| LockError::AcquisitionFailed {
                path: path.clone(),
                source,
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => {
                debug!("Acquired store lock at {:?}", path);
                Ok(StoreLock { file, path })
            }
            Err(e) if is_contended(&e) => Err(LockError::StoreBusy { path }.into()),
            Err(source) => Err(LockError::AcquisitionFailed { path, source }.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn is_contended(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::WouldBlock
        || err.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            debug!("Failed to release store lock {:?}: {}", self.path, e);
        }
    }
}
