//! Filesystem primitives consumed by the walker.
//!
//! The traversal only needs two operations: listing the names inside a
//! directory and deciding whether a path refers to a directory. Both are
//! expressed through [`DirectorySource`] so the walker can run against the
//! real filesystem ([`TokioFs`]) or against an in-memory tree in tests.

use std::ffi::OsString;
use std::future::Future;
use std::io;
use std::path::Path;

/// Failure raised while listing a directory.
///
/// Opening the directory and reading an individual entry are distinguished
/// because they are reported differently by the walker.
#[derive(Debug)]
pub enum ListError {
    /// The directory could not be opened.
    Open(io::Error),
    /// The directory was opened but reading one of its entries failed.
    Entry(io::Error),
}

impl ListError {
    /// Consumes the failure and returns the underlying I/O error.
    #[must_use]
    pub fn into_io(self) -> io::Error {
        match self {
            Self::Open(error) | Self::Entry(error) => error,
        }
    }
}

/// Asynchronous directory listing and classification.
///
/// Implementations must be cheap to share by reference; the walker holds one
/// source for the whole traversal and calls it sequentially.
pub trait DirectorySource: Send + Sync {
    /// Lists the names of the immediate entries of `path`.
    ///
    /// Names carry no path prefix. `.` and `..` are never reported. The order
    /// is whatever the underlying listing produces.
    fn list(&self, path: &Path) -> impl Future<Output = Result<Vec<OsString>, ListError>> + Send;

    /// Reports whether `path` refers to a directory, following symlinks.
    ///
    /// A symlink that cannot be resolved (missing target, a loop, a path
    /// running through a non-directory) is not a directory and must not
    /// produce an error. Only an entry that cannot be inspected at all fails.
    fn is_dir(&self, path: &Path) -> impl Future<Output = io::Result<bool>> + Send;
}

/// [`DirectorySource`] backed by [`tokio::fs`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioFs;

impl DirectorySource for TokioFs {
    async fn list(&self, path: &Path) -> Result<Vec<OsString>, ListError> {
        let mut read_dir = tokio::fs::read_dir(path).await.map_err(ListError::Open)?;
        let mut names = Vec::new();
        while let Some(entry) = read_dir.next_entry().await.map_err(ListError::Entry)? {
            names.push(entry.file_name());
        }
        Ok(names)
    }

    async fn is_dir(&self, path: &Path) -> io::Result<bool> {
        match tokio::fs::metadata(path).await {
            Ok(metadata) => Ok(metadata.is_dir()),
            // Broken links fail to resolve but the link itself still exists.
            Err(error) => match tokio::fs::symlink_metadata(path).await {
                Ok(_) => Ok(false),
                Err(_) => Err(error),
            },
        }
    }
}

impl<S: DirectorySource> DirectorySource for &S {
    fn list(&self, path: &Path) -> impl Future<Output = Result<Vec<OsString>, ListError>> + Send {
        (**self).list(path)
    }

    fn is_dir(&self, path: &Path) -> impl Future<Output = io::Result<bool>> + Send {
        (**self).is_dir(path)
    }
}
