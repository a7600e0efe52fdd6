//! Flattened views over a [`Walker`].

use crate::listing::DirListing;
use crate::source::{DirectorySource, TokioFs};
use crate::walker::Walker;
use std::ffi::OsString;
use std::path::PathBuf;
use std::vec;

#[derive(Clone, Copy)]
enum Side {
    Files,
    Dirs,
}

/// Re-emits one side of each listing as `(root, name)` pairs.
///
/// Holds at most the remainder of one listing; the next listing is requested
/// only once the current one is used up.
struct Flatten<S> {
    walker: Walker<S>,
    side: Side,
    current: Option<(PathBuf, vec::IntoIter<OsString>)>,
}

impl<S: DirectorySource> Flatten<S> {
    const fn new(walker: Walker<S>, side: Side) -> Self {
        Self {
            walker,
            side,
            current: None,
        }
    }

    async fn next(&mut self) -> Option<(PathBuf, OsString)> {
        loop {
            if let Some((root, names)) = &mut self.current {
                if let Some(name) = names.next() {
                    return Some((root.clone(), name));
                }
                self.current = None;
            }

            let DirListing {
                root, dirs, files, ..
            } = self.walker.next().await?;
            let names = match self.side {
                Side::Files => files,
                Side::Dirs => dirs,
            };
            self.current = Some((root, names.into_iter()));
        }
    }

    async fn collect_all(&mut self) -> Vec<(PathBuf, OsString)> {
        let mut pairs = Vec::new();
        while let Some(pair) = self.next().await {
            pairs.push(pair);
        }
        pairs
    }
}

/// Every file in the tree as a `(parent directory, file name)` pair.
///
/// Pairs follow the walker's order: parents before children, listing order
/// within a directory.
pub struct FileIterator<S = TokioFs> {
    inner: Flatten<S>,
}

impl<S: DirectorySource> FileIterator<S> {
    /// Wraps an existing walker.
    pub const fn new(walker: Walker<S>) -> Self {
        Self {
            inner: Flatten::new(walker, Side::Files),
        }
    }

    /// Returns the next file, or `None` once the walk is exhausted.
    ///
    /// Cancel safe for the same reasons as [`Walker::next`].
    pub async fn next(&mut self) -> Option<(PathBuf, OsString)> {
        self.inner.next().await
    }

    /// Drains the remaining pairs into a vector.
    pub async fn collect_all(&mut self) -> Vec<(PathBuf, OsString)> {
        self.inner.collect_all().await
    }

    /// The walker driving this iterator, e.g. to inspect its errors.
    pub const fn walker(&self) -> &Walker<S> {
        &self.inner.walker
    }

    /// Gives back the underlying walker, discarding any buffered names.
    pub fn into_walker(self) -> Walker<S> {
        self.inner.walker
    }
}

/// Every subdirectory in the tree as a `(parent directory, dir name)` pair.
///
/// This projects the `dirs` of each listing; it does not walk the tree a
/// second time.
pub struct DirIterator<S = TokioFs> {
    inner: Flatten<S>,
}

impl<S: DirectorySource> DirIterator<S> {
    /// Wraps an existing walker.
    pub const fn new(walker: Walker<S>) -> Self {
        Self {
            inner: Flatten::new(walker, Side::Dirs),
        }
    }

    /// Returns the next subdirectory, or `None` once the walk is exhausted.
    ///
    /// Cancel safe for the same reasons as [`Walker::next`].
    pub async fn next(&mut self) -> Option<(PathBuf, OsString)> {
        self.inner.next().await
    }

    /// Drains the remaining pairs into a vector.
    pub async fn collect_all(&mut self) -> Vec<(PathBuf, OsString)> {
        self.inner.collect_all().await
    }

    /// The walker driving this iterator.
    pub const fn walker(&self) -> &Walker<S> {
        &self.inner.walker
    }

    /// Gives back the underlying walker, discarding any buffered names.
    pub fn into_walker(self) -> Walker<S> {
        self.inner.walker
    }
}
