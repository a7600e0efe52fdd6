use crate::builder::{ClassifyPolicy, WalkOptions};
use crate::error::WalkError;
use crate::listing::DirListing;
use crate::source::{DirectorySource, ListError, TokioFs};
use std::ffi::OsString;
use std::mem;
use std::path::{Path, PathBuf};

/// Depth-first, pre-order walk over a directory tree.
///
/// Each call to [`next`](Self::next) lists at most one directory that can be
/// emitted, plus any number of unreadable ones that are skipped on the way.
/// Pending directories live on an explicit stack, so deep trees never grow the
/// call stack.
///
/// Dropping the walker abandons the traversal; nothing keeps running in the
/// background.
pub struct Walker<S = TokioFs> {
    source: S,
    stack: Vec<Pending>,
    options: WalkOptions,
    errors: Vec<WalkError>,
}

#[derive(Clone, Debug)]
struct Pending {
    path: PathBuf,
    depth: usize,
}

/// Result of expanding one directory.
struct Expansion {
    dirs: Vec<OsString>,
    files: Vec<OsString>,
    dropped: Vec<WalkError>,
}

impl<S: DirectorySource> Walker<S> {
    pub(crate) fn new(root: PathBuf, source: S, options: WalkOptions) -> Self {
        Self {
            source,
            stack: vec![Pending {
                path: root,
                depth: 0,
            }],
            options,
            errors: Vec::new(),
        }
    }

    /// Returns the next directory listing, or `None` once the tree is
    /// exhausted.
    ///
    /// Listings arrive in pre-order: a directory always precedes all of its
    /// descendants, and sibling subtrees follow the order of their parent's
    /// `dirs`. Directories that cannot be listed are reported (see
    /// [`errors`](Self::errors)) and their subtrees are skipped.
    ///
    /// # Cancel safety
    ///
    /// This method is cancel safe. A directory is only removed from the
    /// frontier once its expansion has completed, so if the returned future is
    /// dropped (for example by [`tokio::time::timeout`]) the next call lists
    /// the same directory again.
    pub async fn next(&mut self) -> Option<DirListing> {
        loop {
            let Pending { path, depth } = self.stack.last()?.clone();
            let expansion = self.expand(&path).await;
            self.stack.pop();

            match expansion {
                Ok(expansion) => {
                    for error in expansion.dropped {
                        self.report(error);
                    }
                    self.stack
                        .extend(expansion.dirs.iter().rev().map(|name| Pending {
                            path: path.join(name),
                            depth: depth + 1,
                        }));
                    walk_debug!(
                        path = %path.display(),
                        dirs = expansion.dirs.len(),
                        files = expansion.files.len(),
                        "listed directory"
                    );
                    return Some(DirListing {
                        root: path,
                        dirs: expansion.dirs,
                        files: expansion.files,
                        depth,
                    });
                }
                Err(error) => self.report(error),
            }
        }
    }

    /// Drains the remaining walk into a vector.
    pub async fn collect_all(&mut self) -> Vec<DirListing> {
        let mut listings = Vec::new();
        while let Some(listing) = self.next().await {
            listings.push(listing);
        }
        listings
    }

    /// Failures recorded so far, in the order they were encountered.
    ///
    /// Failures are only retained when no [`on_error`] callback is
    /// registered; with a callback this stays empty. Long walks over trees with
    /// many unreadable parts can drain the list with
    /// [`take_errors`](Self::take_errors) between listings.
    ///
    /// [`on_error`]: crate::WalkBuilder::on_error
    #[must_use]
    pub fn errors(&self) -> &[WalkError] {
        &self.errors
    }

    /// Removes and returns the failures recorded so far.
    pub fn take_errors(&mut self) -> Vec<WalkError> {
        mem::take(&mut self.errors)
    }

    /// Reports whether every reachable directory has been visited.
    ///
    /// A finished walker keeps returning `None`; walking again requires a new
    /// walker.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.stack.is_empty()
    }

    /// Number of discovered directories that have not been listed yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.stack.len()
    }

    async fn expand(&self, path: &Path) -> Result<Expansion, WalkError> {
        let mut names = self.source.list(path).await.map_err(|error| match error {
            ListError::Open(source) => WalkError::read_dir(path.to_path_buf(), source),
            ListError::Entry(source) => WalkError::read_dir_entry(path.to_path_buf(), source),
        })?;
        if self.options.sort_entries {
            names.sort();
        }

        let mut expansion = Expansion {
            dirs: Vec::new(),
            files: Vec::new(),
            dropped: Vec::new(),
        };
        for name in names {
            let entry_path = path.join(&name);
            match self.source.is_dir(&entry_path).await {
                Ok(true) => {
                    walk_trace!(entry = %entry_path.display(), "directory");
                    expansion.dirs.push(name);
                }
                Ok(false) => {
                    walk_trace!(entry = %entry_path.display(), "file");
                    expansion.files.push(name);
                }
                Err(source) => {
                    let error = WalkError::classify(entry_path, source);
                    match self.options.classify_policy {
                        ClassifyPolicy::SkipEntry => expansion.dropped.push(error),
                        ClassifyPolicy::AbortDirectory => {
                            return Err(error.skipping_directory());
                        }
                    }
                }
            }
        }
        Ok(expansion)
    }

    fn report(&mut self, error: WalkError) {
        if error.skipped_directory() {
            walk_error!(
                path = %error.directory().display(),
                error = %error,
                "skipping directory"
            );
        } else {
            walk_error!(path = %error.path().display(), error = %error, "skipping entry");
        }
        match &self.options.on_error {
            Some(callback) => callback(&error),
            None => self.errors.push(error),
        }
    }
}
