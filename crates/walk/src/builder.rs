use crate::error::WalkError;
use crate::flatten::{DirIterator, FileIterator};
use crate::source::{DirectorySource, TokioFs};
use crate::walker::Walker;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// What to do when an entry's type cannot be determined.
///
/// Classification happens after a directory has been listed, so an entry that
/// disappears in between (or whose target cannot be inspected) makes the
/// is-directory test fail even though the listing succeeded.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ClassifyPolicy {
    /// Drop only the offending entry and keep classifying its siblings.
    #[default]
    SkipEntry,
    /// Treat the failure as a listing failure of the containing directory: no
    /// listing is emitted for it and its subtree is not visited.
    AbortDirectory,
}

pub(crate) type ErrorCallback = Arc<dyn Fn(&WalkError) + Send + Sync>;

#[derive(Clone, Default)]
pub(crate) struct WalkOptions {
    pub(crate) classify_policy: ClassifyPolicy,
    pub(crate) sort_entries: bool,
    pub(crate) on_error: Option<ErrorCallback>,
}

impl fmt::Debug for WalkOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalkOptions")
            .field("classify_policy", &self.classify_policy)
            .field("sort_entries", &self.sort_entries)
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

/// Configures a traversal rooted at a specific path.
///
/// Building never touches the filesystem. Whether the root exists, and
/// whether it is a readable directory, is discovered when the first listing
/// is requested.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
    options: WalkOptions,
}

impl WalkBuilder {
    /// Creates a new builder that will traverse the provided root path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            options: WalkOptions::default(),
        }
    }

    /// Selects how classification failures are handled.
    ///
    /// Defaults to [`ClassifyPolicy::SkipEntry`].
    #[must_use]
    pub const fn classify_policy(mut self, policy: ClassifyPolicy) -> Self {
        self.options.classify_policy = policy;
        self
    }

    /// Sorts each directory's names before classifying them.
    ///
    /// Off by default, in which case names keep the order returned by the
    /// directory listing. Enabling it makes output deterministic across
    /// filesystems.
    #[must_use]
    pub const fn sort_entries(mut self, sort: bool) -> Self {
        self.options.sort_entries = sort;
        self
    }

    /// Registers a callback invoked for every skipped directory or entry.
    ///
    /// The callback runs synchronously on the task driving the walk and takes
    /// over from [`Walker::errors`]: failures it receives are not retained by
    /// the walker.
    #[must_use]
    pub fn on_error<F>(mut self, callback: F) -> Self
    where
        F: Fn(&WalkError) + Send + Sync + 'static,
    {
        self.options.on_error = Some(Arc::new(callback));
        self
    }

    /// Builds a [`Walker`] over the real filesystem.
    pub fn build(self) -> Walker {
        self.build_with(TokioFs)
    }

    /// Builds a [`Walker`] that lists and classifies through `source`.
    pub fn build_with<S: DirectorySource>(self, source: S) -> Walker<S> {
        walk_debug!(root = %self.root.display(), "walk");
        Walker::new(self.root, source, self.options)
    }

    /// Builds a [`FileIterator`] over the real filesystem.
    pub fn files(self) -> FileIterator {
        FileIterator::new(self.build())
    }

    /// Builds a [`DirIterator`] over the real filesystem.
    pub fn dirs(self) -> DirIterator {
        DirIterator::new(self.build())
    }
}
