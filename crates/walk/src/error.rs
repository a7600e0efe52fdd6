use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Failure recorded when part of the tree had to be skipped.
///
/// Walk errors never terminate a traversal. Each one describes a directory
/// (or a single entry) that was left out of the emitted sequence together with
/// the [`io::Error`] that caused it.
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
    directory_skipped: bool,
}

impl WalkError {
    pub(crate) fn new(kind: WalkErrorKind) -> Self {
        let directory_skipped = !matches!(kind, WalkErrorKind::Classify { .. });
        Self {
            kind,
            directory_skipped,
        }
    }

    /// Marks a classification failure as having cost its whole directory.
    pub(crate) fn skipping_directory(mut self) -> Self {
        self.directory_skipped = true;
        self
    }

    pub(crate) fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDir { path, source })
    }

    pub(crate) fn read_dir_entry(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDirEntry { path, source })
    }

    pub(crate) fn classify(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::Classify { path, source })
    }

    /// Returns the specific failure.
    #[must_use]
    pub fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the filesystem path associated with the error.
    ///
    /// For listing failures this is the directory that could not be read. For
    /// classification failures it is the full path of the offending entry.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kind.path()
    }

    /// Returns the underlying operating system error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        self.kind.io_error()
    }

    /// Returns the directory whose expansion hit the failure.
    ///
    /// Identical to [`path`](Self::path) for listing failures; the parent of the
    /// offending entry for classification failures.
    #[must_use]
    pub fn directory(&self) -> &Path {
        match &self.kind {
            WalkErrorKind::Classify { path, .. } => path.parent().unwrap_or(path),
            other => other.path(),
        }
    }

    /// Reports whether the whole [`directory`](Self::directory) was skipped.
    ///
    /// Returns `false` only for classification failures that dropped a single
    /// entry while the rest of its directory was still emitted.
    #[must_use]
    pub const fn skipped_directory(&self) -> bool {
        self.directory_skipped
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.kind.io_error())
    }
}

/// Classification of traversal failures.
#[derive(Debug, thiserror::Error)]
pub enum WalkErrorKind {
    /// Failed to open a directory for listing.
    #[error("failed to read directory '{}': {source}", .path.display())]
    ReadDir {
        /// Directory whose contents could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// Failed to obtain an entry while a directory was being listed.
    #[error("failed to read entry in '{}': {source}", .path.display())]
    ReadDirEntry {
        /// Directory containing the problematic entry.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// Failed to determine whether an entry is a directory.
    #[error("failed to classify '{}': {source}", .path.display())]
    Classify {
        /// Entry path whose type could not be determined.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
}

impl WalkErrorKind {
    /// Returns the filesystem path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::ReadDir { path, .. }
            | Self::ReadDirEntry { path, .. }
            | Self::Classify { path, .. } => path,
        }
    }

    fn io_error(&self) -> &io::Error {
        match self {
            Self::ReadDir { source, .. }
            | Self::ReadDirEntry { source, .. }
            | Self::Classify { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error(message: &'static str) -> io::Error {
        io::Error::other(message)
    }

    #[test]
    fn walk_error_path_matches_variant_path() {
        let read_dir = WalkError::read_dir(PathBuf::from("dir"), io_error("dir"));
        assert_eq!(Path::new("dir"), read_dir.path());

        let read_dir_entry = WalkError::read_dir_entry(PathBuf::from("entry"), io_error("entry"));
        assert_eq!(Path::new("entry"), read_dir_entry.path());

        let classify = WalkError::classify(PathBuf::from("dir/child"), io_error("classify"));
        assert_eq!(Path::new("dir/child"), classify.path());
    }

    #[test]
    fn walk_error_display_is_specific_per_variant() {
        let read_dir = WalkError::read_dir(PathBuf::from("dir"), io_error("boom"));
        assert_eq!("failed to read directory 'dir': boom", read_dir.to_string());

        let read_dir_entry = WalkError::read_dir_entry(PathBuf::from("entry"), io_error("boom"));
        assert_eq!(
            "failed to read entry in 'entry': boom",
            read_dir_entry.to_string()
        );

        let classify = WalkError::classify(PathBuf::from("dir/gone"), io_error("boom"));
        assert_eq!("failed to classify 'dir/gone': boom", classify.to_string());
    }

    #[test]
    fn walk_error_kind_accessor_reveals_inner_variant() {
        let classify = WalkError::classify(PathBuf::from("x"), io_error("x"));
        match classify.kind() {
            WalkErrorKind::Classify { path, .. } => assert_eq!(Path::new("x"), path),
            other => panic!("unexpected error kind: {other:?}"),
        }
        assert!(!classify.skipped_directory());
        assert!(WalkError::read_dir(PathBuf::from("x"), io_error("x")).skipped_directory());
    }

    #[test]
    fn classify_error_directory_is_entry_parent() {
        let classify = WalkError::classify(PathBuf::from("root/sub/gone"), io_error("gone"));
        assert_eq!(classify.directory(), Path::new("root/sub"));
        assert!(classify.skipping_directory().skipped_directory());

        let read_dir = WalkError::read_dir(PathBuf::from("root/sub"), io_error("denied"));
        assert_eq!(read_dir.directory(), Path::new("root/sub"));
    }

    #[test]
    fn walk_error_source_refers_to_underlying_io_error() {
        let error = WalkError::read_dir(
            PathBuf::from("dir"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let source_ref = error
            .source()
            .and_then(|err| err.downcast_ref::<io::Error>())
            .expect("walk error should expose the underlying io::Error");
        assert_eq!(source_ref.to_string(), "denied");
        assert_eq!(error.io_error().kind(), io::ErrorKind::PermissionDenied);
    }
}
