use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// One directory visited by a walk.
///
/// `dirs` and `files` partition the directory's listing: every name appears in
/// exactly one of them, in the order the listing produced (or sorted, when the
/// walk was configured to sort entries).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirListing {
    pub(crate) root: PathBuf,
    pub(crate) dirs: Vec<OsString>,
    pub(crate) files: Vec<OsString>,
    pub(crate) depth: usize,
}

impl DirListing {
    /// Returns the path of the listed directory.
    ///
    /// The first listing of a walk carries the root exactly as it was passed
    /// in; descendants are formed by joining entry names onto their parent.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of the entries classified as directories.
    #[must_use]
    pub fn dirs(&self) -> &[OsString] {
        &self.dirs
    }

    /// Names of all other entries.
    #[must_use]
    pub fn files(&self) -> &[OsString] {
        &self.files
    }

    /// Depth of the directory below the walk root (the root itself is `0`).
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Total number of classified entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dirs.len() + self.files.len()
    }

    /// Reports whether the directory had no classified entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }

    /// Returns the full paths of the subdirectories, in order.
    pub fn dir_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.dirs.iter().map(|name| self.root.join(name))
    }

    /// Returns the full paths of the files, in order.
    pub fn file_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|name| self.root.join(name))
    }

    /// Reports whether `name` was classified as a directory.
    #[must_use]
    pub fn contains_dir(&self, name: impl AsRef<OsStr>) -> bool {
        let name = name.as_ref();
        self.dirs.iter().any(|dir| dir == name)
    }

    /// Reports whether `name` was classified as a file.
    #[must_use]
    pub fn contains_file(&self, name: impl AsRef<OsStr>) -> bool {
        let name = name.as_ref();
        self.files.iter().any(|file| file == name)
    }

    /// Splits the listing into `(root, dirs, files)`.
    #[must_use]
    pub fn into_parts(self) -> (PathBuf, Vec<OsString>, Vec<OsString>) {
        (self.root, self.dirs, self.files)
    }
}
