#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides a non-blocking, depth-first directory traversal. For every
//! directory it visits, the walker yields the directory path together with the
//! names of its immediate subdirectories and files, much like a recursive
//! `os.walk`. All filesystem calls are awaited on the tokio runtime, so a walk
//! never blocks the task driving it and interleaves freely with other work.
//!
//! # Design
//!
//! - [`Walker`] owns an explicit stack of pending directories and exposes an
//!   async [`Walker::next`] that lists one directory per call. Nothing is read
//!   ahead of the consumer.
//! - [`DirListing`] is one `(root, dirs, files)` triple.
//! - [`FileIterator`] and [`DirIterator`] flatten the same walk into
//!   `(parent, name)` pairs for files or subdirectories.
//! - [`WalkBuilder`] configures classification failures, entry sorting and an
//!   error callback.
//! - [`DirectorySource`] is the seam to the filesystem. [`TokioFs`] is the
//!   production implementation.
//!
//! # Invariants
//!
//! - Every directory that lists successfully is emitted exactly once, before
//!   any of its descendants.
//! - `dirs` and `files` are disjoint and together hold the whole listing,
//!   minus entries that could not be classified.
//! - A failure never stops the walk. An unreadable directory is skipped
//!   together with its subtree and the rest of the tree is still visited.
//! - Symbolic links to directories are descended into like directories. Links
//!   pointing back at an ancestor are not detected and make the walk endless.
//!
//! # Errors
//!
//! Skipped directories and entries are reported three ways: an error-level
//! `tracing` event under the `walk` target, the optional
//! [`WalkBuilder::on_error`] callback, and the list returned by
//! [`Walker::errors`]. Each [`WalkError`] carries the offending path and the
//! underlying [`std::io::Error`].
//!
//! # Examples
//!
//! ```
//! use std::ffi::OsString;
//! use std::fs;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("R");
//! fs::create_dir_all(root.join("A"))?;
//! fs::write(root.join("f.txt"), b"data")?;
//! fs::write(root.join("A").join("g.txt"), b"data")?;
//!
//! let mut walker = walk::walk(&root);
//! let first = walker.next().await.expect("root listing");
//! assert_eq!(first.root(), root.as_path());
//! assert_eq!(first.dirs(), [OsString::from("A")]);
//! assert_eq!(first.files(), [OsString::from("f.txt")]);
//!
//! let second = walker.next().await.expect("child listing");
//! assert_eq!(second.root(), root.join("A"));
//! assert!(walker.next().await.is_none());
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

mod builder;
mod error;
mod flatten;
mod listing;
mod source;
mod walker;


pub use crate::builder::{ClassifyPolicy, WalkBuilder};
pub use crate::error::{WalkError, WalkErrorKind};
pub use crate::flatten::{DirIterator, FileIterator};
pub use crate::listing::DirListing;
pub use crate::source::{DirectorySource, ListError, TokioFs};
pub use crate::walker::Walker;

use std::path::PathBuf;

/// Walks the tree rooted at `root`, yielding one [`DirListing`] per directory.
pub fn walk<P: Into<PathBuf>>(root: P) -> Walker {
    WalkBuilder::new(root).build()
}

/// Walks the tree rooted at `root`, yielding `(parent, file name)` pairs.
pub fn walk_files<P: Into<PathBuf>>(root: P) -> FileIterator {
    WalkBuilder::new(root).files()
}

/// Walks the tree rooted at `root`, yielding `(parent, dir name)` pairs.
pub fn walk_dirs<P: Into<PathBuf>>(root: P) -> DirIterator {
    WalkBuilder::new(root).dirs()
}
