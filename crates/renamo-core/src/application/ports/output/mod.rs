//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `renamo-adapters` crate provides the filesystem implementations; the
//! CLI provides the console notifier.

use std::path::Path;

use crate::domain::{RenameRecord, SkipRecord};
use crate::error::RenamoResult;

/// What kind of directory entry a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file, a rename candidate.
    File,
    /// A directory, recursed into but never renamed.
    Directory,
    /// Symlinks and anything else, neither renamed nor followed.
    Other,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `renamo_adapters::filesystem::LocalFilesystem` (production)
/// - `renamo_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `list_dir` returns one level only; the service owns the recursion so a
///   rename can never perturb an iterator held by the adapter.
/// - Entries with names that are not valid Unicode are reported as
///   `EntryKind::Other`; rewriting them with string rules is not possible.
pub trait Filesystem: Send + Sync {
    /// `true` if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// `true` if anything (file or directory) exists at the path.
    fn exists(&self, path: &Path) -> bool;

    /// List the direct children of a directory, sorted by name.
    fn list_dir(&self, path: &Path) -> RenamoResult<Vec<TreeEntry>>;

    /// Rename `from` to `to`. Both paths are in the same directory.
    fn rename(&self, from: &Path, to: &Path) -> RenamoResult<()>;
}

/// Port for streaming per-file feedback.
///
/// The service calls these at the point of occurrence so the user sees
/// progress while the traversal runs, rather than only in the final report.
pub trait Notifier: Send + Sync {
    /// A file was renamed (or would be, in dry-run mode).
    fn renamed(&self, record: &RenameRecord);

    /// A matching file was skipped.
    fn skipped(&self, record: &SkipRecord);
}

/// Notifier that discards all events. Useful when only the final
/// [`crate::domain::RenameReport`] matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn renamed(&self, _record: &RenameRecord) {}
    fn skipped(&self, _record: &SkipRecord) {}
}
