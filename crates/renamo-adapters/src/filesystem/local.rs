//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use renamo_core::{
    application::ports::{EntryKind, Filesystem, TreeEntry},
    error::RenamoResult,
};

/// Production filesystem implementation.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a broken symlink still counts as occupying
        // the name; renaming onto it would clobber the link.
        path.symlink_metadata().is_ok()
    }

    fn list_dir(&self, path: &Path) -> RenamoResult<Vec<TreeEntry>> {
        let mut entries = Vec::new();
        // One level only; the service owns the recursion so renames never
        // race a directory iterator.
        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| map_walk_error(path, e))?;
            let file_type = entry.file_type();
            let kind = if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::Other
            };
            match entry.file_name().to_str() {
                Some(name) => entries.push(TreeEntry::new(name, kind)),
                None => {
                    // Not representable as UTF-8, so substring rules cannot
                    // apply. Surface it as Other so it is counted nowhere.
                    debug!(dir = %path.display(), "Entry with non-Unicode name ignored");
                    entries.push(TreeEntry::new(
                        entry.file_name().to_string_lossy(),
                        EntryKind::Other,
                    ));
                }
            }
        }
        Ok(entries)
    }

    fn rename(&self, from: &Path, to: &Path) -> RenamoResult<()> {
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, "rename file"))
    }
}

fn map_io_error(
    path: &Path,
    e: io::Error,
    operation: &str,
) -> renamo_core::error::RenamoError {
    use renamo_core::application::ApplicationError;

    if e.kind() == io::ErrorKind::PermissionDenied {
        return ApplicationError::PermissionDenied {
            path: path.to_path_buf(),
        }
        .into();
    }
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

fn map_walk_error(path: &Path, e: walkdir::Error) -> renamo_core::error::RenamoError {
    use renamo_core::application::ApplicationError;

    if let Some(io_err) = e.io_error() {
        if io_err.kind() == io::ErrorKind::PermissionDenied {
            return ApplicationError::PermissionDenied {
                path: e
                    .path()
                    .unwrap_or(path)
                    .to_path_buf(),
            }
            .into();
        }
    }
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to list directory: {}", e),
    }
    .into()
}
