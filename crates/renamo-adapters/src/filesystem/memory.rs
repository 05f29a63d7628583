//! In-memory filesystem adapter for testing.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use renamo_core::{
    application::{
        ApplicationError,
        ports::{EntryKind, Filesystem, TreeEntry},
    },
    error::{RenamoError, RenamoResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle for assertions while the
/// service owns a boxed copy.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeSet<PathBuf>,
    directories: BTreeSet<PathBuf>,
    deny_rename: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory, creating all parents (testing helper).
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        let path = path.into();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Add a file, creating parent directories (testing helper).
    pub fn add_file(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.inner.write().unwrap().files.insert(path);
    }

    /// Make every future rename of `path` fail with permission denied.
    pub fn deny_rename(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().deny_rename.insert(path.into());
    }

    /// Snapshot of all file paths, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        self.inner.read().unwrap().files.iter().cloned().collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        self.inner.read().unwrap().directories.contains(path)
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains(path) || inner.directories.contains(path)
    }

    fn list_dir(&self, path: &Path) -> RenamoResult<Vec<TreeEntry>> {
        let inner = self.inner.read().map_err(|_| lock_poisoned())?;
        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to list directory: no such directory".into(),
            }
            .into());
        }

        let mut entries: Vec<TreeEntry> = inner
            .files
            .iter()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name()?.to_str())
            .map(|name| TreeEntry::new(name, EntryKind::File))
            .chain(
                inner
                    .directories
                    .iter()
                    .filter(|p| p.parent() == Some(path))
                    .filter_map(|p| p.file_name()?.to_str())
                    .map(|name| TreeEntry::new(name, EntryKind::Directory)),
            )
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn rename(&self, from: &Path, to: &Path) -> RenamoResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;

        if inner.deny_rename.contains(from) {
            return Err(ApplicationError::PermissionDenied {
                path: from.to_path_buf(),
            }
            .into());
        }
        if inner.files.contains(to) || inner.directories.contains(to) {
            return Err(ApplicationError::FilesystemError {
                path: to.to_path_buf(),
                reason: "Failed to rename file: target already exists".into(),
            }
            .into());
        }
        if !inner.files.remove(from) {
            return Err(ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "Failed to rename file: no such file".into(),
            }
            .into());
        }
        inner.files.insert(to.to_path_buf());
        Ok(())
    }
}

fn lock_poisoned() -> RenamoError {
    RenamoError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_file_creates_parents() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/tree/a/b/file.txt");
        assert!(fs.is_dir(Path::new("/tree/a/b")));
        assert!(fs.exists(Path::new("/tree/a/b/file.txt")));
    }

    #[test]
    fn list_dir_returns_direct_children_only() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/tree/top.txt");
        fs.add_file("/tree/sub/nested.txt");

        let entries = fs.list_dir(Path::new("/tree")).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["sub", "top.txt"]);
    }

    #[test]
    fn rename_refuses_occupied_target() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/tree/a");
        fs.add_file("/tree/b");
        assert!(fs.rename(Path::new("/tree/a"), Path::new("/tree/b")).is_err());
        assert_eq!(fs.files().len(), 2);
    }

    #[test]
    fn deny_rename_raises_permission_denied() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/tree/locked");
        fs.deny_rename("/tree/locked");
        let result = fs.rename(Path::new("/tree/locked"), Path::new("/tree/open"));
        assert!(matches!(
            result,
            Err(RenamoError::Application(
                ApplicationError::PermissionDenied { .. }
            ))
        ));
    }
}
