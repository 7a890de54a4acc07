//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stackforge_core::application::ports::{Filesystem, FsError};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a directory, for target-exists scenarios.
    pub fn with_dir(path: impl Into<PathBuf>) -> Self {
        let fs = Self::new();
        // create_dir_all on the in-memory map cannot fail.
        let _ = fs.create_dir_all(&path.into());
        fs
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted for stable assertions.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        let mut files: Vec<PathBuf> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    pub fn file_count(&self) -> usize {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.files.len()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| FsError::new("filesystem lock poisoned"))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), FsError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| FsError::new("filesystem lock poisoned"))?;

        // Mirror std::fs::write: the parent must exist.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(FsError::new("parent directory does not exist"));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}
