//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use stackforge_core::application::ports::{Filesystem, FsError};

/// Production filesystem implementation using `std::fs`.
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
    fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), FsError> {
        std::fs::write(path, content).map_err(|e| map_io_error(e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(e: io::Error, operation: &str) -> FsError {
    FsError::new(format!("failed to {operation}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reports_existence() {
        let dir = tempfile::tempdir().expect("tempdir");
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("a/b");

        assert!(!fs.exists(&nested));
        fs.create_dir_all(&nested).expect("mkdir");
        fs.write_file(&nested.join("f.txt"), "hello").expect("write");

        assert!(fs.exists(&nested.join("f.txt")));
        let content = std::fs::read_to_string(nested.join("f.txt")).expect("read");
        assert_eq!(content, "hello");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let fs = LocalFilesystem::new();
        let err = fs
            .write_file(&dir.path().join("missing/f.txt"), "x")
            .unwrap_err();
        assert!(err.reason.contains("failed to write file"));
    }
}
