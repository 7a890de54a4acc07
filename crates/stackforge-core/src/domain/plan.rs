//! File plans: the ordered write list a layer contributes.
//!
//! Layers are pure; they return a [`FilePlan`] and never touch the
//! filesystem themselves. The orchestrator writes plans strictly in layer
//! order, so a later layer overwriting a path written earlier is the designed
//! last-write-wins precedence, not an accident.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A path relative to the generation target directory.
///
/// ## Invariants (enforced by `assert!` in the constructor)
///
/// - non-empty
/// - relative (no root / prefix component)
/// - no `..` traversal
///
/// Violations are programming errors in a generator, not runtime conditions:
/// all paths in this codebase are hardcoded template data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(String);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty, absolute, or contains `..` components.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        assert!(!path.is_empty(), "relative path cannot be empty");
        let p = Path::new(&path);
        for component in p.components() {
            match component {
                Component::RootDir | Component::Prefix(_) => {
                    panic!("absolute paths not allowed: {path}")
                }
                Component::ParentDir => panic!("'..' traversal not allowed: {path}"),
                _ => {}
            }
        }
        Self(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join onto a target directory, producing the on-disk path.
    pub fn resolve(&self, target_dir: &Path) -> PathBuf {
        target_dir.join(&self.0)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RelativePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// One file a layer wants written.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: RelativePath,
    pub content: String,
}

/// Ordered sequence of writes contributed by a single layer.
///
/// Within a plan, order is insertion order. Across plans, the orchestrator
/// preserves layer order (common → features → stack).
#[derive(Debug, Clone, Default)]
pub struct FilePlan {
    entries: Vec<FileEntry>,
}

impl FilePlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file write.
    pub fn push(&mut self, path: impl Into<RelativePath>, content: impl Into<String>) {
        self.entries.push(FileEntry {
            path: path.into(),
            content: content.into(),
        });
    }

    /// Fluent variant of [`push`](Self::push) for builder chains.
    pub fn with(mut self, path: impl Into<RelativePath>, content: impl Into<String>) -> Self {
        self.push(path, content);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_preserves_insertion_order() {
        let plan = FilePlan::new()
            .with("README.md", "a")
            .with("src/main.go", "b");
        let paths: Vec<&str> = plan.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["README.md", "src/main.go"]);
    }

    #[test]
    fn resolve_joins_target_dir() {
        let p = RelativePath::new("src/main.rs");
        assert_eq!(
            p.resolve(Path::new("/tmp/x")),
            PathBuf::from("/tmp/x/src/main.rs")
        );
    }

    #[test]
    #[should_panic(expected = "absolute paths not allowed")]
    fn absolute_path_panics() {
        let _ = RelativePath::new("/etc/passwd");
    }

    #[test]
    #[should_panic(expected = "traversal not allowed")]
    fn parent_traversal_panics() {
        let _ = RelativePath::new("../escape.txt");
    }

    #[test]
    #[should_panic(expected = "cannot be empty")]
    fn empty_path_panics() {
        let _ = RelativePath::new("");
    }
}
