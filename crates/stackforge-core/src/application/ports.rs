//! Driven ports - implemented by infrastructure.
//!
//! These traits define what the engine needs from external systems.
//! The `stackforge-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{FilePlan, GenerationContext};

/// Error from a filesystem adapter. The engine wraps it into
/// [`crate::error::EngineError::Filesystem`] together with the layer name and
/// path, so adapters only supply the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsError {
    pub reason: String,
}

impl FsError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for FsError {}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stackforge_adapters::filesystem::LocalFilesystem` (production)
/// - `stackforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), FsError>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), FsError>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// A stack-specific generator: knows the full idiomatic file layout for one
/// stack (manifest, entry point, routes, env example).
///
/// Generators are pure; `compose` returns a plan; the orchestrator writes it.
/// A generator may emit paths the common or feature layers already wrote
/// (e.g. a stack-tailored ignore file); since the stack layer runs last, its
/// content wins.
pub trait StackGenerator: Send + Sync {
    /// The catalog id this generator serves.
    fn stack_id(&self) -> &'static str;

    /// Produce the stack-specific file plan.
    fn compose(&self, ctx: &GenerationContext) -> FilePlan;
}

/// Port for generator lookup.
///
/// Implemented by `stackforge_adapters::registry::BuiltinRegistry`: an
/// explicit id → strategy map rather than a string `switch` with a default
/// arm. A `None` here is *not* an error; the orchestrator falls back to the
/// basic-structure generator for catalog entries without bespoke support.
pub trait GeneratorRegistry: Send + Sync {
    /// Find the bespoke generator for a stack id, if one is registered.
    fn generator_for(&self, stack_id: &str) -> Option<&dyn StackGenerator>;

    /// All registered stack ids (for registry/catalog validation).
    fn registered_ids(&self) -> Vec<&'static str>;
}
