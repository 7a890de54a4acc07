//! Per-invocation generation context.

use std::path::{Path, PathBuf};

use super::{StackDescriptor, features::FeatureFlagSet};

/// Everything one generation call needs, created by the orchestrator at the
/// start of `generate` and discarded when it returns. Layers borrow it
/// read-only; nothing in here is shared across invocations.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    target_dir: PathBuf,
    descriptor: StackDescriptor,
    flags: FeatureFlagSet,
    project_name: String,
}

impl GenerationContext {
    pub fn new(
        target_dir: impl Into<PathBuf>,
        descriptor: StackDescriptor,
        flags: FeatureFlagSet,
        project_name: impl Into<String>,
    ) -> Self {
        Self {
            target_dir: target_dir.into(),
            descriptor,
            flags,
            project_name: project_name.into(),
        }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn descriptor(&self) -> &StackDescriptor {
        &self.descriptor
    }

    pub fn flags(&self) -> &FeatureFlagSet {
        &self.flags
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }
}
