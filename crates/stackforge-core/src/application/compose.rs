//! Composition Orchestrator - the engine entry point.
//!
//! `generate` walks a fixed pipeline:
//!
//! ```text
//! Idle → ValidatingTarget → RunningCommonLayer → RunningFeatureLayers
//!      → RunningStackGenerator → Done   (Failed reachable from any state)
//! ```
//!
//! Validation failures (`UnknownStack`, `TargetExists`) happen before any
//! filesystem operation. Once writing starts, a failure aborts the remaining
//! pipeline and **retains partial output**; there is no rollback. The error
//! carries the failing layer and path so the caller can tell the user to
//! remove the directory and retry.
//!
//! Layers run strictly sequentially; later layers may overwrite earlier
//! layers' paths (last-write-wins), which is why nothing here is concurrent.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        layers::{self, common},
        ports::{Filesystem, GeneratorRegistry, StackGenerator},
    },
    domain::{FeatureFlagSet, FilePlan, GenerationContext, RelativePath, StackCatalog,
        StackDescriptor},
    error::{EngineError, EngineResult},
};

/// Result of a successful generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// The resolved catalog descriptor.
    pub descriptor: StackDescriptor,
    /// Relative paths written, in first-write order (overwrites deduplicated).
    pub written: Vec<RelativePath>,
    /// `true` when the stack had no bespoke generator and the
    /// basic-structure fallback produced the stack layer.
    pub fallback_used: bool,
}

/// The composition engine.
///
/// Holds the read-only catalog and the injected ports. Safe to share across
/// threads for independent target directories; there is no mutable state
/// beyond the target directory itself, which each call owns exclusively.
pub struct ComposeEngine {
    catalog: StackCatalog,
    registry: Box<dyn GeneratorRegistry>,
    filesystem: Box<dyn Filesystem>,
}

impl ComposeEngine {
    pub fn new(
        catalog: StackCatalog,
        registry: Box<dyn GeneratorRegistry>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            catalog,
            registry,
            filesystem,
        }
    }

    /// Generate a project skeleton.
    ///
    /// # Errors
    ///
    /// - [`EngineError::UnknownStack`]: id absent from the catalog; nothing
    ///   was written.
    /// - [`EngineError::TargetExists`]: the target directory already exists;
    ///   nothing inside it was touched.
    /// - [`EngineError::Filesystem`]: a write failed; partial output remains.
    #[instrument(skip_all, fields(stack = stack_id, project = project_name))]
    pub fn generate(
        &self,
        target_dir: &Path,
        stack_id: &str,
        flags: &FeatureFlagSet,
        project_name: &str,
    ) -> EngineResult<GenerationReport> {
        // ── ValidatingTarget ─────────────────────────────────────────────
        let descriptor = self
            .catalog
            .lookup(stack_id)
            .ok_or_else(|| EngineError::UnknownStack {
                id: stack_id.to_string(),
            })?
            .clone();

        if self.filesystem.exists(target_dir) {
            return Err(EngineError::TargetExists {
                path: target_dir.to_path_buf(),
            });
        }

        info!(language = %descriptor.language, "generation started");

        let ctx = GenerationContext::new(target_dir, descriptor, flags.clone(), project_name);
        let mut written: Vec<RelativePath> = Vec::new();
        let mut seen: HashSet<RelativePath> = HashSet::new();

        // ── RunningCommonLayer ───────────────────────────────────────────
        self.filesystem
            .create_dir_all(target_dir)
            .map_err(|e| EngineError::Filesystem {
                layer: "common",
                path: target_dir.to_path_buf(),
                reason: e.reason,
            })?;
        self.write_plan("common", &common::render(&ctx), &ctx, &mut written, &mut seen)?;

        // ── RunningFeatureLayers ─────────────────────────────────────────
        for layer in layers::select_layers(ctx.flags()) {
            debug!(layer = layer.name(), "feature layer enabled");
            let plan = layer.render(ctx.descriptor().language);
            self.write_plan(layer.name(), &plan, &ctx, &mut written, &mut seen)?;
        }

        // ── RunningStackGenerator ────────────────────────────────────────
        let (plan, fallback_used) = match self.registry.generator_for(stack_id) {
            Some(generator) => (generator.compose(&ctx), false),
            None => {
                debug!("no bespoke generator registered, using basic structure fallback");
                (BasicStructureGenerator.compose(&ctx), true)
            }
        };
        self.write_plan("stack", &plan, &ctx, &mut written, &mut seen)?;

        // ── Done ─────────────────────────────────────────────────────────
        info!(files = written.len(), fallback = fallback_used, "generation completed");
        Ok(GenerationReport {
            descriptor: ctx.descriptor().clone(),
            written,
            fallback_used,
        })
    }

    /// Write one layer's plan in order, creating parent directories on
    /// demand. Overwriting a path written by an earlier layer is expected.
    fn write_plan(
        &self,
        layer: &'static str,
        plan: &FilePlan,
        ctx: &GenerationContext,
        written: &mut Vec<RelativePath>,
        seen: &mut HashSet<RelativePath>,
    ) -> EngineResult<()> {
        for entry in plan.iter() {
            let path = entry.path.resolve(ctx.target_dir());

            if let Some(parent) = path.parent() {
                self.filesystem
                    .create_dir_all(parent)
                    .map_err(|e| EngineError::Filesystem {
                        layer,
                        path: parent.to_path_buf(),
                        reason: e.reason,
                    })?;
            }

            self.filesystem
                .write_file(&path, &entry.content)
                .map_err(|e| EngineError::Filesystem {
                    layer,
                    path: path.clone(),
                    reason: e.reason,
                })?;

            if seen.insert(entry.path.clone()) {
                written.push(entry.path.clone());
            }
        }
        Ok(())
    }
}

/// Fallback for catalog entries with no bespoke generator: generation still
/// succeeds structurally, producing a single placeholder note.
struct BasicStructureGenerator;

impl StackGenerator for BasicStructureGenerator {
    fn stack_id(&self) -> &'static str {
        "basic-structure"
    }

    fn compose(&self, ctx: &GenerationContext) -> FilePlan {
        let descriptor = ctx.descriptor();
        let note = format!(
            "# {name}\n\n\
             Stackforge does not ship a full template for `{id}` yet.\n\
             This directory contains the shared scaffolding only; consult the\n\
             {name} documentation for the idiomatic project layout.\n",
            name = descriptor.name,
            id = descriptor.id,
        );
        FilePlan::new().with("GETTING_STARTED.md", note)
    }
}
