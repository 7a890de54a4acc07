//! Generation layers and the feature composer.
//!
//! A generation run is a fixed pipeline of layers, each contributing a
//! [`FilePlan`]:
//!
//! 1. common layer: always runs first ([`common`])
//! 2. feature layers: container → ci → editor, each gated on its flag
//! 3. stack-specific generator: always runs last (dispatched by the
//!    orchestrator, not selected here)
//!
//! The order is a policy of this module, independent of the order the caller
//! supplied feature flags. Each feature layer sees only the stack's language;
//! it has no visibility into, and must not depend on, what other layers wrote.

pub mod ci;
pub mod common;
pub mod container;
pub mod editor;

use crate::domain::{FeatureFlag, FeatureFlagSet, FilePlan, Language};

/// One optional generation step gated on a feature flag.
pub trait FeatureLayer: Send + Sync {
    /// Short name used in logs and error reporting ("container", "ci", ...).
    fn name(&self) -> &'static str;

    /// The flag that enables this layer.
    fn flag(&self) -> FeatureFlag;

    /// Produce this layer's files. Input is deliberately just the language;
    /// feature layers are stack-agnostic.
    fn render(&self, language: Language) -> FilePlan;
}

/// Fixed pipeline order. Absence of a flag is a no-op, not an error.
static PIPELINE: [&dyn FeatureLayer; 3] = [
    &container::ContainerLayer,
    &ci::CiLayer,
    &editor::EditorLayer,
];

/// Select the enabled feature layers in their fixed order.
pub fn select_layers(flags: &FeatureFlagSet) -> Vec<&'static dyn FeatureLayer> {
    PIPELINE
        .iter()
        .copied()
        .filter(|layer| flags.contains(layer.flag()))
        .collect()
}
