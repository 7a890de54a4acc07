//! Domain layer: pure types and lookups with no I/O.

pub mod catalog;
pub mod context;
pub mod descriptor;
pub mod features;
pub mod plan;
pub mod profile;

pub use catalog::StackCatalog;
pub use context::GenerationContext;
pub use descriptor::{Category, Difficulty, Language, Popularity, StackDescriptor};
pub use features::{FeatureFlag, FeatureFlagSet};
pub use plan::{FileEntry, FilePlan, RelativePath};
pub use profile::LanguageProfile;
