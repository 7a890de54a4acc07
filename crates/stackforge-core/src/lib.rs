//! Stackforge Core - Template Composition Engine
//!
//! This crate provides the domain and application layers for the Stackforge
//! boilerplate generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        stackforge-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Composition Orchestrator        │
//! │   common layer → feature layers →       │
//! │   stack generator (last-write-wins)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, StackGenerator, Registry)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   stackforge-adapters (Infrastructure)  │
//! │ (LocalFilesystem, BuiltinRegistry, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (StackCatalog, LanguageProfile, Plan)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stackforge_core::{
//!     application::ComposeEngine,
//!     domain::{FeatureFlagSet, StackCatalog},
//! };
//!
//! let catalog = StackCatalog::builtin();
//! let flags = FeatureFlagSet::from_keys(["docker", "ci"]);
//!
//! // Adapters are injected by the CLI layer.
//! let engine = ComposeEngine::new(catalog, registry, filesystem);
//! let report = engine.generate("./my-api".as_ref(), "go-fiber", &flags, "my-api")?;
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComposeEngine, GenerationReport,
        ports::{Filesystem, GeneratorRegistry, StackGenerator},
    };
    pub use crate::domain::{
        Category, Difficulty, FeatureFlag, FeatureFlagSet, FileEntry, FilePlan, GenerationContext,
        Language, LanguageProfile, Popularity, RelativePath, StackCatalog, StackDescriptor,
    };
    pub use crate::error::{EngineError, EngineResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
