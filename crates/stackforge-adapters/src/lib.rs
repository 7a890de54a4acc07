//! Infrastructure adapters for Stackforge.
//!
//! This crate implements the ports defined in
//! `stackforge_core::application::ports`: filesystem access and the builtin
//! stack generator registry. All template payloads live here, keeping the
//! core crate free of stack-specific content.

pub mod filesystem;
pub mod registry;
pub mod stacks;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use registry::BuiltinRegistry;
