//! Application layer: the composition pipeline and its ports.

pub mod compose;
pub mod layers;
pub mod ports;

pub use compose::{ComposeEngine, GenerationReport};
