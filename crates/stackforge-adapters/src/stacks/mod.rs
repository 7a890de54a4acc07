//! Bespoke stack generators.
//!
//! One module per language family. Each generator owns the full idiomatic
//! layout for its stack: manifest, entry point with a health endpoint,
//! `.env.example`, and a stack-tailored ignore file that overwrites the
//! common layer's generic one.

pub mod go;
pub mod mobile;
pub mod node;
pub mod python;
pub mod rust;

use stackforge_core::application::ports::StackGenerator;

/// All generators shipped with the binary, one per bespoke catalog entry.
pub fn builtin_generators() -> Vec<Box<dyn StackGenerator>> {
    vec![
        Box::new(node::ExpressApi),
        Box::new(node::NestjsApi),
        Box::new(python::FastapiModern),
        Box::new(python::FlaskApi),
        Box::new(python::DjangoPro),
        Box::new(go::GoFiber),
        Box::new(go::GoHtmx),
        Box::new(rust::RustAxum),
        Box::new(mobile::ReactNative),
        Box::new(mobile::FlutterApp),
    ]
}
