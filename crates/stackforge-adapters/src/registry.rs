//! Builtin generator registry.
//!
//! An explicit id → generator map. Catalog entries without a bespoke
//! generator here are still valid; the engine degrades to its
//! basic-structure fallback for them.

use std::collections::HashMap;

use stackforge_core::application::ports::{GeneratorRegistry, StackGenerator};
use tracing::debug;

use crate::stacks;

/// Registry holding the bespoke stack generators shipped with the binary.
pub struct BuiltinRegistry {
    generators: HashMap<&'static str, Box<dyn StackGenerator>>,
}

impl BuiltinRegistry {
    /// Empty registry; mostly useful in tests exercising the fallback path.
    pub fn empty() -> Self {
        Self {
            generators: HashMap::new(),
        }
    }

    /// Registry with every builtin generator installed.
    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        for generator in stacks::builtin_generators() {
            registry.register(generator);
        }
        registry
    }

    /// Install a generator, replacing any previous one for the same id.
    pub fn register(&mut self, generator: Box<dyn StackGenerator>) {
        let id = generator.stack_id();
        if self.generators.insert(id, generator).is_some() {
            debug!(stack = id, "replaced existing generator registration");
        }
    }
}

impl GeneratorRegistry for BuiltinRegistry {
    fn generator_for(&self, stack_id: &str) -> Option<&dyn StackGenerator> {
        self.generators.get(stack_id).map(|g| g.as_ref())
    }

    fn registered_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.generators.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackforge_core::domain::StackCatalog;

    #[test]
    fn every_registered_id_exists_in_the_catalog() {
        let catalog = StackCatalog::builtin();
        let registry = BuiltinRegistry::with_builtin();
        for id in registry.registered_ids() {
            assert!(
                catalog.lookup(id).is_some(),
                "generator `{id}` has no catalog entry"
            );
        }
    }

    #[test]
    fn lookup_misses_return_none() {
        let registry = BuiltinRegistry::with_builtin();
        assert!(registry.generator_for("laravel-api").is_none());
        assert!(registry.generator_for("no-such-stack").is_none());
        assert!(registry.generator_for("go-fiber").is_some());
    }

    #[test]
    fn builtin_generator_ids_match_their_registration_keys() {
        let registry = BuiltinRegistry::with_builtin();
        for id in registry.registered_ids() {
            let generator = registry.generator_for(id).expect("registered");
            assert_eq!(generator.stack_id(), id);
        }
    }
}
