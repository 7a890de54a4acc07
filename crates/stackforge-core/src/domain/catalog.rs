//! The static stack catalog.
//!
//! Built once at process start via [`StackCatalog::builtin`] and read-only for
//! the process lifetime. The engine only uses [`lookup`](StackCatalog::lookup);
//! the listing projections exist for the CLI `list` command.

use super::descriptor::{Category, Difficulty, Language, Popularity, StackDescriptor};

/// Read-only registry of stack descriptors.
///
/// Every id in here must be resolvable by the generator registry; bespoke
/// generators where they exist, the basic-structure fallback otherwise. That
/// invariant is checked by the adapter crate's registry tests rather than at
/// runtime.
#[derive(Debug, Clone)]
pub struct StackCatalog {
    stacks: Vec<StackDescriptor>,
}

impl StackCatalog {
    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        use Category::*;
        use Difficulty::*;
        use Language::*;
        use Popularity::*;

        let stacks = vec![
            StackDescriptor::new(
                "express-api",
                "Express API",
                "REST API on Express with layered routes and middleware",
                JavaScript,
                Api,
            )
            .features(vec!["REST routing", "CORS", "dotenv config", "Jest-ready"])
            .popularity(High)
            .difficulty(Beginner),
            StackDescriptor::new(
                "nestjs-api",
                "NestJS API",
                "Modular TypeScript API with dependency injection",
                TypeScript,
                Api,
            )
            .features(vec![
                "Modules & providers",
                "Validation pipes",
                "OpenAPI-ready",
            ])
            .popularity(High)
            .difficulty(Intermediate),
            StackDescriptor::new(
                "fastapi-modern",
                "FastAPI (modern)",
                "Async Python API with pydantic settings and versioned routes",
                Python,
                Api,
            )
            .features(vec![
                "Async endpoints",
                "Pydantic settings",
                "CORS middleware",
                "Versioned API router",
            ])
            .popularity(High)
            .difficulty(Intermediate),
            StackDescriptor::new(
                "flask-api",
                "Flask API",
                "Flask application factory with blueprints and SQLAlchemy",
                Python,
                Api,
            )
            .features(vec![
                "Application factory",
                "Blueprints",
                "SQLAlchemy + migrations",
            ])
            .popularity(Medium)
            .difficulty(Beginner),
            StackDescriptor::new(
                "django-pro",
                "Django (pro)",
                "Django project with split settings and a versioned API app",
                Python,
                Web,
            )
            .features(vec![
                "Split settings",
                "apps/ layout",
                "Versioned API URLs",
            ])
            .popularity(High)
            .difficulty(Advanced),
            StackDescriptor::new(
                "go-fiber",
                "Go Fiber",
                "Express-style Go API on Fiber",
                Go,
                Api,
            )
            .features(vec!["Fiber router", "Middleware", "dotenv config"])
            .popularity(Growing)
            .difficulty(Intermediate),
            StackDescriptor::new(
                "go-htmx",
                "Go + HTMX",
                "Server-rendered Go web app with chi and HTMX fragments",
                Go,
                Web,
            )
            .features(vec!["chi router", "HTMX partials", "Static file serving"])
            .popularity(Growing)
            .difficulty(Intermediate),
            StackDescriptor::new(
                "rust-axum",
                "Rust Axum",
                "Async Rust API on axum with tokio",
                Rust,
                Api,
            )
            .features(vec!["axum router", "tokio runtime", "tracing"])
            .popularity(Growing)
            .difficulty(Advanced),
            StackDescriptor::new(
                "react-native",
                "React Native",
                "Cross-platform mobile app with TypeScript",
                TypeScript,
                Mobile,
            )
            .features(vec!["Expo-ready", "TypeScript", "Component structure"])
            .popularity(High)
            .difficulty(Intermediate),
            StackDescriptor::new(
                "flutter-app",
                "Flutter App",
                "Cross-platform mobile app in Dart",
                Dart,
                Mobile,
            )
            .features(vec!["Material widgets", "Widget tests"])
            .popularity(High)
            .difficulty(Intermediate),
            // Catalog-only entries: no bespoke generator yet, served by the
            // basic-structure fallback.
            StackDescriptor::new(
                "laravel-api",
                "Laravel API",
                "PHP API on Laravel",
                Php,
                Api,
            )
            .popularity(Medium)
            .difficulty(Intermediate),
            StackDescriptor::new(
                "spring-boot",
                "Spring Boot",
                "Java service on Spring Boot",
                Java,
                Api,
            )
            .popularity(High)
            .difficulty(Advanced),
        ];

        Self { stacks }
    }

    /// Look up a descriptor by id.
    pub fn lookup(&self, stack_id: &str) -> Option<&StackDescriptor> {
        self.stacks.iter().find(|s| s.id == stack_id)
    }

    /// All descriptors, catalog order.
    pub fn all(&self) -> &[StackDescriptor] {
        &self.stacks
    }

    pub fn by_language(&self, language: Language) -> Vec<&StackDescriptor> {
        self.stacks
            .iter()
            .filter(|s| s.language == language)
            .collect()
    }

    pub fn by_category(&self, category: Category) -> Vec<&StackDescriptor> {
        self.stacks
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let catalog = StackCatalog::builtin();
        let mut seen = std::collections::HashSet::new();
        for stack in catalog.all() {
            assert!(seen.insert(stack.id), "duplicate id: {}", stack.id);
        }
    }

    #[test]
    fn lookup_finds_known_and_rejects_unknown() {
        let catalog = StackCatalog::builtin();
        assert!(catalog.lookup("go-fiber").is_some());
        assert!(catalog.lookup("no-such-stack").is_none());
    }

    #[test]
    fn by_language_filters() {
        let catalog = StackCatalog::builtin();
        let python = catalog.by_language(Language::Python);
        assert_eq!(python.len(), 3);
        assert!(python.iter().all(|s| s.language == Language::Python));
    }

    #[test]
    fn by_category_covers_mobile() {
        let catalog = StackCatalog::builtin();
        let mobile = catalog.by_category(Category::Mobile);
        let ids: Vec<&str> = mobile.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["react-native", "flutter-app"]);
    }

    #[test]
    fn every_entry_has_name_and_description() {
        for stack in StackCatalog::builtin().all() {
            assert!(!stack.name.is_empty());
            assert!(!stack.description.is_empty());
        }
    }
}
