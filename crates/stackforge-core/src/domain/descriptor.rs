//! Stack descriptors: the static metadata for one scaffoldable stack.
//!
//! A [`StackDescriptor`] is pure configuration. Instances are created once at
//! process start by [`crate::domain::StackCatalog::builtin`] and never mutated
//! afterwards; no component may write to the catalog after construction.

use std::fmt;

use serde::Serialize;

/// Languages the builtin catalog covers.
///
/// The enum is closed on purpose: stack ids are open strings (the registry is
/// data-driven), but every catalog entry must name a language we can at least
/// degrade gracefully for. Languages without a first-class
/// [`crate::domain::LanguageProfile`] (currently PHP and Java) resolve to the
/// generic fallback profile instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Go,
    Rust,
    Dart,
    Php,
    Java,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JavaScript => write!(f, "javascript"),
            Self::TypeScript => write!(f, "typescript"),
            Self::Python => write!(f, "python"),
            Self::Go => write!(f, "go"),
            Self::Rust => write!(f, "rust"),
            Self::Dart => write!(f, "dart"),
            Self::Php => write!(f, "php"),
            Self::Java => write!(f, "java"),
        }
    }
}

/// Coarse grouping used by the `list` command projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Server-rendered or full web applications.
    Web,
    /// HTTP/JSON API services.
    Api,
    /// Mobile applications.
    Mobile,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Web => write!(f, "web"),
            Self::Api => write!(f, "api"),
            Self::Mobile => write!(f, "mobile"),
        }
    }
}

/// Rough adoption signal, display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Popularity {
    High,
    Growing,
    Medium,
}

impl fmt::Display for Popularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Growing => write!(f, "growing"),
            Self::Medium => write!(f, "medium"),
        }
    }
}

/// How much experience the generated stack assumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// One entry in the stack catalog.
///
/// `id` uniquely identifies the stack and is the dispatch key into the
/// generator registry. `features` is a human-readable bullet list for the
/// README and `list` output; it is *not* the feature-flag vocabulary
/// (see [`crate::domain::FeatureFlagSet`] for that).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub language: Language,
    pub features: Vec<&'static str>,
    pub category: Category,
    pub popularity: Popularity,
    pub difficulty: Difficulty,
}

impl StackDescriptor {
    pub fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        language: Language,
        category: Category,
    ) -> Self {
        Self {
            id,
            name,
            description,
            language,
            features: Vec::new(),
            category,
            popularity: Popularity::Medium,
            difficulty: Difficulty::Intermediate,
        }
    }

    pub fn features(mut self, features: Vec<&'static str>) -> Self {
        self.features = features;
        self
    }

    pub fn popularity(mut self, popularity: Popularity) -> Self {
        self.popularity = popularity;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

impl fmt::Display for StackDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.language)
    }
}
