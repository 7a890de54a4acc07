//! Feature flag selection.
//!
//! Callers pass free-form string keys (`"docker"`, `"ci"`, ...). Recognized
//! keys become [`FeatureFlag`] values; unknown keys are silently dropped;
//! selection is advisory, not a closed vocabulary validated at this layer.
//! The set iterates in a fixed order (`BTreeSet` over the enum discriminant),
//! so composition never depends on the order the caller supplied flags.

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

/// Optional cross-cutting features a caller may request.
///
/// `Docker`, `Ci` and `Vscode` each drive a dedicated feature layer.
/// `Linting`, `Testing` and `Hooks` have no layer of their own; stack
/// generators consult them when curating manifest dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FeatureFlag {
    Docker,
    Ci,
    Vscode,
    Linting,
    Testing,
    Hooks,
}

impl FeatureFlag {
    /// Parse a single key, returning `None` for unrecognized input.
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "docker" => Some(Self::Docker),
            "ci" => Some(Self::Ci),
            "vscode" => Some(Self::Vscode),
            "linting" => Some(Self::Linting),
            "testing" => Some(Self::Testing),
            "hooks" => Some(Self::Hooks),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Docker => "docker",
            Self::Ci => "ci",
            Self::Vscode => "vscode",
            Self::Linting => "linting",
            Self::Testing => "testing",
            Self::Hooks => "hooks",
        }
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of features selected for one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlagSet {
    flags: BTreeSet<FeatureFlag>,
}

impl FeatureFlagSet {
    /// Empty set: only the common and stack layers will run.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build from string keys, ignoring anything unrecognized.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = BTreeSet::new();
        for key in keys {
            let key = key.as_ref();
            match FeatureFlag::parse(key) {
                Some(flag) => {
                    flags.insert(flag);
                }
                None => debug!(key, "ignoring unrecognized feature key"),
            }
        }
        Self { flags }
    }

    pub fn insert(&mut self, flag: FeatureFlag) {
        self.flags.insert(flag);
    }

    pub fn contains(&self, flag: FeatureFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Iterate in the fixed enum order, regardless of insertion order.
    pub fn iter(&self) -> impl Iterator<Item = FeatureFlag> + '_ {
        self.flags.iter().copied()
    }
}

impl fmt::Display for FeatureFlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.flags.iter().map(|fl| fl.as_str()).collect();
        write!(f, "{}", names.join(","))
    }
}
