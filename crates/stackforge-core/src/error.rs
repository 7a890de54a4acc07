//! Unified error handling for the composition engine.
//!
//! The taxonomy is deliberately small: generation either never starts
//! (`UnknownStack`, `TargetExists`; zero side effects) or aborts mid-pipeline
//! (`Filesystem`; partial output retained on disk). Unsupported languages are
//! *not* errors; they degrade to the fallback language profile.

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for a generation run.
///
/// All errors are:
/// - Cloneable (callers may re-surface them after logging)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// The stack id is not present in the catalog. Surfaced before any
    /// filesystem operation; the target directory is never created.
    #[error("unknown stack '{id}'")]
    UnknownStack { id: String },

    /// The target directory already exists. Generation never merges into an
    /// existing directory; nothing inside it is created or modified.
    #[error("target directory already exists: {path}")]
    TargetExists { path: PathBuf },

    /// A directory or file write failed. The pipeline stops at the failing
    /// layer and already-written files are left on disk; there is no
    /// rollback. `layer` names the pipeline stage for precise reporting.
    #[error("filesystem error in {layer} layer at {path}: {reason}")]
    Filesystem {
        layer: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl EngineError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownStack { id } => vec![
                format!("'{}' is not a known stack", id),
                "Run: stackforge list".into(),
            ],
            Self::TargetExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different project name".into(),
                format!("Or remove it first: rm -rf {}", path.display()),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check permissions and available disk space".into(),
                "Partially generated output was left in place; remove the directory and retry"
                    .into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Stackforge".into(),
                "Please report this issue at: https://github.com/stackforge/stackforge/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownStack { .. } => ErrorCategory::NotFound,
            Self::TargetExists { .. } => ErrorCategory::Validation,
            Self::Filesystem { .. } | Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` when the error was raised before any filesystem write.
    pub fn is_side_effect_free(&self) -> bool {
        matches!(self, Self::UnknownStack { .. } | Self::TargetExists { .. })
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_stack_is_side_effect_free() {
        let err = EngineError::UnknownStack { id: "nope".into() };
        assert!(err.is_side_effect_free());
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn target_exists_is_side_effect_free() {
        let err = EngineError::TargetExists {
            path: PathBuf::from("/tmp/x"),
        };
        assert!(err.is_side_effect_free());
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn filesystem_error_names_layer_and_path() {
        let err = EngineError::Filesystem {
            layer: "common",
            path: PathBuf::from("/tmp/x/README.md"),
            reason: "disk full".into(),
        };
        assert!(!err.is_side_effect_free());
        let msg = err.to_string();
        assert!(msg.contains("common"));
        assert!(msg.contains("README.md"));
    }

    #[test]
    fn filesystem_suggestions_mention_partial_output() {
        let err = EngineError::Filesystem {
            layer: "stack",
            path: PathBuf::from("x"),
            reason: "denied".into(),
        };
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("remove the directory"))
        );
    }
}
