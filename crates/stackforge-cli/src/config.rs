//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The CLI
//! layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (TOML)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Stack to use when `--stack` is omitted.
    pub stack: Option<String>,
    /// Features enabled on every `new` invocation, merged with `--features`.
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; `None` uses
    /// the default location. A missing file is not an error (defaults apply);
    /// an unreadable or unparsable file is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        if !path.exists() {
            // Only an explicitly-passed path is required to exist.
            if config_file.is_some() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("invalid config at {}: {e}", path.display()))?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stackforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stackforge", "stackforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stackforge.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_are_empty() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.stack.is_none());
        assert!(cfg.defaults.features.is_empty());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn load_parses_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[defaults]\nstack = \"go-fiber\"\nfeatures = [\"docker\"]\n\n[output]\nno_color = true"
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.defaults.stack.as_deref(), Some("go-fiber"));
        assert_eq!(cfg.defaults.features, vec!["docker"]);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn load_partial_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nno_color = true").unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert!(cfg.defaults.stack.is_none());
        assert!(cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_path_is_nonempty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
