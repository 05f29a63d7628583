//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` path, or the default location if it exists)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default rename rules, used when `apply` gets no `--match` flags.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Default rule list for runs without explicit `--match`/`--replace` flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub rules: Vec<RuleEntry>,
}

/// One `find`/`replace` pair as it appears in the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleEntry {
    pub find: String,
    pub replace: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// "auto", "human", "plain", or "json".
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        // The one rule the original migration script shipped with. Every
        // other historical rule stays disabled; callers supply their own.
        Self {
            rules: vec![RuleEntry {
                find: "GD0".into(),
                replace: "BR0".into(),
            }],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` path must exist and parse; the default
    /// location is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.renamo.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "renamo", "renamo")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(Self::local_config_path)
    }

    /// Path of a per-project config file in the current directory.
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(".renamo.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rule_is_the_active_migration_pair() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.rules.len(), 1);
        assert_eq!(cfg.defaults.rules[0].find, "GD0");
        assert_eq!(cfg.defaults.rules[0].replace, "BR0");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn parses_partial_file() {
        // Missing sections fall back to defaults.
        let cfg: AppConfig = toml::from_str("[output]\nno_color = true\n").unwrap();
        assert!(cfg.output.no_color);
        assert_eq!(cfg.defaults.rules[0].find, "GD0");
    }

    #[test]
    fn parses_rule_list() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [[defaults.rules]]
            find = "Godot"
            replace = "Bradot"

            [[defaults.rules]]
            find = ".gd"
            replace = ".br"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.defaults.rules.len(), 2);
        assert_eq!(cfg.defaults.rules[1].replace, ".br");
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = AppConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.defaults.rules[0].find, "GD0");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = PathBuf::from("/renamo/no/such/config.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
