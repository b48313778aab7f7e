//! Top-level jump configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{PruneConfig, SearchConfig, UpdateConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`JUMP_*`)
/// 3. Config file (`$XDG_CONFIG_HOME/jump/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JumpConfig {
    /// Paths containing any of these substrings are never recorded and get pruned.
    pub exclude_patterns: Vec<String>,
    pub search: SearchConfig,
    pub prune: PruneConfig,
    pub update: UpdateConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub time_matching: Option<bool>,
    pub search_count: Option<usize>,
    pub max_entries: Option<usize>,
    pub update_weight: Option<f64>,
}

impl JumpConfig {
    /// Load configuration from `path`, then apply env and CLI layers.
    ///
    /// A missing file yields defaults.
    pub fn load(path: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if path.exists() {
            Self::merge_toml_file(&mut config, path)?;
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
        }

        Self::from_layers(config, cli_overrides)
    }

    /// Apply env and CLI layers on top of `base`, then validate.
    pub fn from_layers(
        mut base: JumpConfig,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        Self::apply_env_overrides(&mut base);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut base, cli);
        }

        Self::validate(&base)?;

        Ok(base)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &JumpConfig) -> Result<(), ConfigError> {
        if let Some(weight) = config.update.weight {
            if weight == 0.0 || !weight.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: "update.weight".to_string(),
                    message: "must be a finite, non-zero number".to_string(),
                });
            }
        }
        if config.search.count == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "search.count".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut JumpConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: JumpConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value.
    fn merge(base: &mut JumpConfig, other: &JumpConfig) {
        if !other.exclude_patterns.is_empty() {
            base.exclude_patterns = other.exclude_patterns.clone();
        }
        if other.search.time_matching.is_some() {
            base.search.time_matching = other.search.time_matching;
        }
        if other.search.count.is_some() {
            base.search.count = other.search.count;
        }
        if other.prune.max_entries.is_some() {
            base.prune.max_entries = other.prune.max_entries;
        }
        if other.update.weight.is_some() {
            base.update.weight = other.update.weight;
        }
    }

    /// Apply environment variable overrides.
    /// Unparsable values are ignored.
    fn apply_env_overrides(config: &mut JumpConfig) {
        if let Ok(val) = std::env::var("JUMP_TIME_MATCHING") {
            if let Ok(v) = val.parse::<bool>() {
                config.search.time_matching = Some(v);
            }
        }
        if let Ok(val) = std::env::var("JUMP_MAX_ENTRIES") {
            if let Ok(v) = val.parse::<usize>() {
                config.prune.max_entries = Some(v);
            }
        }
        if let Ok(val) = std::env::var("JUMP_UPDATE_WEIGHT") {
            if let Ok(v) = val.parse::<f64>() {
                config.update.weight = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut JumpConfig, cli: &CliOverrides) {
        if let Some(v) = cli.time_matching {
            config.search.time_matching = Some(v);
        }
        if let Some(v) = cli.search_count {
            config.search.count = Some(v);
        }
        if let Some(v) = cli.max_entries {
            config.prune.max_entries = Some(v);
        }
        if let Some(v) = cli.update_weight {
            config.update.weight = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// True if `path` contains any configured exclude pattern.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclude_patterns
            .iter()
            .any(|pattern| !pattern.is_empty() && path.contains(pattern.as_str()))
    }
}
