// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bot configuration (TOML)

use rb_core::RegistryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BotConfig {
    pub registry: RegistryConfig,
    pub tracker: TrackerConfig,
    pub firing: FiringConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// Samples kept per enemy; the oldest is evicted first
    pub history_size: usize,
    /// Most recent samples drawn per enemy on each paint pass
    pub drawn_samples: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            history_size: 20,
            drawn_samples: 10,
        }
    }
}

/// Accuracy thresholds for the accuracy-based firing system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FiringConfig {
    pub fire_max_at: f64,
    pub fire_medium_at: f64,
    pub fire_min_at: f64,
}

impl Default for FiringConfig {
    fn default() -> Self {
        Self {
            fire_max_at: 0.75,
            fire_medium_at: 0.4,
            fire_min_at: 0.2,
        }
    }
}

impl BotConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: BotConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registry.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "registry.max_depth must be at least 1".to_string(),
            ));
        }
        if self.tracker.history_size == 0 {
            return Err(ConfigError::Invalid(
                "tracker.history_size must be at least 1".to_string(),
            ));
        }

        let firing = &self.firing;
        for (name, value) in [
            ("fire_max_at", firing.fire_max_at),
            ("fire_medium_at", firing.fire_medium_at),
            ("fire_min_at", firing.fire_min_at),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "firing.{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        if firing.fire_max_at < firing.fire_medium_at || firing.fire_medium_at < firing.fire_min_at
        {
            return Err(ConfigError::Invalid(
                "firing thresholds must satisfy fire_max_at >= fire_medium_at >= fire_min_at"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
