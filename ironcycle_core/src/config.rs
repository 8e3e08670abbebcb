//! Configuration file support for Ironcycle.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/ironcycle/config.toml`.
//!
//! The recovery constants are empirical: they ship with the values the
//! analyzer was tuned with, and are exposed here as named, overridable
//! settings rather than buried literals.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub recovery: RecoveryConfig,
}

/// Recovery analyzer constants
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Absolute weekly weighted-set ceiling per muscle; volume above this
    /// always flags a recovery risk
    #[serde(default = "default_volume_ceiling")]
    pub volume_ceiling: f64,

    /// Base fraction of week-over-week growth tolerated before a spike
    /// is flagged
    #[serde(default = "default_spike_base")]
    pub spike_base: f64,

    /// Divisor applied to the global strength score when widening the
    /// spike tolerance for stronger lifters
    #[serde(default = "default_spike_score_divisor")]
    pub spike_score_divisor: f64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            volume_ceiling: default_volume_ceiling(),
            spike_base: default_spike_base(),
            spike_score_divisor: default_spike_score_divisor(),
        }
    }
}

fn default_volume_ceiling() -> f64 {
    20.0
}

fn default_spike_base() -> f64 {
    0.25
}

fn default_spike_score_divisor() -> f64 {
    250.0
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("ironcycle").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
