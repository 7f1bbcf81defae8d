//! Configuration management for margen-calc
//!
//! Config stored at: ~/.config/margen-calc/config.json

use margen_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Exchange rate used to convert local-currency tariffs (ARS per USD)
    #[serde(default = "default_exchange_rate")]
    pub exchange_rate: f64,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// External tariff table override; embedded reference table if unset
    #[serde(default)]
    pub tariff_table_path: Option<PathBuf>,

    /// Surcharge applied by default to table lookups (%, e.g. unpaved road)
    #[serde(default)]
    pub default_surcharge_pct: f64,
}

fn default_exchange_rate() -> f64 {
    1150.0
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exchange_rate: default_exchange_rate(),
            output_format: default_output_format(),
            tariff_table_path: None,
            default_surcharge_pct: 0.0,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("margen-calc");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}
