//! Run configuration loaded from TOML
//!
//! ```toml
//! sku = "DM1182"
//! currency = "USD"
//! strict_rates = false
//! output = "text"
//! ```

use crate::error::{Result, TradeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the total is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// SKU to total
    #[serde(default = "default_sku")]
    pub sku: String,
    /// Target currency
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Reject zero, negative and non-finite rates
    #[serde(default)]
    pub strict_rates: bool,
    #[serde(default = "default_output")]
    pub output: OutputFormat,
}

fn default_sku() -> String {
    "DM1182".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_output() -> OutputFormat {
    OutputFormat::Text
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sku: default_sku(),
            currency: default_currency(),
            strict_rates: false,
            output: default_output(),
        }
    }
}

impl Config {
    /// `~/.fx-sales/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".fx-sales").join("config.toml"))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the default
    /// location is tried and any problem there falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            if !config_path.exists() {
                return Err(TradeError::ConfigError(format!(
                    "Config file not found: {}",
                    config_path.display()
                )));
            }
            let contents = fs::read_to_string(config_path)?;
            return Self::from_toml(&contents);
        }

        let Some(default_config) = Self::default_path().filter(|p| p.exists()) else {
            return Ok(Self::default());
        };

        match fs::read_to_string(&default_config)
            .map_err(TradeError::from)
            .and_then(|contents| Self::from_toml(&contents))
        {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("Ignoring config at {}: {}", default_config.display(), e);
                Ok(Self::default())
            }
        }
    }
}
