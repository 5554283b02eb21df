//! # Configuration
//!
//! Stored as `config.json` in the data directory. Missing file or missing
//! keys fall back to the defaults below.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `strategy` | `pattern` | Detection strategy used by `add` and `detect` |
//! | `items_per_page` | `10` | Page size for `list` (10, 20 or 30) |
//!
//! The custom separator is not here; see [`crate::settings`].

use crate::detect::Strategy;
use crate::error::{Result, TextsepError};
use crate::pagination::PageSize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextsepConfig {
    #[serde(default)]
    pub strategy: Strategy,

    #[serde(default)]
    pub items_per_page: PageSize,
}

/// Keys accepted by [`TextsepConfig::set`].
pub const CONFIG_KEYS: [&str; 2] = ["strategy", "items-per-page"];

impl TextsepConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TextsepError::Io)?;
        let config: TextsepConfig =
            serde_json::from_str(&content).map_err(TextsepError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TextsepError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TextsepError::Serialization)?;
        fs::write(config_path, content).map_err(TextsepError::Io)?;
        Ok(())
    }

    /// Current value of `key` as shown to the user.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "strategy" => Ok(self.strategy.to_string()),
            "items-per-page" | "items_per_page" => Ok(self.items_per_page.get().to_string()),
            other => Err(TextsepError::Api(format!("Unknown config key: {}", other))),
        }
    }

    /// Parses and applies `value` to `key`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "strategy" => self.strategy = value.parse()?,
            "items-per-page" | "items_per_page" => {
                let n: usize = value.trim().parse().map_err(|_| {
                    TextsepError::Validation(format!("Not a number: {}", value))
                })?;
                self.items_per_page = PageSize::try_from(n)?;
            }
            other => return Err(TextsepError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}
