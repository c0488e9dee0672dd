//! Configuration management.
//!
//! Settings live in a TOML file (default `tilequest.toml`), organized into
//! sections:
//!
//! ```toml
//! [game]
//! player_name = "Wanderer"
//!
//! [storage]
//! save_file = "player.json"
//!
//! [logging]
//! level = "info"
//! # file = "tilequest.log"
//! ```
//!
//! Values are validated on load; a missing file is the caller's decision
//! (the `play` command falls back to defaults).

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::save::DEFAULT_SAVE_FILE;

/// Default config file path, next to the binary's working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tilequest.toml";

const MAX_PLAYER_NAME: usize = 32;
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name used for new players; saves keep whatever they were created with.
    #[serde(default = "default_player_name")]
    pub player_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_save_file")]
    pub save_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file; console output is suppressed when stdout is not
    /// a TTY.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_player_name() -> String {
    "Wanderer".to_string()
}

fn default_save_file() -> String {
    DEFAULT_SAVE_FILE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            save_file: default_save_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Write a default configuration file.
    pub fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;
        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let name = self.game.player_name.trim();
        if name.is_empty() {
            return Err(anyhow!("game.player_name must not be empty"));
        }
        if name.chars().count() > MAX_PLAYER_NAME {
            return Err(anyhow!(
                "game.player_name must be at most {} characters",
                MAX_PLAYER_NAME
            ));
        }
        if self.storage.save_file.trim().is_empty() {
            return Err(anyhow!("storage.save_file must not be empty"));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(anyhow!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
            ));
        }
        Ok(())
    }
}
