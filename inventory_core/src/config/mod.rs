//! Configuration loading from TOML files

mod combat;
mod effects;
mod inventory;
mod recipes;

pub use combat::{CombatConfig, CombatantConfig};
pub use effects::{load_effect_configs, parse_effect_configs};
pub use inventory::InventoryConfig;
pub use recipes::{default_recipes, load_recipe_configs, parse_recipe_configs};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Top-level game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub combat: CombatConfig,
}

impl GameConfig {
    /// Load and validate a game config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: GameConfig = load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a game config string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.inventory.validate()?;
        self.combat.validate()
    }
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}
