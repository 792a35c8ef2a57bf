//! Status effect configuration loading

use super::ConfigError;
use crate::effect::{EffectRegistry, EffectTemplate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for effect templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsConfig {
    #[serde(rename = "effects")]
    pub effects: Vec<EffectTemplate>,
}

impl EffectsConfig {
    fn into_registry(self) -> Result<EffectRegistry, ConfigError> {
        let mut registry = EffectRegistry::new();
        for effect in self.effects {
            if effect.duration == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must last at least one turn",
                    effect.name
                )));
            }
            registry.register(effect);
        }
        Ok(registry)
    }
}

/// Load effect templates from a TOML file
pub fn load_effect_configs(path: &Path) -> Result<EffectRegistry, ConfigError> {
    let config: EffectsConfig = super::load_toml(path)?;
    config.into_registry()
}

/// Load effect templates from a TOML string
pub fn parse_effect_configs(content: &str) -> Result<EffectRegistry, ConfigError> {
    let config: EffectsConfig = super::parse_toml(content)?;
    config.into_registry()
}
