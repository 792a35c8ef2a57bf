//! Combatant stats for the battle

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Starting stats of one combatant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatantConfig {
    pub name: String,
    pub max_health: u32,
    pub attack_power: u32,
    #[serde(default)]
    pub defense: u32,
}

impl CombatantConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "combatant name must not be empty".to_string(),
            ));
        }
        if self.max_health == 0 {
            return Err(ConfigError::ValidationError(format!(
                "{} must start with some health",
                self.name
            )));
        }
        Ok(())
    }
}

/// Both sides of the battle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatConfig {
    #[serde(default = "default_player")]
    pub player: CombatantConfig,
    #[serde(default = "default_enemy")]
    pub enemy: CombatantConfig,
}

impl Default for CombatConfig {
    fn default() -> Self {
        CombatConfig {
            player: default_player(),
            enemy: default_enemy(),
        }
    }
}

fn default_player() -> CombatantConfig {
    CombatantConfig {
        name: "Player".to_string(),
        max_health: 100,
        attack_power: 15,
        defense: 5,
    }
}

fn default_enemy() -> CombatantConfig {
    CombatantConfig {
        name: "Enemy".to_string(),
        max_health: 80,
        attack_power: 12,
        defense: 4,
    }
}

impl CombatConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.player.validate()?;
        self.enemy.validate()
    }
}
