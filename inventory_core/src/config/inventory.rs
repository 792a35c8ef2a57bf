//! Inventory limits

use super::ConfigError;
use crate::inventory::DEFAULT_MAX_WEIGHT;
use crate::item::DEFAULT_MAX_STACK_SIZE;
use serde::{Deserialize, Serialize};

/// Tunable inventory limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Total weight of unequipped items an inventory can hold
    #[serde(default = "default_max_weight_capacity")]
    pub max_weight_capacity: f64,
    /// Stack limit for items added without an explicit one
    #[serde(default = "default_max_stack_size")]
    pub default_max_stack_size: u32,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        InventoryConfig {
            max_weight_capacity: DEFAULT_MAX_WEIGHT,
            default_max_stack_size: DEFAULT_MAX_STACK_SIZE,
        }
    }
}

fn default_max_weight_capacity() -> f64 {
    DEFAULT_MAX_WEIGHT
}

fn default_max_stack_size() -> u32 {
    DEFAULT_MAX_STACK_SIZE
}

impl InventoryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_weight_capacity.is_finite() || self.max_weight_capacity <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "max_weight_capacity must be positive, got {}",
                self.max_weight_capacity
            )));
        }
        if self.default_max_stack_size == 0 {
            return Err(ConfigError::ValidationError(
                "default_max_stack_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
