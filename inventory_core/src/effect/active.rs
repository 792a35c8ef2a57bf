//! ActiveEffect - A status effect instance on a combatant

use super::{EffectBehavior, EffectKind};
use serde::{Deserialize, Serialize};

/// An effect applied to a combatant
///
/// Instances of the same kind are tracked separately for duration but have
/// their magnitudes summed when processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub kind: EffectKind,
    pub name: String,
    /// Processing passes left
    pub remaining: u32,
    pub magnitude: u32,
    pub behavior: EffectBehavior,
}

impl ActiveEffect {
    pub fn new(
        kind: EffectKind,
        name: String,
        duration: u32,
        magnitude: u32,
        behavior: EffectBehavior,
    ) -> Self {
        ActiveEffect {
            kind,
            name,
            remaining: duration,
            magnitude,
            behavior,
        }
    }

    pub fn decrement_duration(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Damage dealt per pass (zero for non-damaging effects)
    pub fn damage_value(&self) -> u32 {
        match self.behavior {
            EffectBehavior::Damage => self.magnitude,
            _ => 0,
        }
    }

    /// Healing per pass (zero for non-healing effects)
    pub fn healing_value(&self) -> u32 {
        match self.behavior {
            EffectBehavior::Heal => self.magnitude,
            _ => 0,
        }
    }
}
