//! Combatant - Health, attack and defense of one side of a battle

use crate::config::CombatantConfig;
use crate::effect::{process_effects, ActiveEffect, EffectKind, EffectTickResult};
use log::info;
use serde::{Deserialize, Serialize};

/// One participant in a battle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    health: u32,
    max_health: u32,
    pub attack_power: u32,
    pub defense: u32,
    #[serde(default)]
    active_effects: Vec<ActiveEffect>,
}

impl Combatant {
    /// Create a combatant at full health
    pub fn new(name: impl Into<String>, max_health: u32, attack_power: u32, defense: u32) -> Self {
        Combatant {
            name: name.into(),
            health: max_health,
            max_health,
            attack_power,
            defense,
            active_effects: Vec::new(),
        }
    }

    pub fn from_config(config: &CombatantConfig) -> Self {
        Self::new(
            config.name.clone(),
            config.max_health,
            config.attack_power,
            config.defense,
        )
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Take a hit of `amount`, reduced by defense. Returns damage dealt.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let damage = amount.saturating_sub(self.defense).min(self.health);
        self.health -= damage;
        info!(
            "{} takes {} damage! Health is now {}/{}",
            self.name, damage, self.health, self.max_health
        );
        damage
    }

    /// Restore up to `amount` health. Returns health actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health.saturating_sub(self.health));
        self.health += healed;
        info!(
            "{} heals for {} points. Health is now {}/{}",
            self.name, healed, self.health, self.max_health
        );
        healed
    }

    /// Lower defense, flooring at zero. Returns defense actually lost.
    pub fn reduce_defense(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.defense);
        self.defense -= lost;
        lost
    }

    pub fn add_effect(&mut self, effect: ActiveEffect) {
        info!("{} is now affected by {}", self.name, effect.name);
        self.active_effects.push(effect);
    }

    pub fn active_effects(&self) -> &[ActiveEffect] {
        &self.active_effects
    }

    pub(crate) fn effects_mut(&mut self) -> &mut Vec<ActiveEffect> {
        &mut self.active_effects
    }

    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.active_effects.iter().any(|e| e.kind == kind)
    }

    /// Run one status effect pass
    pub fn process_status_effects(&mut self) -> EffectTickResult {
        process_effects(self)
    }
}
