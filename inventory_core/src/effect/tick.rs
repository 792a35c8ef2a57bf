//! Status effect processing

use super::{EffectBehavior, EffectKind};
use crate::combat::Combatant;
use log::debug;

/// What one processing pass did to a combatant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectTickResult {
    /// Combined magnitude applied per effect kind, in first-applied order
    pub applied: Vec<(EffectKind, u32)>,
    /// Damage actually taken after defense
    pub damage_taken: u32,
    /// Health actually restored
    pub healing_done: u32,
    /// Defense actually lost
    pub defense_lost: u32,
    /// A stun was active, so the combatant loses its action
    pub stunned: bool,
    /// Names of effect instances that ran out this pass
    pub expired: Vec<String>,
}

impl EffectTickResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.expired.is_empty()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        for (kind, amount) in &self.applied {
            match kind {
                EffectKind::Stun => parts.push("stunned".to_string()),
                _ => parts.push(format!("{} {}", kind, amount)),
            }
        }

        if self.damage_taken > 0 {
            parts.push(format!("{} damage taken", self.damage_taken));
        }
        if self.healing_done > 0 {
            parts.push(format!("{} healed", self.healing_done));
        }
        if self.defense_lost > 0 {
            parts.push(format!("-{} defense", self.defense_lost));
        }
        if !self.expired.is_empty() {
            parts.push(format!("expired: {}", self.expired.join(", ")));
        }

        if parts.is_empty() {
            "No effects".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Apply and tick down every active effect on `target`
///
/// Instances of the same kind are summed and applied once. Every instance
/// then loses one pass of duration and expired instances are removed. Once
/// the target is dead, later groups are not applied.
pub fn process_effects(target: &mut Combatant) -> EffectTickResult {
    let mut result = EffectTickResult::new();

    let mut groups: Vec<(EffectKind, EffectBehavior, u32)> = Vec::new();
    for effect in target.active_effects() {
        if let Some(group) = groups.iter_mut().find(|(kind, _, _)| *kind == effect.kind) {
            group.2 = group.2.saturating_add(effect.magnitude);
        } else {
            groups.push((effect.kind, effect.behavior, effect.magnitude));
        }
    }

    for (kind, behavior, total) in groups {
        if !target.is_alive() {
            break;
        }
        match behavior {
            EffectBehavior::Damage => {
                result.damage_taken += target.apply_damage(total);
            }
            EffectBehavior::Heal => {
                result.healing_done += target.heal(total);
            }
            EffectBehavior::SkipTurn => {
                result.stunned = true;
            }
            EffectBehavior::ReduceDefense => {
                result.defense_lost += target.reduce_defense(total);
            }
        }
        debug!("{} is affected by {} ({})", target.name, kind, total);
        result.applied.push((kind, total));
    }

    let effects = target.effects_mut();
    for effect in effects.iter_mut() {
        effect.decrement_duration();
    }
    result.expired = effects
        .iter()
        .filter(|e| e.is_expired())
        .map(|e| e.name.clone())
        .collect();
    effects.retain(|e| !e.is_expired());

    result
}
