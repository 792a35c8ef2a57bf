//! Status effect template definitions

use super::ActiveEffect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of status effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Poison,
    Burning,
    Regeneration,
    Stun,
    Frozen,
}

impl EffectKind {
    pub fn all() -> &'static [EffectKind] {
        &[
            EffectKind::Poison,
            EffectKind::Burning,
            EffectKind::Regeneration,
            EffectKind::Stun,
            EffectKind::Frozen,
        ]
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            EffectKind::Poison => "Poison",
            EffectKind::Burning => "Burning",
            EffectKind::Regeneration => "Regeneration",
            EffectKind::Stun => "Stun",
            EffectKind::Frozen => "Frozen",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an effect does to its target each processing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectBehavior {
    /// Deal `magnitude` damage (mitigated by defense)
    Damage,
    /// Restore `magnitude` health
    Heal,
    /// Target loses its action this turn
    SkipTurn,
    /// Lower the target's defense by `magnitude`
    ReduceDefense,
}

/// Immutable template an effect instance is created from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectTemplate {
    pub kind: EffectKind,
    /// Display name
    pub name: String,
    /// Processing passes before the effect expires
    pub duration: u32,
    /// Damage, healing or defense reduction per pass
    #[serde(default)]
    pub magnitude: u32,
    pub behavior: EffectBehavior,
}

impl EffectTemplate {
    pub fn new(kind: EffectKind, duration: u32, magnitude: u32, behavior: EffectBehavior) -> Self {
        EffectTemplate {
            kind,
            name: kind.name().to_string(),
            duration,
            magnitude,
            behavior,
        }
    }

    /// Create a fresh instance of this effect
    pub fn instantiate(&self) -> ActiveEffect {
        ActiveEffect::new(
            self.kind,
            self.name.clone(),
            self.duration,
            self.magnitude,
            self.behavior,
        )
    }
}
