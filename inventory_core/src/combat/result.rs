//! Turn reports and battle outcome

use super::CombatPhase;
use crate::effect::{EffectKind, EffectTickResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Enemy => f.write_str("enemy"),
        }
    }
}

/// What the acting combatant did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatAction {
    /// Hit the opponent for `damage` after defense
    Attack { damage: u32 },
    /// Put an effect on `target`
    ApplyEffect { target: Side, kind: EffectKind },
    /// Turn passed without an action
    Skip,
    /// A stun took the action away
    Stunned,
}

/// Everything that happened in one turn
#[derive(Debug, Clone)]
pub struct TurnReport {
    /// 1-based turn counter across both sides
    pub turn: u32,
    pub actor: Side,
    pub actor_name: String,
    /// Status effect pass at the start of the turn
    pub effects: EffectTickResult,
    /// None if the actor died from effects before acting
    pub action: Option<CombatAction>,
    /// The player's input was not one of the menu choices
    pub invalid_choice: bool,
    pub player_health: u32,
    pub enemy_health: u32,
    /// Phase after this turn
    pub next_phase: CombatPhase,
}

impl TurnReport {
    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("Turn {} ({})", self.turn, self.actor_name)];

        if !self.effects.is_empty() {
            parts.push(self.effects.summary());
        }

        match &self.action {
            Some(CombatAction::Attack { damage }) => parts.push(format!("attacks for {}", damage)),
            Some(CombatAction::ApplyEffect { target, kind }) => {
                parts.push(format!("applies {} to {}", kind, target))
            }
            Some(CombatAction::Skip) if self.invalid_choice => {
                parts.push("invalid choice, turn skipped".to_string())
            }
            Some(CombatAction::Skip) => parts.push("skips the turn".to_string()),
            Some(CombatAction::Stunned) => parts.push("is stunned".to_string()),
            None => parts.push("is defeated".to_string()),
        }

        parts.push(format!(
            "player {} / enemy {}",
            self.player_health, self.enemy_health
        ));
        parts.join(", ")
    }
}

/// How a battle ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatOutcome {
    pub winner: Side,
    pub winner_name: String,
    /// Turns taken by both sides
    pub turns: u32,
}
