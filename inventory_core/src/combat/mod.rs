//! Turn-based combat between a player and an enemy

mod combatant;
mod result;
mod system;

pub use combatant::Combatant;
pub use result::{CombatAction, CombatOutcome, Side, TurnReport};
pub use system::{BattleObserver, CombatSystem, EnemyAction, PlayerAction};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Battle state machine phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatPhase {
    PlayerTurn,
    EnemyTurn,
    Resolved,
}

/// Battle loop error
#[derive(Error, Debug)]
pub enum CombatError {
    #[error("Failed to read player input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Player input closed before the battle ended")]
    InputClosed,
    #[error("Expected {expected:?} but the battle is at {actual:?}")]
    OutOfTurn {
        expected: CombatPhase,
        actual: CombatPhase,
    },
}
