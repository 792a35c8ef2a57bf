//! inventory_core - Item inventory and turn-based combat library
//!
//! This library provides:
//! - Inventory: Weight-limited item stacks, equipment slots and crafting
//! - Persistence: JSON save/load of inventory contents
//! - Effects: Timed status effects ticked once per combat turn
//! - CombatSystem: Two-combatant turn loop driven by player choices and a seeded RNG

pub mod combat;
pub mod config;
pub mod effect;
pub mod inventory;
pub mod item;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use combat::{
    BattleObserver, CombatAction, CombatError, CombatOutcome, CombatPhase, CombatSystem,
    Combatant, EnemyAction, PlayerAction, Side, TurnReport,
};
pub use config::{default_recipes, ConfigError, GameConfig};
pub use effect::{ActiveEffect, EffectBehavior, EffectKind, EffectRegistry, EffectTemplate, EffectTickResult};
pub use inventory::{
    AddOutcome, Ingredient, Inventory, InventoryError, MissingIngredient, PersistenceError, Recipe,
    RecipeResult, UseOutcome,
};
pub use item::{InventoryItem, ItemError};
pub use types::{ItemKey, ItemType};
