//! Prelude module for convenient imports
//!
//! ```rust
//! use inventory_core::prelude::*;
//! ```

// Items
pub use crate::item::InventoryItem;
pub use crate::types::ItemType;

// Inventory
pub use crate::inventory::{AddOutcome, Inventory, InventoryError, Recipe, RecipeResult, UseOutcome};

// Effects
pub use crate::effect::{EffectKind, EffectRegistry};

// Combat
pub use crate::combat::{BattleObserver, CombatSystem, Combatant, PlayerAction, Side};

// Config
pub use crate::config::{default_recipes, GameConfig};
