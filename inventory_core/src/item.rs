//! InventoryItem - A stackable, equippable, possibly degradable item instance

use crate::types::ItemType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of units a single stack can hold
pub const DEFAULT_MAX_STACK_SIZE: u32 = 10;

/// Item construction error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item name must not be empty")]
    EmptyName,
}

/// A stack of identical items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Display name, part of the identity key
    pub name: String,
    /// Item category, part of the identity key
    pub item_type: ItemType,
    /// Units in this stack
    quantity: u32,
    /// Weight of a single unit
    weight: f64,
    /// Units this stack accepts before overflowing into a new stack
    #[serde(default = "default_max_stack_size")]
    max_stack_size: u32,
    #[serde(default)]
    durability: u32,
    #[serde(default)]
    max_durability: u32,
    /// Cleared when durability hits zero, restored by `repair`
    #[serde(default = "default_usable")]
    usable: bool,
}

fn default_max_stack_size() -> u32 {
    DEFAULT_MAX_STACK_SIZE
}

fn default_usable() -> bool {
    true
}

impl InventoryItem {
    /// Create a new item stack
    ///
    /// Fails if `name` is empty or whitespace only.
    pub fn new(name: impl Into<String>, item_type: ItemType, quantity: u32) -> Result<Self, ItemError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ItemError::EmptyName);
        }

        Ok(InventoryItem {
            name,
            item_type,
            quantity,
            weight: 0.0,
            max_stack_size: DEFAULT_MAX_STACK_SIZE,
            durability: 0,
            max_durability: 0,
            usable: true,
        })
    }

    /// Set the per-unit weight (negative and NaN weights clamp to zero)
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = if weight.is_finite() { weight.max(0.0) } else { 0.0 };
        self
    }

    /// Set max durability; the item starts fully repaired
    pub fn with_max_durability(mut self, max_durability: u32) -> Self {
        self.max_durability = max_durability;
        self.durability = max_durability;
        self.usable = true;
        self
    }

    /// Set the stack limit (at least 1)
    pub fn with_max_stack_size(mut self, max_stack_size: u32) -> Self {
        self.max_stack_size = max_stack_size.max(1);
        self
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn max_stack_size(&self) -> u32 {
        self.max_stack_size
    }

    pub fn durability(&self) -> u32 {
        self.durability
    }

    pub fn max_durability(&self) -> u32 {
        self.max_durability
    }

    pub fn is_usable(&self) -> bool {
        self.usable
    }

    /// Check whether this stack has the given identity key
    pub fn matches(&self, name: &str, item_type: ItemType) -> bool {
        self.item_type == item_type && self.name == name
    }

    pub fn is_equippable(&self) -> bool {
        self.item_type.is_equippable()
    }

    /// Whether `amount` more units fit without exceeding the stack limit
    pub fn has_room_for(&self, amount: u32) -> bool {
        self.quantity
            .checked_add(amount)
            .map(|total| total <= self.max_stack_size)
            .unwrap_or(false)
    }

    /// Weight of the whole stack
    pub fn total_weight(&self) -> f64 {
        self.weight * self.quantity as f64
    }

    /// Add units (stack limits are enforced by the inventory, not here)
    pub fn add_quantity(&mut self, amount: u32) {
        self.quantity = self.quantity.saturating_add(amount);
    }

    /// Remove units, flooring at zero
    pub fn remove_quantity(&mut self, amount: u32) {
        self.quantity = self.quantity.saturating_sub(amount);
    }

    /// Wear the item down. Reaching zero makes it unusable until repaired.
    ///
    /// Items without durability (max_durability == 0) never wear.
    pub fn decrease_durability(&mut self, amount: u32) {
        if self.max_durability == 0 {
            return;
        }
        self.durability = self.durability.saturating_sub(amount);
        if self.durability == 0 {
            self.usable = false;
        }
    }

    /// Restore full durability and usability
    pub fn repair(&mut self) {
        self.durability = self.max_durability;
        self.usable = true;
    }

    /// Re-check invariants on data that skipped the constructor (e.g. deserialized)
    pub(crate) fn validate(&self) -> Result<(), ItemError> {
        if self.name.trim().is_empty() {
            return Err(ItemError::EmptyName);
        }
        Ok(())
    }

    /// Clamp fields that deserialization may have left out of range
    pub(crate) fn normalize(&mut self) {
        self.max_stack_size = self.max_stack_size.max(1);
        self.durability = self.durability.min(self.max_durability);
        if self.max_durability > 0 && self.durability == 0 {
            self.usable = false;
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            self.weight = 0.0;
        }
    }
}
