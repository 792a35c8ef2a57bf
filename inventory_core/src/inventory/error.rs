//! Inventory operation errors and outcomes

use crate::item::ItemError;
use crate::types::ItemType;
use thiserror::Error;

/// A recipe ingredient the inventory cannot cover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingIngredient {
    pub name: String,
    pub item_type: ItemType,
    pub required: u32,
    pub available: u32,
}

fn describe_missing(missing: &[MissingIngredient]) -> String {
    missing
        .iter()
        .map(|m| format!("{} ({}) {}/{}", m.name, m.item_type, m.available, m.required))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rejected inventory operation
///
/// None of these are fatal: the inventory is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InventoryError {
    #[error("Invalid item: {0}")]
    InvalidItem(#[from] ItemError),
    #[error("Weight capacity exceeded: needs {required:.2}, only {available:.2} left")]
    CapacityExceeded { required: f64, available: f64 },
    #[error("Item not found: {0}")]
    ItemNotFound(String),
    #[error("{name} is a {item_type} and cannot be equipped")]
    NotEquippable { name: String, item_type: ItemType },
    #[error("No recipe produces {0}")]
    RecipeNotFound(String),
    #[error("Missing ingredients for {recipe}: {}", describe_missing(.missing))]
    MissingIngredients {
        recipe: String,
        missing: Vec<MissingIngredient>,
    },
    #[error("{0} is broken and cannot be used")]
    ItemUnusable(String),
}

/// How an accepted add was stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Merged into the existing stack at `index`
    Stacked { index: usize, quantity: u32 },
    /// Pushed as a new stack at `index`; `overflow` is set when a stack with
    /// the same key already existed but could not take the quantity
    NewStack { index: usize, overflow: bool },
    /// Zero quantity requested, nothing stored
    Ignored,
}

/// Result of `Inventory::use_item`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseOutcome {
    /// One consumable unit used up
    Consumed { remaining: u32 },
    /// Equipment lost a point of durability
    Worn { durability: u32, broken: bool },
    /// Item type has no use action
    Inert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_ingredients_message() {
        let err = InventoryError::MissingIngredients {
            recipe: "Iron Sword".to_string(),
            missing: vec![MissingIngredient {
                name: "Iron Ingot".to_string(),
                item_type: ItemType::Material,
                required: 3,
                available: 1,
            }],
        };
        let message = err.to_string();
        assert!(message.contains("Iron Sword"));
        assert!(message.contains("Iron Ingot (Material) 1/3"));
    }

    #[test]
    fn test_capacity_message() {
        let err = InventoryError::CapacityExceeded {
            required: 2.0,
            available: 1.0,
        };
        assert_eq!(
            err.to_string(),
            "Weight capacity exceeded: needs 2.00, only 1.00 left"
        );
    }
}
