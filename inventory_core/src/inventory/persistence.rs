//! Saving and loading inventory contents as JSON

use super::Inventory;
use crate::item::{InventoryItem, ItemError};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Current save file layout version
pub const SAVE_VERSION: u32 = 1;

/// Save/load failure
///
/// A failed load never leaves the inventory half-populated.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to access save file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse save file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported save version {found} (expected {expected})")]
    UnsupportedVersion { expected: u32, found: u32 },
    #[error("Invalid item in save file: {0}")]
    InvalidItem(#[from] ItemError),
    #[error("Save file equips more than one item named {0}")]
    DuplicateEquipped(String),
    #[error("Saved items weigh {weight:.2}, more than the capacity of {capacity:.2}")]
    CapacityExceeded { weight: f64, capacity: f64 },
}

/// On-disk document
#[derive(Debug, Serialize, Deserialize)]
struct SaveFile {
    version: u32,
    items: Vec<InventoryItem>,
    #[serde(default)]
    equipped: Vec<InventoryItem>,
}

impl Inventory {
    /// Serialize unequipped and equipped items to a JSON string
    ///
    /// Recipes and capacity are part of the inventory's setup, not its
    /// contents, and are not written.
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        let mut equipped: Vec<InventoryItem> = self.equipped_items().values().cloned().collect();
        equipped.sort_by(|a, b| a.name.cmp(&b.name));

        let file = SaveFile {
            version: SAVE_VERSION,
            items: self.items().to_vec(),
            equipped,
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Replace contents with items parsed from a JSON string
    pub fn restore_from_json(&mut self, json: &str) -> Result<(), PersistenceError> {
        let file: SaveFile = serde_json::from_str(json)?;
        if file.version != SAVE_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                expected: SAVE_VERSION,
                found: file.version,
            });
        }

        let items = sanitize(file.items)?;
        let equipped = sanitize(file.equipped)?;
        if let Some(name) = duplicate_name(&equipped) {
            return Err(PersistenceError::DuplicateEquipped(name));
        }

        let weight: f64 = items.iter().map(|i| i.total_weight()).sum();
        if weight > self.max_weight_capacity() + 1e-9 {
            return Err(PersistenceError::CapacityExceeded {
                weight,
                capacity: self.max_weight_capacity(),
            });
        }

        debug!(
            "Restored {} item stacks and {} equipped items",
            items.len(),
            equipped.len()
        );
        self.replace_contents(items, equipped);
        Ok(())
    }

    /// Write the inventory to `path`
    pub fn save_inventory(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json)?;
        info!("Saved inventory to {}", path.display());
        Ok(())
    }

    /// Replace contents with the inventory stored at `path`
    pub fn load_inventory(&mut self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        self.restore_from_json(&json)?;
        info!("Loaded inventory from {}", path.display());
        Ok(())
    }
}

/// Validate names, clamp out-of-range fields and drop empty stacks
fn sanitize(items: Vec<InventoryItem>) -> Result<Vec<InventoryItem>, ItemError> {
    let mut clean = Vec::with_capacity(items.len());
    for mut item in items {
        item.validate()?;
        item.normalize();
        if item.quantity() > 0 {
            clean.push(item);
        }
    }
    Ok(clean)
}

/// First name used by more than one item
fn duplicate_name(items: &[InventoryItem]) -> Option<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .find(|item| !seen.insert(item.name.as_str()))
        .map(|item| item.name.clone())
}
