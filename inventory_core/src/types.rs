//! Core types shared across the inventory and combat modules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item category
///
/// Declaration order is the ordinal used by `Inventory::sort_by_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Consumable,
    Weapon,
    Armor,
    Material,
    Quest,
    Misc,
}

impl ItemType {
    /// Get all item types in ordinal order
    pub fn all() -> &'static [ItemType] {
        &[
            ItemType::Consumable,
            ItemType::Weapon,
            ItemType::Armor,
            ItemType::Material,
            ItemType::Quest,
            ItemType::Misc,
        ]
    }

    /// Whether items of this type can be moved into an equip slot
    pub fn is_equippable(self) -> bool {
        matches!(self, ItemType::Weapon | ItemType::Armor)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemType::Consumable => "Consumable",
            ItemType::Weapon => "Weapon",
            ItemType::Armor => "Armor",
            ItemType::Material => "Material",
            ItemType::Quest => "Quest",
            ItemType::Misc => "Misc",
        };
        f.write_str(name)
    }
}

/// Identity key for stacking and matching: `(name, item_type)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub name: String,
    pub item_type: ItemType,
}

impl ItemKey {
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        ItemKey {
            name: name.into(),
            item_type,
        }
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.item_type)
    }
}
