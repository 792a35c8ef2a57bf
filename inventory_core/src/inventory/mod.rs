//! Inventory - Item collection with weight capacity, equipment slots and crafting

mod error;
pub mod persistence;
mod recipe;

pub use error::{AddOutcome, InventoryError, MissingIngredient, UseOutcome};
pub use persistence::PersistenceError;
pub use recipe::{Ingredient, Recipe, RecipeResult};

use crate::config::InventoryConfig;
use crate::item::{InventoryItem, DEFAULT_MAX_STACK_SIZE};
use crate::types::ItemType;
use log::{debug, info, warn};
use std::collections::HashMap;

/// Default weight an inventory can carry
pub const DEFAULT_MAX_WEIGHT: f64 = 100.0;

/// Slack for float accumulation when comparing against capacity
const WEIGHT_EPSILON: f64 = 1e-9;

/// A player's items
///
/// Unequipped items live in an ordered list and count against the weight
/// capacity; equipped items live in a name-keyed map and do not.
#[derive(Debug, Clone)]
pub struct Inventory {
    items: Vec<InventoryItem>,
    equipped: HashMap<String, InventoryItem>,
    recipes: Vec<Recipe>,
    max_weight_capacity: f64,
    default_max_stack_size: u32,
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::with_capacity(DEFAULT_MAX_WEIGHT)
    }
}

impl Inventory {
    /// Create an empty inventory with the default capacity
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty inventory that can carry `max_weight_capacity`
    pub fn with_capacity(max_weight_capacity: f64) -> Self {
        Inventory {
            items: Vec::new(),
            equipped: HashMap::new(),
            recipes: Vec::new(),
            max_weight_capacity: max_weight_capacity.max(0.0),
            default_max_stack_size: DEFAULT_MAX_STACK_SIZE,
        }
    }

    /// Create an empty inventory from configuration
    pub fn from_config(config: &InventoryConfig) -> Self {
        let mut inventory = Self::with_capacity(config.max_weight_capacity);
        inventory.default_max_stack_size = config.default_max_stack_size.max(1);
        inventory
    }

    // === Capacity ===

    pub fn max_weight_capacity(&self) -> f64 {
        self.max_weight_capacity
    }

    /// Weight of all unequipped items
    pub fn total_weight(&self) -> f64 {
        total_weight(&self.items)
    }

    /// Weight that can still be added
    pub fn remaining_capacity(&self) -> f64 {
        (self.max_weight_capacity - self.total_weight()).max(0.0)
    }

    // === Adding and removing ===

    /// Add `quantity` units of an item using the default stack size
    pub fn add_item(
        &mut self,
        name: &str,
        item_type: ItemType,
        quantity: u32,
        weight: f64,
        max_durability: u32,
    ) -> Result<AddOutcome, InventoryError> {
        let stack_size = self.default_max_stack_size;
        self.add_item_with_stack_size(name, item_type, quantity, weight, max_durability, stack_size)
    }

    /// Add `quantity` units of an item with an explicit stack limit
    pub fn add_item_with_stack_size(
        &mut self,
        name: &str,
        item_type: ItemType,
        quantity: u32,
        weight: f64,
        max_durability: u32,
        max_stack_size: u32,
    ) -> Result<AddOutcome, InventoryError> {
        let item = InventoryItem::new(name, item_type, quantity)?
            .with_weight(weight)
            .with_max_durability(max_durability)
            .with_max_stack_size(max_stack_size);
        self.add(item)
    }

    /// Add an item stack, merging into an existing stack when it fits
    ///
    /// The add is all or nothing: if the weight would exceed capacity the
    /// inventory is left untouched.
    pub fn add(&mut self, item: InventoryItem) -> Result<AddOutcome, InventoryError> {
        let name = item.name.clone();
        let amount = item.quantity();
        match insert_stack(&mut self.items, self.max_weight_capacity, item) {
            Ok(outcome) => {
                debug!("Added {} x{}: {:?}", name, amount, outcome);
                Ok(outcome)
            }
            Err(e) => {
                warn!("Rejected adding {} x{}: {}", name, amount, e);
                Err(e)
            }
        }
    }

    /// Remove up to `quantity` units, dropping emptied stacks
    ///
    /// Returns the number of units actually removed. Removing more than is
    /// stored empties the item; removing an unknown item does nothing.
    pub fn remove_item(&mut self, name: &str, item_type: ItemType, quantity: u32) -> u32 {
        let removed = drain_stacks(&mut self.items, name, item_type, quantity);
        if removed == 0 {
            debug!("Nothing to remove for {} ({})", name, item_type);
        } else {
            debug!("Removed {} x{}", name, removed);
        }
        removed
    }

    /// Check that at least `quantity` units of an item are stored
    pub fn has_item(&self, name: &str, item_type: ItemType, quantity: u32) -> bool {
        let mut found = false;
        let mut total: u64 = 0;
        for stack in self.items.iter().filter(|s| s.matches(name, item_type)) {
            found = true;
            total += stack.quantity() as u64;
        }
        found && total >= quantity as u64
    }

    /// Units of an item stored across all of its stacks
    pub fn quantity_of(&self, name: &str, item_type: ItemType) -> u32 {
        quantity_of(&self.items, name, item_type)
    }

    // === Equipment ===

    /// Move the first Weapon or Armor named `name` into its equip slot
    ///
    /// If something with the same name was already equipped it is displaced
    /// and handed back to the caller.
    pub fn equip_item(&mut self, name: &str) -> Result<Option<InventoryItem>, InventoryError> {
        let Some(index) = self.items.iter().position(|i| i.name == name && i.is_equippable()) else {
            let err = match self.items.iter().find(|i| i.name == name) {
                Some(item) => InventoryError::NotEquippable {
                    name: name.to_string(),
                    item_type: item.item_type,
                },
                None => InventoryError::ItemNotFound(name.to_string()),
            };
            warn!("Cannot equip {}: {}", name, err);
            return Err(err);
        };

        let item = self.items.remove(index);
        let previous = self.equipped.insert(name.to_string(), item);
        if previous.is_some() {
            warn!("Equipping {} replaced an item already in that slot", name);
        } else {
            debug!("Equipped {}", name);
        }
        Ok(previous)
    }

    /// Move an equipped item back into the item list
    ///
    /// Returns `Ok(false)` when nothing by that name is equipped. Fails if
    /// carrying the item again would exceed capacity; it then stays equipped.
    pub fn unequip_item(&mut self, name: &str) -> Result<bool, InventoryError> {
        let Some(item) = self.equipped.get(name) else {
            debug!("{} is not equipped", name);
            return Ok(false);
        };

        if let Err(e) = check_capacity(&self.items, self.max_weight_capacity, item.total_weight()) {
            warn!("Cannot unequip {}: {}", name, e);
            return Err(e);
        }

        if let Some(item) = self.equipped.remove(name) {
            self.items.push(item);
            debug!("Unequipped {}", name);
        }
        Ok(true)
    }

    pub fn equipped_items(&self) -> &HashMap<String, InventoryItem> {
        &self.equipped
    }

    pub fn equipped(&self, name: &str) -> Option<&InventoryItem> {
        self.equipped.get(name)
    }

    pub fn is_equipped(&self, name: &str) -> bool {
        self.equipped.contains_key(name)
    }

    // === Crafting ===

    /// Register a recipe, replacing any recipe with the same result name
    pub fn add_recipe(&mut self, recipe: Recipe) {
        if let Some(existing) = self
            .recipes
            .iter_mut()
            .find(|r| r.result_name() == recipe.result_name())
        {
            *existing = recipe;
        } else {
            self.recipes.push(recipe);
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn recipe(&self, result_name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.result_name() == result_name)
    }

    /// Consume a recipe's ingredients and add one unit of its result
    ///
    /// The craft is staged on a copy of the item list and only committed if
    /// both the ingredients and the weight of the result check out.
    pub fn craft_item(&mut self, result_name: &str) -> Result<AddOutcome, InventoryError> {
        let Some(recipe) = self.recipe(result_name).cloned() else {
            warn!("No recipe for {}", result_name);
            return Err(InventoryError::RecipeNotFound(result_name.to_string()));
        };

        let requirements = recipe.requirements();
        let missing: Vec<MissingIngredient> = requirements
            .iter()
            .filter(|(key, required)| !self.has_item(&key.name, key.item_type, *required))
            .map(|(key, required)| MissingIngredient {
                name: key.name.clone(),
                item_type: key.item_type,
                required: *required,
                available: self.quantity_of(&key.name, key.item_type),
            })
            .collect();

        if !missing.is_empty() {
            let err = InventoryError::MissingIngredients {
                recipe: result_name.to_string(),
                missing,
            };
            warn!("Cannot craft: {}", err);
            return Err(err);
        }

        let mut staged = self.items.clone();
        for (key, required) in &requirements {
            drain_stacks(&mut staged, &key.name, key.item_type, *required);
        }

        let crafted = recipe.result.to_item(1)?;
        let outcome = match insert_stack(&mut staged, self.max_weight_capacity, crafted) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Cannot craft {}: {}", result_name, e);
                return Err(e);
            }
        };

        self.items = staged;
        info!("Crafted {}", result_name);
        Ok(outcome)
    }

    // === Durability ===

    /// Wear an item down by `amount`, looking in the item list first and then
    /// the equip slot of that name. Returns whether it is still usable.
    pub fn degrade_item(&mut self, name: &str, item_type: ItemType, amount: u32) -> Result<bool, InventoryError> {
        let item = self
            .find_mut(name, item_type)
            .ok_or_else(|| InventoryError::ItemNotFound(name.to_string()))?;
        item.decrease_durability(amount);
        if !item.is_usable() {
            info!("{} broke", name);
        }
        Ok(item.is_usable())
    }

    /// Restore an item to full durability
    pub fn repair_item(&mut self, name: &str, item_type: ItemType) -> Result<(), InventoryError> {
        let item = self
            .find_mut(name, item_type)
            .ok_or_else(|| InventoryError::ItemNotFound(name.to_string()))?;
        item.repair();
        debug!("Repaired {}", name);
        Ok(())
    }

    /// Use an item: consumables are used up, equipment wears by one point
    pub fn use_item(&mut self, name: &str, item_type: ItemType) -> Result<UseOutcome, InventoryError> {
        let item = self
            .find_mut(name, item_type)
            .ok_or_else(|| InventoryError::ItemNotFound(name.to_string()))?;
        if !item.is_usable() {
            return Err(InventoryError::ItemUnusable(name.to_string()));
        }

        match item_type {
            ItemType::Consumable => {
                self.remove_item(name, item_type, 1);
                Ok(UseOutcome::Consumed {
                    remaining: self.quantity_of(name, item_type),
                })
            }
            ItemType::Weapon | ItemType::Armor => {
                item.decrease_durability(1);
                Ok(UseOutcome::Worn {
                    durability: item.durability(),
                    broken: !item.is_usable(),
                })
            }
            _ => Ok(UseOutcome::Inert),
        }
    }

    fn find_mut(&mut self, name: &str, item_type: ItemType) -> Option<&mut InventoryItem> {
        if let Some(index) = self.items.iter().position(|i| i.matches(name, item_type)) {
            return self.items.get_mut(index);
        }
        self.equipped
            .get_mut(name)
            .filter(|i| i.item_type == item_type)
    }

    // === Sorting ===

    /// Stable sort by name (byte order)
    pub fn sort_by_name(&mut self) {
        self.items.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Stable sort by quantity, smallest first
    pub fn sort_by_quantity(&mut self) {
        self.items.sort_by_key(|i| i.quantity());
    }

    /// Stable sort by item type ordinal
    pub fn sort_by_type(&mut self) {
        self.items.sort_by_key(|i| i.item_type);
    }

    // === Queries ===

    /// All unequipped items in their current order
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn items_by_type(&self, item_type: ItemType) -> Vec<&InventoryItem> {
        self.items.iter().filter(|i| i.item_type == item_type).collect()
    }

    pub fn items_by_name(&self, name: &str) -> Vec<&InventoryItem> {
        self.items.iter().filter(|i| i.name == name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.equipped.is_empty()
    }

    /// Replace contents wholesale (used by loading)
    pub(crate) fn replace_contents(&mut self, items: Vec<InventoryItem>, equipped: Vec<InventoryItem>) {
        self.items = items;
        self.equipped = equipped
            .into_iter()
            .map(|item| (item.name.clone(), item))
            .collect();
    }
}

fn total_weight(items: &[InventoryItem]) -> f64 {
    items.iter().map(|i| i.total_weight()).sum()
}

fn quantity_of(items: &[InventoryItem], name: &str, item_type: ItemType) -> u32 {
    items
        .iter()
        .filter(|s| s.matches(name, item_type))
        .fold(0u32, |acc, s| acc.saturating_add(s.quantity()))
}

/// Check that `additional` weight fits on top of `items`
fn check_capacity(items: &[InventoryItem], capacity: f64, additional: f64) -> Result<(), InventoryError> {
    let current = total_weight(items);
    if current + additional > capacity + WEIGHT_EPSILON {
        return Err(InventoryError::CapacityExceeded {
            required: additional,
            available: (capacity - current).max(0.0),
        });
    }
    Ok(())
}

/// Store `item` in `items`: top up the first same-key stack that has room for
/// the whole quantity, otherwise push it as a stack of its own.
fn insert_stack(
    items: &mut Vec<InventoryItem>,
    capacity: f64,
    item: InventoryItem,
) -> Result<AddOutcome, InventoryError> {
    let amount = item.quantity();
    if amount == 0 {
        return Ok(AddOutcome::Ignored);
    }

    let target = items
        .iter()
        .position(|s| s.matches(&item.name, item.item_type) && s.has_room_for(amount));

    if let Some(index) = target {
        check_capacity(items, capacity, items[index].weight() * amount as f64)?;
        items[index].add_quantity(amount);
        return Ok(AddOutcome::Stacked {
            index,
            quantity: items[index].quantity(),
        });
    }

    check_capacity(items, capacity, item.total_weight())?;
    let overflow = items.iter().any(|s| s.matches(&item.name, item.item_type));
    items.push(item);
    Ok(AddOutcome::NewStack {
        index: items.len() - 1,
        overflow,
    })
}

/// Take up to `quantity` units from same-key stacks in list order
fn drain_stacks(items: &mut Vec<InventoryItem>, name: &str, item_type: ItemType, quantity: u32) -> u32 {
    let mut remaining = quantity;
    for stack in items.iter_mut().filter(|s| s.matches(name, item_type)) {
        if remaining == 0 {
            break;
        }
        let take = remaining.min(stack.quantity());
        stack.remove_quantity(take);
        remaining -= take;
    }
    items.retain(|s| s.quantity() > 0);
    quantity - remaining
}
