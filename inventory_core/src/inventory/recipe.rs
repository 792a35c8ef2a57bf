//! Crafting recipes

use crate::item::{InventoryItem, ItemError, DEFAULT_MAX_STACK_SIZE};
use crate::types::{ItemKey, ItemType};
use serde::{Deserialize, Serialize};

/// An item consumed by a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub item_type: ItemType,
    /// Units consumed per craft
    pub quantity: u32,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, item_type: ItemType, quantity: u32) -> Self {
        Ingredient {
            name: name.into(),
            item_type,
            quantity: quantity.max(1),
        }
    }

    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.name.clone(), self.item_type)
    }

    fn matches(&self, name: &str, item_type: ItemType) -> bool {
        self.item_type == item_type && self.name == name
    }
}

/// Template for the item a recipe produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeResult {
    pub name: String,
    pub item_type: ItemType,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub max_durability: u32,
    #[serde(default = "default_max_stack_size")]
    pub max_stack_size: u32,
}

fn default_max_stack_size() -> u32 {
    DEFAULT_MAX_STACK_SIZE
}

impl RecipeResult {
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        RecipeResult {
            name: name.into(),
            item_type,
            weight: 0.0,
            max_durability: 0,
            max_stack_size: DEFAULT_MAX_STACK_SIZE,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_max_durability(mut self, max_durability: u32) -> Self {
        self.max_durability = max_durability;
        self
    }

    pub fn with_max_stack_size(mut self, max_stack_size: u32) -> Self {
        self.max_stack_size = max_stack_size;
        self
    }

    /// Build `quantity` freshly crafted units
    pub fn to_item(&self, quantity: u32) -> Result<InventoryItem, ItemError> {
        Ok(InventoryItem::new(self.name.clone(), self.item_type, quantity)?
            .with_weight(self.weight)
            .with_max_durability(self.max_durability)
            .with_max_stack_size(self.max_stack_size))
    }
}

/// Mapping from a result item to the ingredients it consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub result: RecipeResult,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(result: RecipeResult) -> Self {
        Recipe {
            result,
            ingredients: Vec::new(),
        }
    }

    /// Add a required ingredient; listing the same item again raises its quantity
    pub fn with_ingredient(mut self, name: impl Into<String>, item_type: ItemType, quantity: u32) -> Self {
        let ingredient = Ingredient::new(name, item_type, quantity);
        match self
            .ingredients
            .iter_mut()
            .find(|i| i.matches(&ingredient.name, ingredient.item_type))
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(ingredient.quantity),
            None => self.ingredients.push(ingredient),
        }
        self
    }

    /// Total units required per item key, in first-listed order
    ///
    /// Deserialized recipes may list an item more than once; the entries are
    /// summed here.
    pub fn requirements(&self) -> Vec<(ItemKey, u32)> {
        let mut totals: Vec<(ItemKey, u32)> = Vec::new();
        for ingredient in &self.ingredients {
            let key = ingredient.key();
            match totals.iter_mut().find(|(k, _)| *k == key) {
                Some((_, total)) => *total = total.saturating_add(ingredient.quantity),
                None => totals.push((key, ingredient.quantity)),
            }
        }
        totals
    }

    /// First item listed in more than one ingredient entry, if any
    pub fn duplicate_ingredient(&self) -> Option<ItemKey> {
        self.ingredients.iter().enumerate().find_map(|(i, ing)| {
            self.ingredients[..i]
                .iter()
                .any(|prev| prev.matches(&ing.name, ing.item_type))
                .then(|| ing.key())
        })
    }

    /// Name of the crafted item, used to look the recipe up
    pub fn result_name(&self) -> &str {
        &self.result.name
    }

    /// Total units consumed per craft
    pub fn ingredient_count(&self) -> u32 {
        self.ingredients.iter().map(|i| i.quantity).sum()
    }
}
