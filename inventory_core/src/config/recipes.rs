//! Crafting recipe loading

use super::ConfigError;
use crate::inventory::Recipe;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for recipe configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipesConfig {
    #[serde(rename = "recipes")]
    pub recipes: Vec<Recipe>,
}

fn validate(recipes: Vec<Recipe>) -> Result<Vec<Recipe>, ConfigError> {
    for recipe in &recipes {
        if recipe.result_name().trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "recipe result name must not be empty".to_string(),
            ));
        }
        if recipe.ingredients.iter().any(|i| i.quantity == 0) {
            return Err(ConfigError::ValidationError(format!(
                "{} has an ingredient with zero quantity",
                recipe.result_name()
            )));
        }
        if let Some(key) = recipe.duplicate_ingredient() {
            return Err(ConfigError::ValidationError(format!(
                "{} lists {} more than once",
                recipe.result_name(),
                key
            )));
        }
    }
    Ok(recipes)
}

/// Load recipes from a TOML file
pub fn load_recipe_configs(path: &Path) -> Result<Vec<Recipe>, ConfigError> {
    let config: RecipesConfig = super::load_toml(path)?;
    validate(config.recipes)
}

/// Load recipes from a TOML string
pub fn parse_recipe_configs(content: &str) -> Result<Vec<Recipe>, ConfigError> {
    let config: RecipesConfig = super::parse_toml(content)?;
    validate(config.recipes)
}

/// Get the bundled recipe book
pub fn default_recipes() -> Vec<Recipe> {
    let toml = include_str!("../../config/recipes.toml");
    parse_recipe_configs(toml).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemType;

    #[test]
    fn test_parse_recipes() {
        let toml = r#"
[[recipes]]
[recipes.result]
name = "Torch"
item_type = "misc"
weight = 0.5

[[recipes.ingredients]]
name = "Stick"
item_type = "material"
quantity = 1

[[recipes.ingredients]]
name = "Cloth"
item_type = "material"
quantity = 2
"#;

        let recipes = parse_recipe_configs(toml).unwrap();
        assert_eq!(recipes.len(), 1);

        let torch = &recipes[0];
        assert_eq!(torch.result_name(), "Torch");
        assert_eq!(torch.result.item_type, ItemType::Misc);
        assert_eq!(torch.result.max_stack_size, 10);
        assert_eq!(torch.ingredients[1].quantity, 2);
    }

    #[test]
    fn test_zero_quantity_ingredient_rejected() {
        let toml = r#"
[[recipes]]
[recipes.result]
name = "Nothing"
item_type = "misc"

[[recipes.ingredients]]
name = "Air"
item_type = "material"
quantity = 0
"#;
        assert!(matches!(
            parse_recipe_configs(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_repeated_ingredient_rejected() {
        let toml = r#"
[[recipes]]
[recipes.result]
name = "Bar"
item_type = "material"

[[recipes.ingredients]]
name = "Iron Ingot"
item_type = "material"
quantity = 2

[[recipes.ingredients]]
name = "Iron Ingot"
item_type = "material"
quantity = 2
"#;
        match parse_recipe_configs(toml) {
            Err(ConfigError::ValidationError(message)) => {
                assert!(message.contains("Iron Ingot (Material)"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_recipes_loads_all() {
        let recipes = default_recipes();

        assert_eq!(recipes.len(), 4, "Expected 4 recipes from config");

        let expected = ["Iron Sword", "Leather Armor", "Health Potion", "Iron Ingot"];
        for name in expected {
            assert!(
                recipes.iter().any(|r| r.result_name() == name),
                "Missing recipe: {}",
                name
            );
        }
    }
}
