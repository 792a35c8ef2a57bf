//! The fixed inventory walkthrough run before the battle

use inventory_core::{default_recipes, GameConfig, Inventory, ItemType, UseOutcome};
use std::error::Error;
use std::path::Path;

/// Print a section banner
pub fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

fn print_inventory(inv: &Inventory) {
    if inv.items().is_empty() {
        println!("  (no items)");
    }
    for item in inv.items() {
        let mut line = format!(
            "  {:<16} {:<10} x{:<3} {:>6.2} wt",
            item.name,
            item.item_type.to_string(),
            item.quantity(),
            item.total_weight()
        );
        if item.max_durability() > 0 {
            line.push_str(&format!("  [{}/{}]", item.durability(), item.max_durability()));
        }
        println!("{}", line);
    }

    let mut equipped: Vec<&String> = inv.equipped_items().keys().collect();
    equipped.sort();
    if !equipped.is_empty() {
        let names: Vec<&str> = equipped.iter().map(|s| s.as_str()).collect();
        println!("  Equipped: {}", names.join(", "));
    }
    println!(
        "  Weight: {:.2}/{:.2}",
        inv.total_weight(),
        inv.max_weight_capacity()
    );
}

/// Walk through every inventory operation, then save and reload the result
pub fn run(config: &GameConfig, save_path: &Path) -> Result<Inventory, Box<dyn Error>> {
    let mut inv = Inventory::from_config(&config.inventory);
    for recipe in default_recipes() {
        inv.add_recipe(recipe);
    }

    separator("Stocking up");
    inv.add_item("Health Potion", ItemType::Consumable, 5, 0.5, 0)?;
    inv.add_item("Health Potion", ItemType::Consumable, 3, 0.5, 0)?;
    println!(
        "  Two potion pickups stack: has 8 potions = {}",
        inv.has_item("Health Potion", ItemType::Consumable, 8)
    );
    inv.add_item("Iron Ore", ItemType::Material, 6, 1.5, 0)?;
    inv.add_item("Iron Ingot", ItemType::Material, 2, 1.0, 0)?;
    inv.add_item("Leather Strip", ItemType::Material, 3, 0.2, 0)?;
    inv.add_item("Chainmail", ItemType::Armor, 1, 12.0, 60)?;
    inv.add_item("Old Key", ItemType::Quest, 1, 0.1, 0)?;
    print_inventory(&inv);

    let mut satchel = Inventory::with_capacity(1.0);
    if let Err(e) = satchel.add_item("Heavy Sword", ItemType::Weapon, 1, 2.0, 100) {
        println!("  A 1.0 capacity satchel refuses the Heavy Sword: {}", e);
    }

    separator("Equipment");
    inv.equip_item("Chainmail")?;
    println!("  Equipped Chainmail");
    if let Err(e) = inv.equip_item("Health Potion") {
        println!("  {}", e);
    }
    print_inventory(&inv);

    separator("Crafting");
    inv.craft_item("Iron Ingot")?;
    println!("  Smelted an Iron Ingot from 2 Iron Ore");
    inv.craft_item("Iron Sword")?;
    println!("  Forged an Iron Sword");
    if let Err(e) = inv.craft_item("Leather Armor") {
        println!("  {}", e);
    }
    if let Err(e) = inv.craft_item("Dragon Bow") {
        println!("  {}", e);
    }
    inv.equip_item("Iron Sword")?;
    print_inventory(&inv);

    separator("Using items");
    if let UseOutcome::Consumed { remaining } = inv.use_item("Health Potion", ItemType::Consumable)? {
        println!("  Drank a Health Potion, {} left", remaining);
    }
    let usable = inv.degrade_item("Iron Sword", ItemType::Weapon, 25)?;
    println!("  The Iron Sword took 25 wear (usable: {})", usable);
    let removed = inv.remove_item("Iron Ore", ItemType::Material, 10);
    println!("  Dropped {} Iron Ore", removed);
    inv.unequip_item("Chainmail")?;
    println!("  Took off the Chainmail");

    separator("Sorting");
    inv.sort_by_type();
    println!("  By type:");
    print_inventory(&inv);
    inv.sort_by_name();
    println!("  By name:");
    print_inventory(&inv);
    let materials: Vec<&str> = inv
        .items_by_type(ItemType::Material)
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    println!("  Materials: {}", materials.join(", "));

    separator("Save and load");
    inv.save_inventory(save_path)?;
    println!("  Saved to {}", save_path.display());

    let mut restored = Inventory::from_config(&config.inventory);
    restored.load_inventory(save_path)?;
    println!("  Reloaded:");
    print_inventory(&restored);

    Ok(restored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_runs_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let inv = run(&GameConfig::default(), &path).unwrap();

        assert!(path.exists());
        assert!(inv.has_item("Health Potion", ItemType::Consumable, 7));
        assert!(!inv.has_item("Iron Ore", ItemType::Material, 1));
        assert!(inv.has_item("Chainmail", ItemType::Armor, 1));
        assert!(inv.is_equipped("Iron Sword"));
        assert_eq!(inv.equipped("Iron Sword").unwrap().durability(), 75);
        assert_eq!(inv.quantity_of("Leather Strip", ItemType::Material), 2);
        assert_eq!(inv.quantity_of("Iron Ingot", ItemType::Material), 0);
    }
}
