//! Integration test: Stock inventory -> Equip -> Craft -> Save/Load -> Battle
//!
//! This test walks the full flow a game session goes through.

use inventory_core::config::{parse_recipe_configs, GameConfig};
use inventory_core::{
    AddOutcome, CombatError, CombatSystem, Combatant, EffectKind, Inventory, InventoryError,
    ItemType, PlayerAction, Side,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Cursor;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

/// Helper to print the item list
fn print_inventory(inv: &Inventory) {
    for item in inv.items() {
        println!(
            "  {} ({}) x{} [{:.2} each]",
            item.name,
            item.item_type,
            item.quantity(),
            item.weight()
        );
    }
    println!(
        "  Weight: {:.2}/{:.2}",
        inv.total_weight(),
        inv.max_weight_capacity()
    );
}

const CONFIG: &str = r#"
[inventory]
max_weight_capacity = 50.0
default_max_stack_size = 10

[combat.player]
name = "Hero"
max_health = 100
attack_power = 15
defense = 5

[combat.enemy]
name = "Goblin"
max_health = 80
attack_power = 12
defense = 4
"#;

const RECIPES: &str = r#"
[[recipes]]
[recipes.result]
name = "Iron Sword"
item_type = "weapon"
weight = 5.0
max_durability = 100
max_stack_size = 1

[[recipes.ingredients]]
name = "Iron Ingot"
item_type = "material"
quantity = 3

[[recipes.ingredients]]
name = "Leather Strip"
item_type = "material"
quantity = 1
"#;

#[test]
fn test_full_session_flow() {
    let config = GameConfig::parse(CONFIG).unwrap();
    let mut inv = Inventory::from_config(&config.inventory);
    for recipe in parse_recipe_configs(RECIPES).unwrap() {
        inv.add_recipe(recipe);
    }

    separator("STEP 1: Stock the inventory");
    inv.add_item("Health Potion", ItemType::Consumable, 5, 0.5, 0).unwrap();
    inv.add_item("Health Potion", ItemType::Consumable, 3, 0.5, 0).unwrap();
    inv.add_item("Iron Ingot", ItemType::Material, 4, 1.0, 0).unwrap();
    inv.add_item("Leather Strip", ItemType::Material, 2, 0.2, 0).unwrap();
    inv.add_item("Chainmail", ItemType::Armor, 1, 12.0, 60).unwrap();
    print_inventory(&inv);

    assert!(inv.has_item("Health Potion", ItemType::Consumable, 8));
    assert_eq!(inv.items().len(), 4);

    let boulder = inv.add_item("Boulder", ItemType::Misc, 1, 100.0, 0);
    assert!(matches!(boulder, Err(InventoryError::CapacityExceeded { .. })));
    assert_eq!(inv.items().len(), 4);

    separator("STEP 2: Equip armor");
    let before = inv.total_weight();
    assert_eq!(inv.equip_item("Chainmail"), Ok(None));
    assert!(inv.is_equipped("Chainmail"));
    assert!((before - inv.total_weight() - 12.0).abs() < 1e-9);

    let potion = inv.equip_item("Health Potion");
    assert!(matches!(potion, Err(InventoryError::NotEquippable { .. })));

    separator("STEP 3: Craft a sword");
    let outcome = inv.craft_item("Iron Sword").unwrap();
    assert_eq!(outcome, AddOutcome::NewStack { index: 3, overflow: false });
    assert_eq!(inv.quantity_of("Iron Ingot", ItemType::Material), 1);
    assert!(!inv.has_item("Leather Strip", ItemType::Material, 2));
    assert!(inv.has_item("Iron Sword", ItemType::Weapon, 1));

    let again = inv.craft_item("Iron Sword");
    assert!(matches!(again, Err(InventoryError::MissingIngredients { .. })));
    print_inventory(&inv);

    separator("STEP 4: Save and load");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    inv.save_inventory(&path).unwrap();

    let mut restored = Inventory::from_config(&config.inventory);
    restored.load_inventory(&path).unwrap();
    assert_eq!(restored.items(), inv.items());
    assert_eq!(restored.equipped_items(), inv.equipped_items());
    assert!(restored.recipes().is_empty());

    separator("STEP 5: Battle");
    let player = Combatant::from_config(&config.combat.player);
    let enemy = Combatant::from_config(&config.combat.enemy);
    let mut battle = CombatSystem::new(player, enemy, ChaCha8Rng::seed_from_u64(7));
    let outcome = battle
        .run_auto(|_, _| PlayerAction::Attack, &mut ())
        .unwrap();
    println!("  {} wins after {} turns", outcome.winner_name, outcome.turns);

    assert!(battle.is_resolved());
    assert!(battle.combatant(outcome.winner).is_alive());
    assert!(!battle.combatant(outcome.winner.opponent()).is_alive());
}

#[test]
fn test_seeded_battles_are_reproducible() {
    let config = GameConfig::default();
    let fight = |seed: u64| {
        let mut battle = CombatSystem::new(
            Combatant::from_config(&config.combat.player),
            Combatant::from_config(&config.combat.enemy),
            ChaCha8Rng::seed_from_u64(seed),
        );
        let mut log = Vec::new();
        let mut observer = Transcript(&mut log);
        let outcome = battle
            .run_auto(|_, enemy| {
                if enemy.has_effect(EffectKind::Poison) {
                    PlayerAction::Attack
                } else {
                    PlayerAction::Poison
                }
            }, &mut observer)
            .unwrap();
        (outcome, log)
    };

    for seed in [1, 42, 1234] {
        let (first, first_log) = fight(seed);
        let (second, second_log) = fight(seed);
        assert_eq!(first, second);
        assert_eq!(first_log, second_log);
        assert_eq!(first_log.len() as u32, first.turns);
    }
}

struct Transcript<'a>(&'a mut Vec<String>);

impl inventory_core::BattleObserver for Transcript<'_> {
    fn on_turn(&mut self, report: &inventory_core::TurnReport) {
        self.0.push(report.summary());
    }
}

#[test]
fn test_interactive_battle_reads_choices() {
    let player = Combatant::new("Hero", 100, 15, 5);
    let enemy = Combatant::new("Slime", 10, 1, 0);
    let mut battle = CombatSystem::new(player, enemy, ChaCha8Rng::seed_from_u64(3));

    let mut input = Cursor::new("x\n1\n");
    let outcome = battle.run(&mut input, &mut ()).unwrap();

    assert_eq!(outcome.winner, Side::Player);
    assert_eq!(outcome.turns, 3);
    assert!(!battle.enemy().is_alive());
}

#[test]
fn test_interactive_battle_stops_when_input_closes() {
    let player = Combatant::new("Hero", 100, 15, 5);
    let enemy = Combatant::new("Goblin", 80, 12, 4);
    let mut battle = CombatSystem::new(player, enemy, ChaCha8Rng::seed_from_u64(3));

    let mut input = Cursor::new("1\n");
    let result = battle.run(&mut input, &mut ());

    assert!(matches!(result, Err(CombatError::InputClosed)));
    assert!(!battle.is_resolved());
}
