//! Property tests for stacking, capacity and sorting

use inventory_core::{Inventory, ItemType};
use proptest::prelude::*;

const NAMES: [&str; 4] = ["Arrow", "Herb", "Iron Ore", "Potion"];

fn item_type() -> impl Strategy<Value = ItemType> {
    prop::sample::select(ItemType::all().to_vec())
}

fn add_op() -> impl Strategy<Value = (usize, ItemType, u32, f64)> {
    (0..NAMES.len(), item_type(), 0u32..25, 0.0f64..5.0)
}

proptest! {
    #[test]
    fn prop_stacked_quantity_equals_sum_added(chunks in prop::collection::vec(0u32..30, 1..20)) {
        let mut inv = Inventory::with_capacity(f64::MAX);
        for qty in &chunks {
            inv.add_item("Arrow", ItemType::Consumable, *qty, 0.1, 0).unwrap();
        }

        let expected: u32 = chunks.iter().sum();
        prop_assert_eq!(inv.quantity_of("Arrow", ItemType::Consumable), expected);
        prop_assert!(inv.items().iter().all(|s| s.quantity() > 0));
    }

    #[test]
    fn prop_weight_never_exceeds_capacity(
        capacity in 0.0f64..60.0,
        ops in prop::collection::vec(add_op(), 0..40),
    ) {
        let mut inv = Inventory::with_capacity(capacity);
        for (name, item_type, qty, weight) in ops {
            let before = inv.items().to_vec();
            if inv.add_item(NAMES[name], item_type, qty, weight, 0).is_err() {
                prop_assert_eq!(inv.items(), before.as_slice());
            }
            prop_assert!(inv.total_weight() <= capacity + 1e-6);
        }
    }

    #[test]
    fn prop_remove_takes_at_most_what_is_held(
        held in prop::collection::vec(1u32..15, 1..6),
        request in 0u32..80,
    ) {
        let mut inv = Inventory::with_capacity(f64::MAX);
        for qty in &held {
            inv.add_item_with_stack_size("Herb", ItemType::Material, *qty, 0.1, 0, 15).unwrap();
        }
        let total = inv.quantity_of("Herb", ItemType::Material);

        let removed = inv.remove_item("Herb", ItemType::Material, request);

        prop_assert_eq!(removed, request.min(total));
        prop_assert_eq!(inv.quantity_of("Herb", ItemType::Material), total - removed);
        prop_assert!(inv.items().iter().all(|s| s.quantity() > 0));
        prop_assert_eq!(inv.has_item("Herb", ItemType::Material, 1), total > removed);
    }

    #[test]
    fn prop_sorts_order_items(ops in prop::collection::vec(add_op(), 1..30)) {
        let mut inv = Inventory::with_capacity(f64::MAX);
        for (name, item_type, qty, weight) in ops {
            inv.add_item(NAMES[name], item_type, qty, weight, 0).unwrap();
        }
        let count = inv.items().len();

        inv.sort_by_name();
        prop_assert!(inv.items().windows(2).all(|w| w[0].name <= w[1].name));

        inv.sort_by_quantity();
        prop_assert!(inv.items().windows(2).all(|w| w[0].quantity() <= w[1].quantity()));

        inv.sort_by_type();
        prop_assert!(inv.items().windows(2).all(|w| w[0].item_type <= w[1].item_type));
        prop_assert_eq!(inv.items().len(), count);
    }
}
