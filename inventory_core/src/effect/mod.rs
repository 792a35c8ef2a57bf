//! Status effects (poison, burning, regeneration, stun, frozen)

mod active;
pub mod tick;
mod types;

pub use active::ActiveEffect;
pub use tick::{process_effects, EffectTickResult};
pub use types::{EffectBehavior, EffectKind, EffectTemplate};

use std::collections::HashMap;

/// Effect template registry
#[derive(Debug, Clone, Default)]
pub struct EffectRegistry {
    templates: HashMap<EffectKind, EffectTemplate>,
}

impl EffectRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        EffectRegistry {
            templates: HashMap::new(),
        }
    }

    /// Register a template, replacing any existing one of the same kind
    pub fn register(&mut self, template: EffectTemplate) {
        self.templates.insert(template.kind, template);
    }

    pub fn get(&self, kind: EffectKind) -> Option<&EffectTemplate> {
        self.templates.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Create a fresh effect instance from the registered template
    pub fn instantiate(&self, kind: EffectKind) -> Option<ActiveEffect> {
        self.get(kind).map(EffectTemplate::instantiate)
    }

    /// Load the built-in effects
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(EffectTemplate::new(EffectKind::Poison, 3, 5, EffectBehavior::Damage));
        registry.register(EffectTemplate::new(EffectKind::Burning, 3, 7, EffectBehavior::Damage));
        registry.register(EffectTemplate::new(EffectKind::Regeneration, 3, 5, EffectBehavior::Heal));
        registry.register(EffectTemplate::new(EffectKind::Stun, 1, 0, EffectBehavior::SkipTurn));
        // Frozen chips away at defense while it lasts
        registry.register(EffectTemplate::new(EffectKind::Frozen, 2, 3, EffectBehavior::ReduceDefense));

        registry
    }
}
