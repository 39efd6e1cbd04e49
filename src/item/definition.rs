use serde::{Serialize, Deserialize};
use super::properties::{ItemCategory, ItemQuality};

/// The blueprint for an item kind
///
/// This defines the static properties shared across all instances of a
/// kind. Think of it as the "class" and `Item` as the "instance": every
/// runtime item is stamped from one of these templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique identifier (used for kind matching and catalog lookups)
    pub id: String,

    /// Display name shown in UI
    pub name: String,

    /// Description shown in tooltips
    pub description: String,

    /// Weight of a single unit (must be > 0 for the item to be addable)
    pub single_weight: f32,

    /// Whether multiple units share one slot
    pub is_stackable: bool,

    /// Maximum units per stack; only meaningful when `is_stackable`
    pub max_stack_size: u32,

    /// Broad category for sorting/display
    pub category: ItemCategory,

    /// Rarity tier
    pub quality: ItemQuality,
}

impl ItemDefinition {
    /// Creates a new item definition
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        single_weight: f32,
        is_stackable: bool,
        max_stack_size: u32,
        category: ItemCategory,
        quality: ItemQuality,
    ) -> Self {
        ItemDefinition {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            single_weight,
            is_stackable,
            max_stack_size,
            category,
            quality,
        }
    }

    /// Upper bound on one stack's quantity
    ///
    /// Non-stackable kinds behave as a stack of at most 1.
    pub fn stack_limit(&self) -> u32 {
        if self.is_stackable {
            self.max_stack_size
        } else {
            1
        }
    }
}
