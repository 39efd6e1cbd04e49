use std::collections::HashMap;
use super::definition::ItemDefinition;
use super::properties::{ItemCategory, ItemQuality};

/// Central registry of all item definitions
///
/// This is the single source of truth for what items exist. All item
/// references (in inventories, pickups) carry a copy of a definition
/// stamped from this registry.
pub struct ItemRegistry {
    items: HashMap<String, ItemDefinition>,
}

impl ItemRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        ItemRegistry {
            items: HashMap::new(),
        }
    }

    /// Creates a registry with all built-in items pre-registered
    pub fn create_default() -> Self {
        let mut registry = Self::new();
        registry.register_base_items();
        registry
    }

    /// Loads a registry from a JSON array of item definitions
    ///
    /// Definitions are registered in file order; a duplicate id is an error.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let definitions: Vec<ItemDefinition> =
            serde_json::from_str(json).map_err(|e| format!("Invalid item catalog: {}", e))?;

        let mut registry = Self::new();
        for definition in definitions {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Registers a new item definition
    ///
    /// Returns error if an item with this ID already exists.
    pub fn register(&mut self, item: ItemDefinition) -> Result<(), String> {
        if self.items.contains_key(&item.id) {
            return Err(format!("Item '{}' already registered", item.id));
        }

        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    /// Gets an item definition by ID
    ///
    /// Returns None if no item with this ID exists.
    pub fn get(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    /// Returns true if an item with this ID exists
    pub fn exists(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Returns all registered item IDs
    pub fn all_ids(&self) -> Vec<&String> {
        self.items.keys().collect()
    }

    /// Returns all item definitions
    pub fn all_items(&self) -> Vec<&ItemDefinition> {
        self.items.values().collect()
    }

    // ======================================================================
    // Item Registration - Base Items
    // ======================================================================

    /// Registers all built-in items
    fn register_base_items(&mut self) {
        self.register(ItemDefinition::new(
            "health_potion",
            "Health Potion",
            "Restores health when consumed.",
            0.5,
            true,  // Stackable
            16,
            ItemCategory::Consumable,
            ItemQuality::Common,
        )).expect("Failed to register health_potion");

        self.register(ItemDefinition::new(
            "iron_sword",
            "Iron Sword",
            "A plain but serviceable blade.",
            12.0,
            false, // One per slot
            1,
            ItemCategory::Weapon,
            ItemQuality::Common,
        )).expect("Failed to register iron_sword");

        self.register(ItemDefinition::new(
            "gold_coin",
            "Gold Coin",
            "Standard currency.",
            0.01,
            true,
            100,
            ItemCategory::Mundane,
            ItemQuality::Common,
        )).expect("Failed to register gold_coin");
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::create_default()
    }
}
