// Inventory management core
//
// This crate provides the item and inventory subsystem:
// - Item definitions, registry, and runtime item instances
// - Weight- and slot-constrained inventory container
// - Change notification for UI/observers
// - Interactable contract for world objects (pickups etc.)

pub mod interaction;
pub mod inventory;
pub mod item;

// Re-export main types
pub use interaction::{Interactable, InteractableData, InteractableKind, ItemPickup};
pub use inventory::{AddOutcome, AddResult, ChangeNotifier, Inventory, InventoryError, ListenerId};
pub use item::{
    InstanceId, InventoryId, Item, ItemCategory, ItemDefinition, ItemQuality, ItemRegistry,
};
