use std::sync::atomic::{AtomicU64, Ordering};
use serde::{Serialize, Deserialize};
use super::definition::ItemDefinition;

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// Handle identifying one `Inventory` without owning it
///
/// Items store this instead of a reference to their container, so an item
/// never keeps its owner alive. Mapping a handle back to a container is the
/// caller's job (one lookup table per game/session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryId(pub u64);

/// Handle identifying one `Item` instance (not its kind)
///
/// Two stacks of the same kind have equal definition ids but distinct
/// instance ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(u64);

impl InstanceId {
    fn next() -> Self {
        InstanceId(NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A runtime item instance with quantity
///
/// Each instance carries its own copy of the kind's definition (stamped
/// from the registry), its current stack size, and provenance flags that
/// tell a container whether it may absorb the instance directly or must
/// duplicate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Static kind data this instance was stamped from
    pub definition: ItemDefinition,

    /// Current stack size (0..=stack_limit)
    quantity: u32,

    /// True if this instance was duplicated for a transfer/split
    pub is_copy: bool,

    /// True if this instance represents a world-placed pickup
    pub is_pickup: bool,

    /// Handle of the container currently holding this instance, if any
    pub owning_inventory: Option<InventoryId>,

    instance: InstanceId,
}

impl Item {
    /// Creates a standalone item instance of the given kind
    ///
    /// A standalone instance may carry more than one stack's worth; the
    /// container chunks it across stacks on add.
    pub fn new(definition: ItemDefinition, quantity: u32) -> Self {
        Item {
            definition,
            quantity,
            is_copy: false,
            is_pickup: false,
            owning_inventory: None,
            instance: InstanceId::next(),
        }
    }

    /// Creates a world-pickup instance of the given kind
    ///
    /// Pickup instances are absorbed directly when added to a container.
    pub fn pickup(definition: ItemDefinition, quantity: u32) -> Self {
        let mut item = Item::new(definition, quantity);
        item.is_pickup = true;
        item
    }

    /// Stable identifier of this instance (not its kind)
    pub fn instance_id(&self) -> InstanceId {
        self.instance
    }

    /// Identifier of this item's kind
    pub fn kind_id(&self) -> &str {
        &self.definition.id
    }

    /// Display name of this item's kind
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Current stack size
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Weight of a single unit
    ///
    /// Callers must treat a non-positive weight as a misconfigured kind:
    /// such items are rejected by every add path.
    pub fn single_weight(&self) -> f32 {
        self.definition.single_weight
    }

    /// Total weight of this stack (`quantity × single_weight`)
    pub fn stack_weight(&self) -> f32 {
        self.quantity as f32 * self.definition.single_weight
    }

    /// Sets the stack size
    ///
    /// Once a container holds this instance, quantity is clamped to the
    /// kind's stack limit (`[0, 1]` for non-stackable kinds, so removal
    /// can still zero it). A standalone instance keeps whatever it is
    /// given: a world pickup or transfer payload may carry several
    /// stacks' worth, which the container splits into chunks on add.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = if self.owning_inventory.is_some() {
            quantity.min(self.definition.stack_limit())
        } else {
            quantity
        };
    }

    /// Returns true if two instances are of the same kind
    ///
    /// This is the container's matching rule: kinds compare by definition
    /// id, never by instance identity.
    pub fn same_kind(&self, other: &Item) -> bool {
        self.definition.id == other.definition.id
    }

    /// Returns true if this stack cannot take another unit
    ///
    /// Only meaningful for stackable kinds; a non-stackable item is always
    /// its own singleton and never "full" in the stacking sense.
    pub fn is_full_stack(&self) -> bool {
        self.definition.is_stackable && self.quantity == self.definition.max_stack_size
    }

    /// Units this stack can still take before hitting its limit
    pub fn stack_room(&self) -> u32 {
        self.definition.stack_limit().saturating_sub(self.quantity)
    }

    /// Creates an unowned duplicate of this item with the given quantity
    ///
    /// The duplicate shares kind/weight/stack data, carries `is_copy`, has
    /// no owner, and gets a fresh instance id. The original is untouched.
    pub fn create_copy(&self, quantity: u32) -> Item {
        let mut copy = Item::new(self.definition.clone(), quantity);
        copy.is_copy = true;
        copy
    }

    /// Clears both provenance flags
    ///
    /// Called when a container absorbs this instance.
    pub fn reset_provenance_flags(&mut self) {
        self.is_copy = false;
        self.is_pickup = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::properties::{ItemCategory, ItemQuality};

    fn potion_def() -> ItemDefinition {
        ItemDefinition::new(
            "health_potion",
            "Health Potion",
            "Restores health when consumed.",
            0.5,
            true,
            16,
            ItemCategory::Consumable,
            ItemQuality::Common,
        )
    }

    fn sword_def() -> ItemDefinition {
        ItemDefinition::new(
            "iron_sword",
            "Iron Sword",
            "A plain but serviceable blade.",
            12.0,
            false,
            1,
            ItemCategory::Weapon,
            ItemQuality::Common,
        )
    }

    #[test]
    fn test_set_quantity_clamps_contained_stack() {
        let mut potion = Item::new(potion_def(), 5);
        potion.owning_inventory = Some(InventoryId(1));

        potion.set_quantity(100);
        assert_eq!(potion.quantity(), 16); // Clamped to max_stack_size
    }

    #[test]
    fn test_standalone_quantity_not_clamped() {
        // A world pickup may offer several stacks' worth; the container
        // chunks it on add, so the instance itself must not truncate it
        let mut pickup = Item::pickup(potion_def(), 40);
        assert_eq!(pickup.quantity(), 40);

        pickup.set_quantity(25);
        assert_eq!(pickup.quantity(), 25); // Still unowned, still unclamped
    }

    #[test]
    fn test_set_quantity_contained_non_stackable() {
        let mut sword = Item::new(sword_def(), 5);
        sword.owning_inventory = Some(InventoryId(1));

        sword.set_quantity(5);
        assert_eq!(sword.quantity(), 1); // Treated as a singleton

        sword.set_quantity(0);
        assert_eq!(sword.quantity(), 0); // Removal can still zero it
    }

    #[test]
    fn test_full_stack() {
        let mut potion = Item::new(potion_def(), 16);
        assert!(potion.is_full_stack());
        assert_eq!(potion.stack_room(), 0);

        potion.set_quantity(10);
        assert!(!potion.is_full_stack());
        assert_eq!(potion.stack_room(), 6);
    }

    #[test]
    fn test_non_stackable_never_full_stack() {
        let sword = Item::new(sword_def(), 1);
        assert!(!sword.is_full_stack());
    }

    #[test]
    fn test_stack_weight() {
        let potion = Item::new(potion_def(), 10);
        assert!((potion.stack_weight() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_create_copy() {
        let potion = Item::new(potion_def(), 10);
        let copy = potion.create_copy(3);

        assert!(copy.same_kind(&potion));
        assert_eq!(copy.quantity(), 3);
        assert!(copy.is_copy);
        assert!(copy.owning_inventory.is_none());
        assert_ne!(copy.instance_id(), potion.instance_id()); // Fresh instance
        assert_eq!(potion.quantity(), 10); // Original untouched
    }

    #[test]
    fn test_same_kind_ignores_instance() {
        let a = Item::new(potion_def(), 1);
        let b = Item::new(potion_def(), 7);
        let c = Item::new(sword_def(), 1);

        assert!(a.same_kind(&b));
        assert!(!a.same_kind(&c));
    }

    #[test]
    fn test_reset_provenance_flags() {
        let mut pickup = Item::pickup(potion_def(), 4);
        assert!(pickup.is_pickup);

        pickup.reset_provenance_flags();
        assert!(!pickup.is_pickup);
        assert!(!pickup.is_copy);
    }
}
