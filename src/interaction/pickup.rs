use crate::inventory::{AddOutcome, Inventory};
use crate::item::{Item, ItemDefinition};
use super::{Interactable, InteractableData, InteractableKind};

/// A world-placed item waiting to be picked up
///
/// Holds a pickup-flagged `Item` instance. On interaction the item is
/// offered to the instigator's inventory; if only part of it fits, the
/// remainder stays in the world with its quantity reduced. The world
/// removes the pickup once `is_taken` reports true.
pub struct ItemPickup {
    data: InteractableData,
    item: Option<Item>,
    focused: bool,
}

impl ItemPickup {
    /// Places a pickup of the given kind and quantity in the world
    pub fn new(definition: ItemDefinition, quantity: u32) -> Self {
        let item = Item::pickup(definition, quantity);
        let data = InteractableData {
            kind: InteractableKind::Pickup,
            name: item.name().to_string(),
            action: "Pick up".to_string(),
            quantity: item.quantity(),
            interaction_duration: 0.0,
        };

        ItemPickup {
            data,
            item: Some(item),
            focused: false,
        }
    }

    /// The item still on offer, if any
    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    /// True while the instigator's gaze is on this pickup
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// True once the item has been fully taken
    pub fn is_taken(&self) -> bool {
        self.item.is_none()
    }
}

impl Interactable for ItemPickup {
    fn interactable_data(&self) -> &InteractableData {
        &self.data
    }

    fn begin_focus(&mut self) {
        self.focused = true;
    }

    fn end_focus(&mut self) {
        self.focused = false;
    }

    fn interact(&mut self, instigator: &mut Inventory) {
        let Some(item) = self.item.take() else {
            return;
        };

        let offered = item.quantity();
        let mut backup = item.clone();
        let result = instigator.handle_add_item(item);

        match result.outcome {
            AddOutcome::AddedAll => {
                // Fully taken; on a whole-stack add the instance itself now
                // lives in the instigator's inventory
            }
            AddOutcome::AddedSome => {
                // Partial adds insert copies, so the backup's instance id is
                // still unique to the world
                backup.set_quantity(offered - result.amount_added);
                self.data.quantity = backup.quantity();
                self.item = Some(backup);
            }
            AddOutcome::AddedNone => {
                self.item = Some(backup);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemCategory, ItemQuality};

    fn ore_def(max_stack_size: u32) -> ItemDefinition {
        ItemDefinition::new(
            "ore",
            "Iron Ore",
            "A chunk of raw iron.",
            2.0,
            true,
            max_stack_size,
            ItemCategory::Mundane,
            ItemQuality::Common,
        )
    }

    #[test]
    fn test_pickup_fully_taken() {
        let mut inventory = Inventory::new(5, 100.0);
        inventory.set_owner("miner");
        let mut pickup = ItemPickup::new(ore_def(10), 6);

        pickup.interact(&mut inventory);
        assert!(pickup.is_taken());
        assert_eq!(inventory.contents()[0].quantity(), 6);
    }

    #[test]
    fn test_pickup_partial_take_leaves_remainder() {
        // Weight capacity 8, unit weight 2: only 4 units fit
        let mut inventory = Inventory::new(5, 8.0);
        inventory.set_owner("miner");
        let mut pickup = ItemPickup::new(ore_def(10), 6);

        pickup.interact(&mut inventory);
        assert!(!pickup.is_taken());
        assert_eq!(pickup.item().unwrap().quantity(), 2);
        assert_eq!(pickup.interactable_data().quantity, 2);
        assert_eq!(inventory.contents()[0].quantity(), 4);
    }

    #[test]
    fn test_pickup_rejected_stays_in_world() {
        // No owner context: the add is rejected outright
        let mut inventory = Inventory::new(5, 100.0);
        let mut pickup = ItemPickup::new(ore_def(10), 6);

        pickup.interact(&mut inventory);
        assert!(!pickup.is_taken());
        assert_eq!(pickup.item().unwrap().quantity(), 6);
        assert!(inventory.contents().is_empty());
    }

    #[test]
    fn test_focus_lifecycle() {
        let mut pickup = ItemPickup::new(ore_def(10), 1);
        assert!(!pickup.is_focused());

        pickup.begin_focus();
        assert!(pickup.is_focused());
        pickup.end_focus();
        assert!(!pickup.is_focused());
    }

    #[test]
    fn test_interact_after_taken_is_noop() {
        let mut inventory = Inventory::new(5, 100.0);
        inventory.set_owner("miner");
        let mut pickup = ItemPickup::new(ore_def(10), 2);

        pickup.interact(&mut inventory);
        pickup.interact(&mut inventory); // Nothing left to hand over
        assert_eq!(inventory.slots_used(), 1);
        assert_eq!(inventory.contents()[0].quantity(), 2);
    }
}
