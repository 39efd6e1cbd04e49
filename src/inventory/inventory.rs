use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::item::{InstanceId, InventoryId, Item};
use super::add_result::AddResult;
use super::error::InventoryError;
use super::notifier::{ChangeNotifier, ListenerId};

static NEXT_INVENTORY_ID: AtomicU64 = AtomicU64::new(1);

/// Weight- and slot-constrained item container
///
/// Contents are an ordered sequence of item instances; insertion order is
/// stable so the UI can render deterministically. Two capacities bound the
/// container: a slot count (distinct instances, not total quantity) and a
/// weight ceiling over `quantity × single_weight` summed across contents.
/// Every mutation keeps the cached total weight in sync and broadcasts a
/// change notification.
///
/// All operations are synchronous and single-threaded; the container is
/// exclusively owned by one entity for its whole lifetime.
pub struct Inventory {
    id: InventoryId,
    owner: Option<String>,
    contents: Vec<Item>,
    slots_capacity: usize,
    weight_capacity: f32,
    total_weight: f32,
    notifier: ChangeNotifier,
}

impl Inventory {
    /// Creates an empty inventory with fixed capacities
    ///
    /// Capacities cannot be resized after construction. The inventory has
    /// no owner context yet; `handle_add_item` rejects until one is set.
    pub fn new(slots_capacity: usize, weight_capacity: f32) -> Self {
        Inventory {
            id: InventoryId(NEXT_INVENTORY_ID.fetch_add(1, Ordering::Relaxed)),
            owner: None,
            contents: Vec::new(),
            slots_capacity,
            weight_capacity,
            total_weight: 0.0,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Handle identifying this inventory (stored by contained items)
    pub fn id(&self) -> InventoryId {
        self.id
    }

    /// Attaches the owning entity's context (e.g. a character name)
    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = Some(owner.into());
    }

    /// The owning entity's context, if attached
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Ordered view of the contained item instances
    pub fn contents(&self) -> &[Item] {
        &self.contents
    }

    /// Number of occupied slots (instances, not units)
    pub fn slots_used(&self) -> usize {
        self.contents.len()
    }

    /// Maximum number of distinct item instances
    pub fn slots_capacity(&self) -> usize {
        self.slots_capacity
    }

    /// Maximum total weight
    pub fn weight_capacity(&self) -> f32 {
        self.weight_capacity
    }

    /// Cached sum of `quantity × single_weight` over contents
    pub fn total_weight(&self) -> f32 {
        self.total_weight
    }

    /// Registers a change listener; fired after every mutation
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        self.notifier.subscribe(listener)
    }

    /// Removes a change listener
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    // ======================================================================
    // Queries
    // ======================================================================

    /// Finds the given instance in contents, by instance identity
    pub fn find_matching_item(&self, item: &Item) -> Option<&Item> {
        self.contents
            .iter()
            .find(|contained| contained.instance_id() == item.instance_id())
    }

    /// Finds the first instance of the same kind, by definition id
    pub fn find_next_item_by_id(&self, item: &Item) -> Option<&Item> {
        self.contents.iter().find(|contained| contained.same_kind(item))
    }

    /// Finds the first same-kind stack that still has room
    pub fn find_next_partial_stack(&self, item: &Item) -> Option<&Item> {
        self.contents
            .iter()
            .find(|contained| contained.same_kind(item) && !contained.is_full_stack())
    }

    fn partial_stack_index(&self, item: &Item) -> Option<usize> {
        self.contents
            .iter()
            .position(|contained| contained.same_kind(item) && !contained.is_full_stack())
    }

    fn instance_index(&self, instance: InstanceId) -> Option<usize> {
        self.contents
            .iter()
            .position(|contained| contained.instance_id() == instance)
    }

    // ======================================================================
    // Capacity math
    // ======================================================================

    /// How many units of `item` the weight ceiling alone admits
    ///
    /// Returns `min(add_amount, floor(headroom / single_weight))`; zero for
    /// a non-positive unit weight.
    pub fn calculate_weight_add_amount(&self, item: &Item, add_amount: u32) -> u32 {
        self.weight_limited_amount(item.single_weight(), add_amount)
    }

    /// How many units one existing stack admits under its per-stack cap
    pub fn calculate_number_for_full_stack(&self, stack: &Item, add_amount: u32) -> u32 {
        add_amount.min(stack.stack_room())
    }

    fn weight_limited_amount(&self, single_weight: f32, add_amount: u32) -> u32 {
        if single_weight <= 0.0 {
            return 0;
        }
        let headroom = self.weight_capacity - self.total_weight;
        if headroom <= 0.0 {
            return 0;
        }
        add_amount.min((headroom / single_weight).floor() as u32)
    }

    // ======================================================================
    // Mutations
    // ======================================================================

    /// Unconditionally inserts an item as a new stack
    ///
    /// This is the only path that appends to contents, and it is NOT
    /// capacity-checked: callers must have validated slot and weight
    /// capacity already (`handle_add_item` does). A copy or pickup
    /// instance is absorbed directly with its provenance flags cleared;
    /// any other instance is duplicated and the original left untouched.
    /// Returns the inserted instance's id.
    pub fn add_new_item(&mut self, item: Item, amount: u32) -> InstanceId {
        let mut new_item = if item.is_copy || item.is_pickup {
            let mut absorbed = item;
            absorbed.reset_provenance_flags();
            absorbed
        } else {
            item.create_copy(amount)
        };

        new_item.owning_inventory = Some(self.id);
        new_item.set_quantity(amount);

        let instance = new_item.instance_id();
        self.total_weight += new_item.stack_weight();
        self.contents.push(new_item);
        self.notifier.broadcast();
        instance
    }

    /// Removes an entire stack from contents
    ///
    /// Subtracts the stack's weight, clears the removed item's owner
    /// handle, and returns the item so the caller can move it elsewhere.
    /// Returns None if the instance is not in this inventory.
    pub fn remove_single_instance(&mut self, instance: InstanceId) -> Option<Item> {
        let index = self.instance_index(instance)?;
        let mut removed = self.contents.remove(index);
        self.total_weight -= removed.stack_weight();
        removed.owning_inventory = None;
        self.notifier.broadcast();
        Some(removed)
    }

    /// Removes up to `amount_to_remove` units from one stack
    ///
    /// Clamps to the stack's quantity and returns the amount actually
    /// removed. The entry is NOT evicted when its quantity reaches zero;
    /// callers decide when ghost entries disappear, via
    /// `remove_single_instance` or `prune_empty_stacks`.
    pub fn remove_amount(&mut self, instance: InstanceId, amount_to_remove: u32) -> u32 {
        let Some(index) = self.instance_index(instance) else {
            return 0;
        };

        let quantity = self.contents[index].quantity();
        let single_weight = self.contents[index].single_weight();
        let actual = amount_to_remove.min(quantity);

        self.contents[index].set_quantity(quantity - actual);
        self.total_weight -= actual as f32 * single_weight;
        self.notifier.broadcast();
        actual
    }

    /// Drops every zero-quantity entry from contents
    ///
    /// Returns how many entries were removed.
    pub fn prune_empty_stacks(&mut self) -> usize {
        let before = self.contents.len();
        self.contents.retain(|item| item.quantity() > 0);
        let removed = before - self.contents.len();
        if removed > 0 {
            self.notifier.broadcast();
        }
        removed
    }

    /// Splits part of a stack into a new, separate stack
    ///
    /// The split-off quantity becomes a new entry of the same kind and the
    /// new instance's id is returned. Errors instead of silently doing
    /// nothing: `CapacityExceeded` when no slot is free, `ItemNotFound`
    /// for a missing instance, and `InsufficientItems` when the amount is
    /// zero or not strictly below the stack's quantity (splitting a whole
    /// stack would leave a ghost entry behind).
    pub fn split_existing_stack(
        &mut self,
        instance: InstanceId,
        amount_to_split: u32,
    ) -> Result<InstanceId, InventoryError> {
        if self.contents.len() + 1 > self.slots_capacity {
            return Err(InventoryError::CapacityExceeded);
        }

        let index = self
            .instance_index(instance)
            .ok_or(InventoryError::ItemNotFound)?;

        let available = self.contents[index].quantity();
        if amount_to_split == 0 || amount_to_split >= available {
            return Err(InventoryError::InsufficientItems {
                requested: amount_to_split,
                available,
            });
        }

        self.remove_amount(instance, amount_to_split);
        let split_off = self.contents[index].create_copy(amount_to_split);
        Ok(self.add_new_item(split_off, amount_to_split))
    }

    /// Entry point for adding an item to the inventory
    ///
    /// Requires an attached owner context. Dispatches on the item's
    /// stackable flag and classifies the outcome against the requested
    /// amount (the item's quantity; 1 for non-stackable items).
    pub fn handle_add_item(&mut self, item: Item) -> AddResult {
        if self.owner.is_none() {
            return AddResult::added_none(
                "Could not add item to the inventory. No owner found!",
            );
        }

        if !item.definition.is_stackable {
            return self.handle_non_stackable_items(item);
        }

        let requested = item.quantity();
        if requested == 0 {
            return AddResult::added_none(format!(
                "Could not add {} to the inventory. Nothing to add!",
                item.name()
            ));
        }

        let name = item.name().to_string();
        let added = self.handle_stackable_items(item, requested);

        if added == requested {
            AddResult::added_all(added, format!(
                "Successfully added {} {} to the inventory!",
                added, name
            ))
        } else if added > 0 {
            AddResult::added_some(added, format!(
                "Could not add all {} to the inventory. Added {} instead!",
                name, added
            ))
        } else {
            AddResult::added_none(format!(
                "Could not add {} to the inventory. No remaining slots or invalid item!",
                name
            ))
        }
    }

    /// Admits a non-stackable item into its own slot
    ///
    /// Rejects a non-positive unit weight, a weight overflow, or full
    /// slots; otherwise inserts exactly one unit.
    fn handle_non_stackable_items(&mut self, item: Item) -> AddResult {
        let single_weight = item.single_weight();

        if single_weight <= f32::EPSILON {
            return AddResult::added_none(format!(
                "Could not add {} to the inventory. Item has no weight!",
                item.name()
            ));
        }

        if self.total_weight + single_weight > self.weight_capacity {
            return AddResult::added_none(format!(
                "Could not add {} to the inventory. Item overflows the weight limit!",
                item.name()
            ));
        }

        if self.contents.len() + 1 > self.slots_capacity {
            return AddResult::added_none(format!(
                "Could not add {} to the inventory. No free inventory slot!",
                item.name()
            ));
        }

        let name = item.name().to_string();
        self.add_new_item(item, 1);
        AddResult::added_all(1, format!(
            "Successfully added {} to the inventory!",
            name
        ))
    }

    /// Distributes a stackable item across the inventory
    ///
    /// Phase 1 tops up existing partial stacks of the same kind, bounded
    /// by each stack's remaining room and the weight ceiling. Phase 2
    /// opens new stacks in chunks of at most the kind's stack limit while
    /// slots and weight allow; the final chunk absorbs the original
    /// instance so a fully admitted pickup keeps its identity. Returns
    /// the number of units actually admitted.
    fn handle_stackable_items(&mut self, item: Item, requested: u32) -> u32 {
        let single_weight = item.single_weight();
        if single_weight <= f32::EPSILON {
            return 0;
        }

        let mut remaining = requested;

        // Phase 1: top up existing partial stacks
        while remaining > 0 {
            let Some(index) = self.partial_stack_index(&item) else {
                break;
            };

            let stack_capped = {
                let stack = &self.contents[index];
                self.calculate_number_for_full_stack(stack, remaining)
            };
            let to_add = self.weight_limited_amount(single_weight, stack_capped);
            if to_add == 0 {
                // Weight ceiling reached
                return requested - remaining;
            }

            let quantity = self.contents[index].quantity();
            self.contents[index].set_quantity(quantity + to_add);
            self.total_weight += to_add as f32 * single_weight;
            remaining -= to_add;
            self.notifier.broadcast();
        }

        // Phase 2: open new stacks while slots and weight allow
        let stack_limit = item.definition.stack_limit();
        while remaining > 0 && self.contents.len() < self.slots_capacity {
            let chunk = self.weight_limited_amount(single_weight, remaining.min(stack_limit));
            if chunk == 0 {
                break;
            }

            remaining -= chunk;
            if remaining == 0 {
                self.add_new_item(item, chunk);
                return requested;
            }
            let split_off = item.create_copy(chunk);
            self.add_new_item(split_off, chunk);
        }

        requested - remaining
    }
}

impl fmt::Debug for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Inventory")
            .field("id", &self.id)
            .field("owner", &self.owner)
            .field("contents", &self.contents)
            .field("slots_capacity", &self.slots_capacity)
            .field("weight_capacity", &self.weight_capacity)
            .field("total_weight", &self.total_weight)
            .field("notifier", &self.notifier)
            .finish()
    }
}
