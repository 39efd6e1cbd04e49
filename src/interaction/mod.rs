// Interaction module
//
// This module provides the contract between world objects and the
// entity interacting with them:
// - Interactable trait with the focus/interact lifecycle
// - Display data the interaction UI reads
// - ItemPickup, a world-placed item implementing the contract

pub mod pickup;

pub use pickup::ItemPickup;

use serde::{Serialize, Deserialize};

/// What kind of world object an interactable is
///
/// The interaction UI branches on this to decide what to display
/// (e.g. a quantity badge for pickups, a portrait for NPCs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractableKind {
    Pickup,
    NonPlayerCharacter,
    Device,
    Toggle,
    Container,
}

/// Display data for one interactable, consumed by the interaction UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractableData {
    pub kind: InteractableKind,

    /// Display name ("Health Potion", "Old Door")
    pub name: String,

    /// Action verb shown next to the key prompt ("Pick up", "Open")
    pub action: String,

    /// Units on offer; only meaningful for pickups
    pub quantity: u32,

    /// Seconds the interact key must be held; 0 = instantaneous.
    /// The hold timer itself lives with the interacting entity.
    pub interaction_duration: f32,
}

/// Contract every interactable world object implements
///
/// The interacting entity drives the lifecycle: `begin_focus`/`end_focus`
/// as its gaze enters and leaves the object, `begin_interact` when the
/// interact key goes down, `end_interact` if it is released early, and
/// `interact` once the interaction completes. `interact` receives the
/// instigator's inventory so objects can hand items over.
pub trait Interactable {
    /// Display data for the interaction UI
    fn interactable_data(&self) -> &InteractableData;

    /// Gaze has landed on this object (highlight it)
    fn begin_focus(&mut self) {}

    /// Gaze has left this object
    fn end_focus(&mut self) {}

    /// Interact key pressed while focused
    fn begin_interact(&mut self) {}

    /// Interact key released before the interaction completed
    fn end_interact(&mut self) {}

    /// The interaction completed
    fn interact(&mut self, instigator: &mut crate::inventory::Inventory);
}
