// Inventory system module
//
// This module provides inventory management, including:
// - Weight- and slot-constrained inventory container
// - Add-result reporting for partial/failed adds
// - Change notification for observers (UI, interaction layer)

pub mod add_result;
pub mod error;
pub mod inventory;
pub mod notifier;

// Re-export main types
pub use add_result::{AddOutcome, AddResult};
pub use error::InventoryError;
pub use inventory::Inventory;
pub use notifier::{ChangeNotifier, ListenerId};
