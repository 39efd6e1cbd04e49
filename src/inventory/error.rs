use std::fmt;

/// Errors that can occur during inventory operations
///
/// Only conditions surfaced through a `Result` live here; the add paths
/// report weight overflow and misconfigured items through `AddResult`
/// messages instead.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryError {
    /// No free slot for another item instance
    CapacityExceeded,

    /// The referenced item instance is not in this inventory
    ItemNotFound,

    /// Tried to remove or split more items than the stack holds
    InsufficientItems {
        requested: u32,
        available: u32,
    },
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InventoryError::CapacityExceeded => {
                write!(f, "No free inventory slot")
            }
            InventoryError::ItemNotFound => {
                write!(f, "Item instance not found in inventory")
            }
            InventoryError::InsufficientItems { requested, available } => {
                write!(f, "Insufficient items (requested: {}, available: {})", requested, available)
            }
        }
    }
}

impl std::error::Error for InventoryError {}

impl From<InventoryError> for String {
    fn from(error: InventoryError) -> Self {
        error.to_string()
    }
}
