// Item system module
//
// This module provides the core item system, including:
// - Item definitions and properties
// - Item registry for centralized storage
// - Runtime item instances with quantity and provenance tracking

pub mod definition;
pub mod instance;
pub mod properties;
pub mod registry;

// Re-export main types for convenient access
pub use definition::ItemDefinition;
pub use instance::{InstanceId, InventoryId, Item};
pub use properties::{ItemCategory, ItemQuality};
pub use registry::ItemRegistry;
