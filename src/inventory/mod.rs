// Inventory module
//
// Ordered, capacity-bounded item storage carried by the player:
// - Insertion order is kept (first occurrence wins on removal)
// - Duplicate names are allowed

pub mod error;
pub mod inventory;

// Re-export main types
pub use error::InventoryError;
pub use inventory::Inventory;
