use thiserror::Error;

/// Errors that can occur during inventory operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Inventory is full (can't add more items)
    #[error("Inventory is full ({capacity} items)")]
    Full { capacity: usize },

    /// Tried to remove an item that isn't held
    #[error("Item not in inventory: {0}")]
    ItemNotFound(String),
}
