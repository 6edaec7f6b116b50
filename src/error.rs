//! Errors raised by player actions

use crate::inventory::InventoryError;
use thiserror::Error;

/// Every way a player action can fail
///
/// All but `PlayerDied` are recoverable: the action had no effect and the
/// caller may carry on. `PlayerDied` means the player is finished.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Tried to grab while carrying `capacity` items
    #[error("You can't pick up any more items since your inventory is full ({capacity} items)")]
    InventoryFull { capacity: usize },

    /// Tried to drop or use something not in the inventory
    #[error("The {0} isn't in your inventory")]
    ItemNotFound(String),

    /// Power fell to zero or below
    #[error("You died! Game over")]
    PlayerDied,

    /// Undo with nothing dropped yet
    #[error("You have not yet dropped an item")]
    NoPriorDrop,
}

impl PlayerError {
    /// True for the one failure the player can't come back from
    pub fn is_fatal(&self) -> bool {
        matches!(self, PlayerError::PlayerDied)
    }
}

impl From<InventoryError> for PlayerError {
    fn from(error: InventoryError) -> Self {
        match error {
            InventoryError::Full { capacity } => PlayerError::InventoryFull { capacity },
            InventoryError::ItemNotFound(item) => PlayerError::ItemNotFound(item),
        }
    }
}
