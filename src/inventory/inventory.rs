use super::error::InventoryError;

/// Item container with a fixed capacity
///
/// Items are plain names. The list keeps insertion order so removal
/// always takes the oldest matching entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    /// Held item names, oldest first
    items: Vec<String>,

    /// Maximum number of items held at once
    capacity: usize,
}

impl Inventory {
    /// Creates a new empty inventory with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Inventory {
            items: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the inventory has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if no more items fit
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Linear membership check by name
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|held| held == item)
    }

    /// Counts how many copies of an item are held
    pub fn count_item(&self, item: &str) -> usize {
        self.items.iter().filter(|held| *held == item).count()
    }

    /// Appends an item
    ///
    /// Fails without touching the contents when the inventory is full.
    pub fn add_item(&mut self, item: impl Into<String>) -> Result<(), InventoryError> {
        if self.is_full() {
            return Err(InventoryError::Full {
                capacity: self.capacity,
            });
        }

        self.items.push(item.into());
        Ok(())
    }

    /// Removes the first occurrence of an item and returns it
    pub fn remove_item(&mut self, item: &str) -> Result<String, InventoryError> {
        let index = self
            .items
            .iter()
            .position(|held| held == item)
            .ok_or_else(|| InventoryError::ItemNotFound(item.to_string()))?;

        Ok(self.items.remove(index))
    }

    /// Iterates over held items, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_until_full() {
        let mut inventory = Inventory::new(2);
        inventory.add_item("Sword").unwrap();
        inventory.add_item("Shield").unwrap();

        assert!(inventory.is_full());
        assert_eq!(
            inventory.add_item("Rock"),
            Err(InventoryError::Full { capacity: 2 })
        );
        assert_eq!(inventory.iter().collect::<Vec<_>>(), vec!["Sword", "Shield"]);
    }

    #[test]
    fn test_remove_first_occurrence_only() {
        let mut inventory = Inventory::new(3);
        inventory.add_item("Sword").unwrap();
        inventory.add_item("Rock").unwrap();
        inventory.add_item("Sword").unwrap();

        let removed = inventory.remove_item("Sword").unwrap();
        assert_eq!(removed, "Sword");
        assert_eq!(inventory.iter().collect::<Vec<_>>(), vec!["Rock", "Sword"]);
        assert_eq!(inventory.count_item("Sword"), 1);
    }

    #[test]
    fn test_remove_missing_item() {
        let mut inventory = Inventory::new(3);
        inventory.add_item("Rock").unwrap();

        assert_eq!(
            inventory.remove_item("Sword"),
            Err(InventoryError::ItemNotFound("Sword".to_string()))
        );
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_huge_capacity_is_only_a_limit() {
        let mut inventory = Inventory::new(usize::MAX);
        inventory.add_item("Feather").unwrap();

        assert_eq!(inventory.len(), 1);
        assert!(!inventory.is_full());
    }

    #[test]
    fn test_zero_capacity_never_accepts() {
        let mut inventory = Inventory::new(0);
        assert!(inventory.is_empty());
        assert!(inventory.is_full());
        assert!(inventory.add_item("Feather").is_err());
    }
}
