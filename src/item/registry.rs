use std::collections::HashSet;

/// Central set of item names the player can eat without powering down
///
/// Fixed at construction. Anything not registered here is treated as
/// inedible by `Player::use_item`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdibleRegistry {
    items: HashSet<String>,
}

impl EdibleRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        EdibleRegistry {
            items: HashSet::new(),
        }
    }

    /// Creates a registry with the base menu pre-registered
    pub fn create_default() -> Self {
        let mut registry = Self::new();
        registry.register_base_items();
        registry
    }

    /// Builds a registry from any list of names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EdibleRegistry {
            items: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Registers an edible item
    ///
    /// Returns false if it was already registered.
    pub fn register(&mut self, name: impl Into<String>) -> bool {
        self.items.insert(name.into())
    }

    /// Returns true if consuming this item grows the player
    pub fn is_edible(&self, name: &str) -> bool {
        self.items.contains(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns all registered names, sorted for stable output
    pub fn all_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.items.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    // ======================================================================
    // Base menu
    // ======================================================================

    fn register_base_items(&mut self) {
        for name in ["Brownies", "Butterscotch Pie", "Pizza"] {
            self.register(name);
        }
    }
}
