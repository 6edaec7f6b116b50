//! The player entity
//!
//! A `Player` carries a small inventory, walks (or flies) around an integer
//! grid and has a power level that food raises and everything else lowers.
//! Each action records `PlayerEvent`s describing what happened; failures come
//! back as `PlayerError`.
//!
//! # Ordering guarantees
//!
//! - A failed action changes nothing, except `shrink`: its decrement sticks
//!   even when it kills the player.
//! - `use_item` eats before it removes, so a fatal bite leaves the item in
//!   the inventory.
//! - `undo` never forgets the last drop; calling it twice grabs the item twice.

use crate::config::{ConfigError, PlayerConfig};
use crate::error::PlayerError;
use crate::events::PlayerEvent;
use crate::inventory::Inventory;
use crate::item::EdibleRegistry;
use crate::movement::{Direction, DirectionPolicy, Position};
use crate::random::{CoinFlip, SeededCoin};
use crate::stats::{Power, RESTED_POWER};
use std::fmt;
use tracing::{debug, warn};

pub struct Player {
    inventory: Inventory,
    /// Most recent drop, kept for `undo`
    last_item_dropped: Option<String>,
    power: Power,
    position: Position,
    edible_items: EdibleRegistry,
    direction_policy: DirectionPolicy,
    coin: Box<dyn CoinFlip>,
    events: Vec<PlayerEvent>,
}

impl Player {
    /// Creates a player at the origin with starting power
    ///
    /// `capacity` should be at least 1; with 0 every grab fails.
    pub fn new(
        capacity: usize,
        edible_items: EdibleRegistry,
        coin: impl CoinFlip + 'static,
    ) -> Self {
        Player {
            inventory: Inventory::new(capacity),
            last_item_dropped: None,
            power: Power::new(),
            position: Position::ORIGIN,
            edible_items,
            direction_policy: DirectionPolicy::default(),
            coin: Box::new(coin),
            events: Vec::new(),
        }
    }

    /// Builds a player from a validated config
    pub fn from_config(config: &PlayerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let edible_items = config.edible_registry();
        let player = match config.rng_seed {
            Some(seed) => Player::new(
                config.inventory_capacity,
                edible_items,
                SeededCoin::from_seed(seed),
            ),
            None => Player::new(
                config.inventory_capacity,
                edible_items,
                SeededCoin::from_entropy(),
            ),
        };

        Ok(player.with_direction_policy(config.direction_policy))
    }

    pub fn with_direction_policy(mut self, policy: DirectionPolicy) -> Self {
        self.direction_policy = policy;
        self
    }

    // ======================================================================
    // Inventory actions
    // ======================================================================

    /// Picks an item up
    pub fn grab(&mut self, item: impl Into<String>) -> Result<(), PlayerError> {
        let item = item.into();
        self.inventory.add_item(item.clone())?;
        self.emit(PlayerEvent::Grabbed { item });
        Ok(())
    }

    /// Drops the first copy of an item and remembers it for `undo`
    pub fn drop_item(&mut self, item: &str) -> Result<String, PlayerError> {
        let dropped = self.inventory.remove_item(item)?;
        self.last_item_dropped = Some(dropped.clone());
        self.emit(PlayerEvent::Dropped {
            item: dropped.clone(),
        });
        Ok(dropped)
    }

    /// Searches the inventory for an item; never fails
    pub fn examine(&mut self, item: &str) -> bool {
        let found = self.inventory.contains(item);
        self.emit(PlayerEvent::Searched {
            item: item.to_string(),
            found,
        });
        found
    }

    /// Eats an item, then removes it from the inventory
    ///
    /// Edible items grow the player, anything else shrinks them. If the
    /// shrink is fatal the error comes back before removal, so the item
    /// stays in the inventory. Returns the new power level.
    pub fn use_item(&mut self, item: &str) -> Result<i32, PlayerError> {
        if !self.inventory.contains(item) {
            return Err(PlayerError::ItemNotFound(item.to_string()));
        }

        let edible = self.edible_items.is_edible(item);
        self.emit(PlayerEvent::Consumed {
            item: item.to_string(),
            edible,
        });

        let power = if edible { self.grow() } else { self.shrink()? };

        self.inventory.remove_item(item)?;
        Ok(power)
    }

    /// Re-grabs the last dropped item
    ///
    /// The remembered drop is kept, so repeated calls grab it again.
    pub fn undo(&mut self) -> Result<(), PlayerError> {
        let item = self
            .last_item_dropped
            .clone()
            .ok_or(PlayerError::NoPriorDrop)?;

        self.emit(PlayerEvent::Reclaimed { item: item.clone() });
        self.grab(item)
    }

    // ======================================================================
    // Movement
    // ======================================================================

    /// Tries to take one step
    ///
    /// Flips the coin first; on a trip nothing moves. Otherwise the direction
    /// must be one of `Up`, `Down`, `Left`, `Right`. Under the lenient policy
    /// any other string counts as a walk that goes nowhere and returns true.
    pub fn walk(&mut self, direction: &str) -> bool {
        if !self.coin.flip() {
            self.emit(PlayerEvent::Tripped {
                direction: direction.to_string(),
            });
            return false;
        }

        match direction.parse::<Direction>() {
            Ok(parsed) => {
                self.position = self.position.step(parsed);
            }
            Err(_) if self.direction_policy == DirectionPolicy::Lenient => {}
            Err(_) => {
                self.emit(PlayerEvent::UnknownDirection {
                    direction: direction.to_string(),
                });
                return false;
            }
        }

        self.emit(PlayerEvent::Walked {
            direction: direction.to_string(),
            position: self.position,
        });
        true
    }

    /// Teleports to `(x, y)`; returns false if already there
    pub fn fly(&mut self, x: i32, y: i32) -> bool {
        let target = Position::new(x, y);
        if target == self.position {
            self.emit(PlayerEvent::AlreadyThere { position: target });
            return false;
        }

        self.position = target;
        self.emit(PlayerEvent::Flew { position: target });
        true
    }

    // ======================================================================
    // Power
    // ======================================================================

    /// Lowers power by one
    ///
    /// The decrement is kept even when it is fatal.
    pub fn shrink(&mut self) -> Result<i32, PlayerError> {
        let change = self.power.shrink();
        self.emit(PlayerEvent::PoweredDown {
            power: change.power,
        });

        if change.is_fatal {
            warn!(power = change.power, "Player died");
            self.emit(PlayerEvent::Died);
            return Err(PlayerError::PlayerDied);
        }

        Ok(change.power)
    }

    /// Raises power by one
    pub fn grow(&mut self) -> i32 {
        let power = self.power.grow();
        self.emit(PlayerEvent::PoweredUp { power });
        power
    }

    /// Restores power to the rested level if below it
    pub fn rest(&mut self) {
        self.emit(PlayerEvent::Rested);
        if self.power.restore(RESTED_POWER) {
            self.emit(PlayerEvent::PowerRestored {
                power: self.power.current(),
            });
        }
    }

    // ======================================================================
    // State access
    // ======================================================================

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn last_item_dropped(&self) -> Option<&str> {
        self.last_item_dropped.as_deref()
    }

    pub fn power(&self) -> i32 {
        self.power.current()
    }

    pub fn is_alive(&self) -> bool {
        self.power.is_alive()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn edible_items(&self) -> &EdibleRegistry {
        &self.edible_items
    }

    pub fn direction_policy(&self) -> DirectionPolicy {
        self.direction_policy
    }

    /// Events recorded so far, oldest first
    pub fn events(&self) -> &[PlayerEvent] {
        &self.events
    }

    /// Drains the event log
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: PlayerEvent) {
        debug!(kind = event.kind(), "{}", event);
        self.events.push(event);
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("inventory", &self.inventory)
            .field("last_item_dropped", &self.last_item_dropped)
            .field("power", &self.power)
            .field("position", &self.position)
            .field("edible_items", &self.edible_items)
            .field("direction_policy", &self.direction_policy)
            .field("events", &self.events.len())
            .finish_non_exhaustive()
    }
}
