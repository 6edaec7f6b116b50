//! Narration events emitted by player actions
//!
//! Every action records what happened as a `PlayerEvent` instead of printing.
//! A front end can render them as text through `Display` or ship them as JSON
//! through `Serialize`.

use crate::movement::Position;
use serde::Serialize;
use std::fmt;

/// Something observable that a player action did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerEvent {
    /// An item went into the inventory
    Grabbed { item: String },
    /// An item left the inventory
    Dropped { item: String },
    /// The inventory was searched
    Searched { item: String, found: bool },
    /// An item was eaten; `edible` decides whether it helps
    Consumed { item: String, edible: bool },
    PoweredUp { power: i32 },
    PoweredDown { power: i32 },
    /// Power reached zero
    Died,
    /// The trip check failed; no movement
    Tripped { direction: String },
    /// The direction string named no known direction
    UnknownDirection { direction: String },
    /// A walk finished at `position`
    Walked { direction: String, position: Position },
    /// A flight target equal to the current position
    AlreadyThere { position: Position },
    Flew { position: Position },
    Rested,
    PowerRestored { power: i32 },
    /// Undo is about to re-grab the last dropped item
    Reclaimed { item: String },
}

impl PlayerEvent {
    /// Short machine-friendly name, matching the serialized `kind` tag
    pub fn kind(&self) -> &'static str {
        match self {
            PlayerEvent::Grabbed { .. } => "grabbed",
            PlayerEvent::Dropped { .. } => "dropped",
            PlayerEvent::Searched { .. } => "searched",
            PlayerEvent::Consumed { .. } => "consumed",
            PlayerEvent::PoweredUp { .. } => "powered_up",
            PlayerEvent::PoweredDown { .. } => "powered_down",
            PlayerEvent::Died => "died",
            PlayerEvent::Tripped { .. } => "tripped",
            PlayerEvent::UnknownDirection { .. } => "unknown_direction",
            PlayerEvent::Walked { .. } => "walked",
            PlayerEvent::AlreadyThere { .. } => "already_there",
            PlayerEvent::Flew { .. } => "flew",
            PlayerEvent::Rested => "rested",
            PlayerEvent::PowerRestored { .. } => "power_restored",
            PlayerEvent::Reclaimed { .. } => "reclaimed",
        }
    }
}

impl fmt::Display for PlayerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerEvent::Grabbed { item } => {
                write!(f, "You picked up the {} and added it to your inventory", item)
            }
            PlayerEvent::Dropped { item } => write!(f, "The {} was discarded", item),
            PlayerEvent::Searched { item, found } => {
                write!(f, "You searched your inventory for {}", item)?;
                if *found {
                    write!(f, "... you found it!")
                } else {
                    write!(f, "... but it wasn't there")
                }
            }
            PlayerEvent::Consumed { item, edible } => {
                let taste = if *edible { "great" } else { "rancid" };
                write!(f, "You ate the {}. It tastes {}!", item, taste)
            }
            PlayerEvent::PoweredUp { power } => {
                write!(f, "You powered up! You now have {} power", power)
            }
            PlayerEvent::PoweredDown { power } => {
                write!(f, "You powered down! You now have {} power", power)
            }
            PlayerEvent::Died => write!(f, "You died! Game over"),
            PlayerEvent::Tripped { direction } => {
                write!(f, "You tried walking {} but you tripped and fell", direction)
            }
            PlayerEvent::UnknownDirection { direction } => write!(
                f,
                "You tried moving {}, but then realized you don't know what direction that is",
                direction
            ),
            PlayerEvent::Walked { direction, position } => write!(
                f,
                "You successfully walked {}. You are now at {}",
                direction, position
            ),
            PlayerEvent::AlreadyThere { position } => write!(
                f,
                "You wanted to fly to {}... but you are already here!",
                position
            ),
            PlayerEvent::Flew { position } => write!(f, "You flew to the position {}", position),
            PlayerEvent::Rested => write!(f, "You rested at a campfire for the night"),
            PlayerEvent::PowerRestored { power } => {
                write!(f, "Your power was restored to {}", power)
            }
            PlayerEvent::Reclaimed { item } => {
                write!(f, "You decided the {} was actually worth keeping", item)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narration_carries_details() {
        let walked = PlayerEvent::Walked {
            direction: "Up".to_string(),
            position: Position::new(0, 1),
        };
        assert_eq!(
            walked.to_string(),
            "You successfully walked Up. You are now at X:0 Y:1"
        );

        let searched = PlayerEvent::Searched {
            item: "Sword".to_string(),
            found: false,
        };
        assert!(searched.to_string().contains("Sword"));
        assert!(searched.to_string().contains("wasn't there"));
    }

    #[test]
    fn test_serialized_kind_matches() {
        let events = vec![
            PlayerEvent::Died,
            PlayerEvent::PoweredDown { power: 0 },
            PlayerEvent::AlreadyThere {
                position: Position::new(10, 10),
            },
        ];

        for event in events {
            let value = serde_json::to_value(&event).unwrap();
            assert_eq!(value["kind"], event.kind());
        }
    }

    #[test]
    fn test_serialized_fields() {
        let event = PlayerEvent::Flew {
            position: Position::new(3, -4),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["position"]["x"], 3);
        assert_eq!(value["position"]["y"], -4);
    }
}
