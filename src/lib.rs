//! Wanderer: a single player entity for a small text-driven game
//!
//! The `Player` carries an inventory, moves on an integer grid and tracks a
//! power level. Actions return `Result`s and record narration as
//! `PlayerEvent`s for a front end to render.

pub mod config;
pub mod error;
pub mod events;
pub mod inventory;
pub mod item;
pub mod movement;
pub mod player;
pub mod random;
pub mod stats;

pub use config::{ConfigError, PlayerConfig};
pub use error::PlayerError;
pub use events::PlayerEvent;
pub use player::Player;
