//! Player power tracking
//!
//! Power is the player's single health/strength counter. It is an integer:
//! eating good food raises it by one, eating anything else lowers it by one,
//! and a night of rest tops it back up to the starting level.
//!
//! # Rust Learning Notes
//!
//! This module demonstrates:
//! - **NewType Pattern**: Wrapping `i32` in `Power` so it can't be mixed up with coordinates
//! - **Result structs**: `PowerChange` reports both the new value and whether it was fatal

use std::fmt;

/// Power a freshly created player starts with
pub const STARTING_POWER: i32 = 2;

/// Power a rest restores the player to when they are below it
pub const RESTED_POWER: i32 = 2;

/// Represents a player's power level
///
/// The player is alive while power stays above zero. Nothing clamps the
/// value: a fatal shrink leaves it at zero (or below) so callers can see
/// the final state.
///
/// # Example
///
/// ```rust
/// use wanderer::stats::Power;
///
/// let mut power = Power::new();
/// let change = power.shrink();
/// assert_eq!(change.power, 1);
/// assert!(!change.is_fatal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Power(i32);

impl Power {
    /// Creates power at the starting level
    pub fn new() -> Self {
        Power(STARTING_POWER)
    }

    /// Creates power at an arbitrary level
    pub fn with_value(value: i32) -> Self {
        Power(value)
    }

    pub fn current(&self) -> i32 {
        self.0
    }

    /// Checks if the owner is alive (power > 0)
    pub fn is_alive(&self) -> bool {
        self.0 > 0
    }

    /// Lowers power by one
    ///
    /// The decrement always happens; `is_fatal` tells the caller whether
    /// it killed the player.
    pub fn shrink(&mut self) -> PowerChange {
        self.0 -= 1;
        PowerChange {
            power: self.0,
            is_fatal: self.0 <= 0,
        }
    }

    /// Raises power by one and returns the new level
    pub fn grow(&mut self) -> i32 {
        self.0 += 1;
        self.0
    }

    /// Raises power to `floor` if it is below it
    ///
    /// Returns true if anything changed. Power above the floor is left alone.
    pub fn restore(&mut self, floor: i32) -> bool {
        if self.0 < floor {
            self.0 = floor;
            true
        } else {
            false
        }
    }
}

impl Default for Power {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a power decrease
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerChange {
    /// Power after the change
    pub power: i32,
    /// Whether power dropped to zero or below
    pub is_fatal: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_power() {
        let power = Power::new();
        assert_eq!(power.current(), STARTING_POWER);
        assert!(power.is_alive());
    }

    #[test]
    fn test_shrink_to_death() {
        let mut power = Power::new();

        let first = power.shrink();
        assert_eq!(first, PowerChange { power: 1, is_fatal: false });

        let second = power.shrink();
        assert_eq!(second, PowerChange { power: 0, is_fatal: true });
        assert_eq!(power.current(), 0);
        assert!(!power.is_alive());
    }

    #[test]
    fn test_grow_is_unbounded() {
        let mut power = Power::new();
        for _ in 0..5 {
            power.grow();
        }
        assert_eq!(power.current(), 7);
    }

    #[test]
    fn test_restore_only_raises() {
        let mut low = Power::with_value(1);
        assert!(low.restore(RESTED_POWER));
        assert_eq!(low.current(), 2);

        let mut high = Power::with_value(5);
        assert!(!high.restore(RESTED_POWER));
        assert_eq!(high.current(), 5);

        let mut exact = Power::with_value(2);
        assert!(!exact.restore(RESTED_POWER));
        assert_eq!(exact.current(), 2);
    }
}
