//! Grid position and walking directions
//!
//! The player lives on an unbounded integer grid. `Up` is +y, `Right` is +x.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A point on the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Returns the neighbouring position one step in `direction`
    ///
    /// The grid wraps at the `i32` limits.
    pub const fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Position::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{} Y:{}", self.x, self.y)
    }
}

/// One of the four walkable directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Grid offset for a single step
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known direction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown direction: {0}")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Names are matched exactly and case-sensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::all()
            .into_iter()
            .find(|direction| direction.name() == s)
            .ok_or_else(|| UnknownDirection(s.to_string()))
    }
}

/// How `walk` treats a direction string it doesn't recognise
///
/// `Lenient` keeps the legacy behaviour where an unknown direction counts
/// as a successful walk that goes nowhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionPolicy {
    /// Unknown directions fail and the walk returns false
    #[default]
    Strict,
    /// Unknown directions "succeed" without moving
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_offsets() {
        let origin = Position::ORIGIN;
        assert_eq!(origin.step(Direction::Left), Position::new(-1, 0));
        assert_eq!(origin.step(Direction::Right), Position::new(1, 0));
        assert_eq!(origin.step(Direction::Up), Position::new(0, 1));
        assert_eq!(origin.step(Direction::Down), Position::new(0, -1));
    }

    #[test]
    fn test_step_wraps_at_grid_edge() {
        assert_eq!(
            Position::new(i32::MAX, 0).step(Direction::Right),
            Position::new(i32::MIN, 0)
        );
        assert_eq!(
            Position::new(0, i32::MIN).step(Direction::Down),
            Position::new(0, i32::MAX)
        );
    }

    #[test]
    fn test_parse_exact_names() {
        for direction in Direction::all() {
            assert_eq!(direction.name().parse::<Direction>(), Ok(direction));
        }
    }

    #[test]
    fn test_parse_rejects_other_spellings() {
        assert_eq!(
            "up".parse::<Direction>(),
            Err(UnknownDirection("up".to_string()))
        );
        assert!("North".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(10, -3).to_string(), "X:10 Y:-3");
    }

    #[test]
    fn test_policy_serde_names() {
        let policy: DirectionPolicy = serde_json::from_str("\"lenient\"").unwrap();
        assert_eq!(policy, DirectionPolicy::Lenient);
        assert_eq!(DirectionPolicy::default(), DirectionPolicy::Strict);
    }
}
