//! Grid Vocabulary
//!
//! Cell coordinates, headings and the closed sets of food and power-up kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the arena grid.
///
/// Coordinates are only guaranteed to be inside the grid once they have been
/// wrapped by the simulation; raw offsets may temporarily leave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Unwrapped neighbour; callers wrap it onto the torus.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Squared Euclidean distance on raw coordinates (no toroidal shortcut).
    pub fn distance_squared(self, other: GridPos) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Heading of a snake. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed enumeration order; decision ties resolve to the earliest entry.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step as `(dx, dy)`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Category of a spawned food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodKind {
    Normal,
    SpeedBoost,
    SlowMo,
}

impl FoodKind {
    /// The timed modifier granted when this food is eaten, if any.
    pub fn powerup(self) -> Option<PowerupKind> {
        match self {
            FoodKind::Normal => None,
            FoodKind::SpeedBoost => Some(PowerupKind::SpeedBoost),
            FoodKind::SlowMo => Some(PowerupKind::SlowMotion),
        }
    }
}

/// Timed speed modifier carried by a snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerupKind {
    SpeedBoost,
    SlowMotion,
}

/// Which seat a snake occupies. The derived order is the processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnakeRole {
    /// Driven by the input queue
    Player,
    /// Driven by the greedy decision procedure
    Opponent,
}

impl SnakeRole {
    pub fn is_ai(self) -> bool {
        matches!(self, SnakeRole::Opponent)
    }
}

impl fmt::Display for SnakeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeRole::Player => write!(f, "player"),
            SnakeRole::Opponent => write!(f, "opponent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_pair_up() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert!(dir.is_opposite(dir.opposite()));
            assert!(!dir.is_opposite(dir));
            let (dx, dy) = dir.delta();
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_food_powerup_mapping() {
        assert_eq!(FoodKind::Normal.powerup(), None);
        assert_eq!(FoodKind::SpeedBoost.powerup(), Some(PowerupKind::SpeedBoost));
        assert_eq!(FoodKind::SlowMo.powerup(), Some(PowerupKind::SlowMotion));
    }

    #[test]
    fn test_distance_ignores_wrap() {
        let a = GridPos::new(0, 0);
        assert_eq!(a.distance_squared(GridPos::new(3, 4)), 25);
        assert_eq!(a.distance_squared(GridPos::new(9, 0)), 81);
    }

    #[test]
    fn test_role_order_puts_player_first() {
        let mut roles = vec![SnakeRole::Opponent, SnakeRole::Player];
        roles.sort();
        assert_eq!(roles, vec![SnakeRole::Player, SnakeRole::Opponent]);
    }
}
