//! Snapshot Types
//!
//! Read-only view of the arena handed to renderers once per tick.
//!
//! A snapshot owns copies of everything it reports, so holding one never
//! borrows from the simulation.

use serde::{Deserialize, Serialize};

use crate::grid::{Direction, FoodKind, GridPos, PowerupKind, SnakeRole};

/// Generates a snapshot ID with the given sequence number.
pub fn generate_snapshot_id(sequence: u64) -> String {
    format!("snap_{:06}", sequence)
}

/// Whether the arena is still accepting ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArenaStatus {
    #[default]
    Running,
    /// Terminal until the arena is reset
    GameOver,
}

/// Grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: i32,
    pub height: i32,
}

/// Active modifier on a snake
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerupSnapshot {
    pub kind: PowerupKind,
    /// Seconds left, never negative
    pub remaining: f32,
}

/// A live snake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnakeSnapshot {
    pub role: SnakeRole,
    /// Head first
    pub body: Vec<GridPos>,
    pub direction: Direction,
    pub speed: f32,
    pub score: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub powerup: Option<PowerupSnapshot>,
}

impl SnakeSnapshot {
    pub fn head(&self) -> Option<GridPos> {
        self.body.first().copied()
    }
}

/// The food item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodSnapshot {
    pub position: GridPos,
    pub kind: FoodKind,
}

/// Complete arena state at the end of a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub snapshot_id: String,
    pub tick: u64,
    pub status: ArenaStatus,
    pub grid: GridSnapshot,
    pub snakes: Vec<SnakeSnapshot>,
    #[serde(default)]
    pub obstacles: Vec<GridPos>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<FoodSnapshot>,
}

impl ArenaSnapshot {
    /// Snapshot of the snake in the given seat, if it is alive.
    pub fn snake(&self, role: SnakeRole) -> Option<&SnakeSnapshot> {
        self.snakes.iter().find(|s| s.role == role)
    }

    pub fn is_game_over(&self) -> bool {
        self.status == ArenaStatus::GameOver
    }

    /// Serialize to pretty JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ArenaSnapshot {
        ArenaSnapshot {
            snapshot_id: generate_snapshot_id(7),
            tick: 7,
            status: ArenaStatus::Running,
            grid: GridSnapshot { width: 40, height: 30 },
            snakes: vec![SnakeSnapshot {
                role: SnakeRole::Player,
                body: vec![GridPos::new(10, 15), GridPos::new(9, 15)],
                direction: Direction::Right,
                speed: 20.0,
                score: 1,
                powerup: Some(PowerupSnapshot {
                    kind: PowerupKind::SpeedBoost,
                    remaining: 4.5,
                }),
            }],
            obstacles: vec![GridPos::new(20, 5)],
            food: Some(FoodSnapshot {
                position: GridPos::new(3, 3),
                kind: FoodKind::Normal,
            }),
        }
    }

    #[test]
    fn test_snapshot_id_format() {
        assert_eq!(generate_snapshot_id(7), "snap_000007");
    }

    #[test]
    fn test_snapshot_lookup_by_role() {
        let snapshot = sample();
        let player = snapshot.snake(SnakeRole::Player).unwrap();
        assert_eq!(player.head(), Some(GridPos::new(10, 15)));
        assert!(snapshot.snake(SnakeRole::Opponent).is_none());
        assert!(!snapshot.is_game_over());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["status"], "running");
        assert_eq!(json["snakes"][0]["direction"], "right");
        assert_eq!(json["snakes"][0]["powerup"]["kind"], "speed_boost");
        assert_eq!(json["food"]["kind"], "normal");
    }
}
