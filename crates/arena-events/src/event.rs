//! Event Types
//!
//! Everything notable that happens during a tick, in the order it happened.

use serde::{Deserialize, Serialize};

use crate::grid::{FoodKind, GridPos, PowerupKind, SnakeRole};

/// What killed a snake. Checked in declaration order; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathCause {
    SelfCollision,
    Obstacle,
    OtherSnake,
}

/// Event payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    FoodSpawned {
        at: GridPos,
        food: FoodKind,
    },
    FoodEaten {
        snake: SnakeRole,
        at: GridPos,
        food: FoodKind,
    },
    PowerupActivated {
        snake: SnakeRole,
        powerup: PowerupKind,
        duration: f32,
    },
    PowerupExpired {
        snake: SnakeRole,
    },
    SnakeDied {
        snake: SnakeRole,
        cause: DeathCause,
        at: GridPos,
        length: usize,
    },
    GameOver {
        player_score: usize,
    },
    Reset,
}

/// A single event stamped with the tick that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaEvent {
    pub tick: u64,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl ArenaEvent {
    pub fn new(tick: u64, kind: EventKind) -> Self {
        Self { tick, kind }
    }

    /// Short label for log lines.
    pub fn label(&self) -> &'static str {
        match self.kind {
            EventKind::FoodSpawned { .. } => "food_spawned",
            EventKind::FoodEaten { .. } => "food_eaten",
            EventKind::PowerupActivated { .. } => "powerup_activated",
            EventKind::PowerupExpired { .. } => "powerup_expired",
            EventKind::SnakeDied { .. } => "snake_died",
            EventKind::GameOver { .. } => "game_over",
            EventKind::Reset => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_flat_with_type_tag() {
        let event = ArenaEvent::new(
            12,
            EventKind::SnakeDied {
                snake: SnakeRole::Opponent,
                cause: DeathCause::Obstacle,
                at: GridPos::new(4, 7),
                length: 3,
            },
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["tick"], 12);
        assert_eq!(json["type"], "snake_died");
        assert_eq!(json["snake"], "opponent");
        assert_eq!(json["cause"], "obstacle");
        assert_eq!(json["at"]["x"], 4);
        assert_eq!(event.label(), "snake_died");
    }

    #[test]
    fn test_event_parses_from_jsonl_line() {
        let line = r#"{"tick":3,"type":"food_eaten","snake":"player","at":{"x":1,"y":2},"food":"slow_mo"}"#;
        let event: ArenaEvent = serde_json::from_str(line).unwrap();
        assert_eq!(
            event.kind,
            EventKind::FoodEaten {
                snake: SnakeRole::Player,
                at: GridPos::new(1, 2),
                food: FoodKind::SlowMo,
            }
        );
    }
}
