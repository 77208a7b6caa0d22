//! Player Input System
//!
//! Directional events from whatever input device drives the player are
//! queued here between ticks and applied first thing in the next one.

use bevy_ecs::prelude::*;

use arena_events::{Direction, SnakeRole};

use crate::components::{Snake, SnakeId};

/// Turn requests waiting for the next tick, oldest first
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayerInput {
    queued: Vec<Direction>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, direction: Direction) {
        self.queued.push(direction);
    }

    pub fn len(&self) -> usize {
        self.queued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }

    pub fn take(&mut self) -> Vec<Direction> {
        std::mem::take(&mut self.queued)
    }
}

/// System: feed queued turns to the player snake in arrival order.
///
/// Each request is judged against the direction the snake is moving in
/// now, so two quick presses cannot add up to a reversal.
pub fn apply_player_input(
    mut input: ResMut<PlayerInput>,
    mut snakes: Query<(&SnakeId, &mut Snake)>,
) {
    if input.is_empty() {
        return;
    }
    let queued = input.take();
    for (id, mut snake) in snakes.iter_mut() {
        if id.0 != SnakeRole::Player {
            continue;
        }
        for &direction in &queued {
            if !snake.request_direction(direction) {
                tracing::trace!(?direction, "ignored reversing turn");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_take_empties() {
        let mut input = PlayerInput::new();
        input.push(Direction::Up);
        input.push(Direction::Left);
        assert_eq!(input.len(), 2);
        assert_eq!(input.take(), vec![Direction::Up, Direction::Left]);
        assert!(input.is_empty());
    }
}
