//! Movement System
//!
//! Advances every live snake by the tick delta, player first. Each snake
//! checks the others' bodies as they stand at the moment it moves.

use bevy_ecs::prelude::*;

use arena_events::EventKind;

use crate::components::{Grid, Obstacles, Snake, SnakeId, Surroundings, TickClock};
use crate::events::TickEvents;
use crate::systems::{other_live_cells, processing_order};

/// System: step snakes, record modifier expiry and deaths.
pub fn advance_snakes(
    clock: Res<TickClock>,
    grid: Res<Grid>,
    obstacles: Res<Obstacles>,
    mut events: ResMut<TickEvents>,
    mut snakes: Query<(Entity, &SnakeId, &mut Snake)>,
) {
    for entity in processing_order(&snakes) {
        let others = other_live_cells(&snakes, entity);
        let Ok((_, &SnakeId(role), mut snake)) = snakes.get_mut(entity) else {
            continue;
        };
        if !snake.is_alive() {
            continue;
        }

        let surroundings = Surroundings::new(&grid, obstacles.positions(), &others);
        let outcome = snake.advance(clock.delta, &surroundings);

        if outcome.powerup_expired {
            tracing::debug!(snake = %role, tick = clock.tick, "powerup expired");
            events.push(clock.tick, EventKind::PowerupExpired { snake: role });
        }
        if let Some(cause) = outcome.death {
            tracing::info!(
                snake = %role,
                ?cause,
                at = %snake.head(),
                length = snake.len(),
                "Snake died at tick {}",
                clock.tick
            );
            events.push(
                clock.tick,
                EventKind::SnakeDied {
                    snake: role,
                    cause,
                    at: snake.head(),
                    length: snake.len(),
                },
            );
        }
    }
}
