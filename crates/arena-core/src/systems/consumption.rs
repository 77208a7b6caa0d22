//! Consumption System
//!
//! Detects a live head on the food, applies the effect, and respawns the
//! food away from every occupied cell.

use bevy_ecs::prelude::*;

use arena_events::EventKind;

use crate::components::{Food, FoodState, Grid, Obstacles, Snake, SnakeId, TickClock};
use crate::config::ArenaConfig;
use crate::events::TickEvents;
use crate::systems::{occupied_cells, processing_order};
use crate::SimRng;

/// System: let the first live snake (player first) whose head is on the
/// food eat it, and flag the food for respawn.
pub fn resolve_food_consumption(
    clock: Res<TickClock>,
    config: Res<ArenaConfig>,
    mut food: ResMut<FoodState>,
    mut events: ResMut<TickEvents>,
    mut snakes: Query<(Entity, &SnakeId, &mut Snake)>,
) {
    let Some(current) = food.current else {
        return;
    };

    for entity in processing_order(&snakes) {
        let Ok((_, &SnakeId(role), mut snake)) = snakes.get_mut(entity) else {
            continue;
        };
        if !snake.is_alive() || snake.head() != current.position {
            continue;
        }

        let activated = snake.on_consume(current.kind, &config.powerups);
        tracing::debug!(snake = %role, food = ?current.kind, at = %current.position, "food eaten");
        events.push(
            clock.tick,
            EventKind::FoodEaten {
                snake: role,
                at: current.position,
                food: current.kind,
            },
        );
        if let Some(powerup) = activated {
            events.push(
                clock.tick,
                EventKind::PowerupActivated {
                    snake: role,
                    powerup,
                    duration: config.powerups.duration,
                },
            );
        }

        food.current = None;
        food.respawn_requested = true;
        break;
    }
}

/// System: replace eaten food on a free cell.
///
/// A saturated board leaves the arena without food instead of failing the
/// tick.
#[allow(clippy::too_many_arguments)]
pub fn respawn_food(
    clock: Res<TickClock>,
    grid: Res<Grid>,
    config: Res<ArenaConfig>,
    obstacles: Res<Obstacles>,
    mut rng: ResMut<SimRng>,
    mut food: ResMut<FoodState>,
    mut events: ResMut<TickEvents>,
    snakes: Query<&Snake>,
) {
    if !food.respawn_requested {
        return;
    }
    food.respawn_requested = false;

    let occupied = occupied_cells(snakes.iter(), &obstacles);
    match Food::spawn(
        &grid,
        &occupied,
        &config.powerups,
        config.spawning.max_attempts,
        &mut rng.0,
    ) {
        Ok(spawned) => {
            events.push(
                clock.tick,
                EventKind::FoodSpawned {
                    at: spawned.position,
                    food: spawned.kind,
                },
            );
            food.current = Some(spawned);
        }
        Err(e) => {
            tracing::warn!("No food respawned at tick {}: {}", clock.tick, e);
        }
    }
}
