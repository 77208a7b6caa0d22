//! ECS Systems
//!
//! The tick pipeline. Systems run strictly in this order every tick:
//! player input, opponent decision, movement, food consumption, food
//! respawn, game-over detection.

pub mod ai;
pub mod consumption;
pub mod input;
pub mod movement;
pub mod status;

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use std::collections::HashSet;

use arena_events::GridPos;

use crate::components::{Obstacles, Snake, SnakeId};

pub use ai::{choose_direction, decide_ai_directions, nearest_food};
pub use consumption::{resolve_food_consumption, respawn_food};
pub use input::{apply_player_input, PlayerInput};
pub use movement::advance_snakes;
pub use status::update_game_status;

/// Build the single-threaded schedule that advances the arena by one tick.
pub fn build_tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.add_systems(
        (
            apply_player_input,
            decide_ai_directions,
            advance_snakes,
            resolve_food_consumption,
            respawn_food,
            update_game_status,
        )
            .chain(),
    );
    schedule
}

/// Snake entities sorted by role, player first.
pub(crate) fn processing_order(snakes: &Query<(Entity, &SnakeId, &mut Snake)>) -> Vec<Entity> {
    let mut order: Vec<(SnakeId, Entity)> =
        snakes.iter().map(|(entity, id, _)| (*id, entity)).collect();
    order.sort();
    order.into_iter().map(|(_, entity)| entity).collect()
}

/// Every cell of every live snake other than `except`, as they stand now.
pub(crate) fn other_live_cells(
    snakes: &Query<(Entity, &SnakeId, &mut Snake)>,
    except: Entity,
) -> Vec<GridPos> {
    snakes
        .iter()
        .filter(|(entity, _, snake)| *entity != except && snake.is_alive())
        .flat_map(|(_, _, snake)| snake.body().iter().copied())
        .collect()
}

/// Cells food may not spawn on: live snake bodies and obstacles.
pub fn occupied_cells<'a>(
    snakes: impl IntoIterator<Item = &'a Snake>,
    obstacles: &Obstacles,
) -> HashSet<GridPos> {
    snakes
        .into_iter()
        .filter(|snake| snake.is_alive())
        .flat_map(|snake| snake.body().iter().copied())
        .chain(obstacles.positions().iter().copied())
        .collect()
}
