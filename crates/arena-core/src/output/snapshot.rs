//! Snapshot Generation
//!
//! Builds the read-only `ArenaSnapshot` a renderer consumes after each tick.

use bevy_ecs::prelude::*;
use std::fs;
use std::path::Path;

use arena_events::{generate_snapshot_id, ArenaSnapshot, SnakeRole};

use crate::components::{FoodState, GameState, Grid, Obstacles, Snake, SnakeId, TickClock};

/// Every snake in the world, player first.
pub fn ordered_snakes(world: &World) -> Vec<(SnakeRole, &Snake)> {
    let mut snakes: Vec<(SnakeRole, &Snake)> = world
        .iter_entities()
        .filter_map(|entity| {
            let id = entity.get::<SnakeId>()?;
            let snake = entity.get::<Snake>()?;
            Some((id.0, snake))
        })
        .collect();
    snakes.sort_by_key(|(role, _)| *role);
    snakes
}

/// Capture the current state of the arena. Dead snakes are left out.
pub fn build_snapshot(world: &World) -> ArenaSnapshot {
    let clock = world.resource::<TickClock>();
    let grid = world.resource::<Grid>();

    ArenaSnapshot {
        snapshot_id: generate_snapshot_id(clock.tick),
        tick: clock.tick,
        status: world.resource::<GameState>().status,
        grid: grid.to_snapshot(),
        snakes: ordered_snakes(world)
            .into_iter()
            .filter(|(_, snake)| snake.is_alive())
            .map(|(role, snake)| snake.to_snapshot(role))
            .collect(),
        obstacles: world.resource::<Obstacles>().positions().to_vec(),
        food: world
            .resource::<FoodState>()
            .current
            .as_ref()
            .map(|food| food.to_snapshot()),
    }
}

/// Write a snapshot as pretty JSON, creating parent directories as needed.
pub fn write_snapshot(snapshot: &ArenaSnapshot, path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = snapshot.to_json_pretty()?;
    fs::write(path, json)
}
