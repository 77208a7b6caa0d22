//! Arena Setup
//!
//! Builds the starting arrangement of snakes, obstacles and food, and
//! installs it into the ECS world.

pub mod placement;

use bevy_ecs::prelude::*;
use rand::Rng;

use arena_events::{Direction, EventKind, GridPos, SnakeRole};

use crate::components::{Food, FoodState, GameState, Grid, Obstacles, Snake, SnakeId, TickClock};
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::events::TickEvents;
use crate::systems::{occupied_cells, PlayerInput};

/// Everything placed on the board at reset
#[derive(Debug, Clone, Default)]
pub struct ArenaLayout {
    pub snakes: Vec<(SnakeRole, Snake)>,
    pub obstacles: Obstacles,
    pub food: Option<Food>,
}

impl ArenaLayout {
    /// Random layout following the configured toggles.
    pub fn generate<R: Rng + ?Sized>(
        config: &ArenaConfig,
        grid: &Grid,
        rng: &mut R,
    ) -> Result<Self, ArenaError> {
        let (player_start, opponent_start) = start_positions(grid);

        let mut snakes = vec![(
            SnakeRole::Player,
            Snake::new(player_start, random_direction(rng), config.snakes.player_speed, false),
        )];
        if config.opponent.enabled {
            snakes.push((
                SnakeRole::Opponent,
                Snake::new(opponent_start, random_direction(rng), config.snakes.ai_speed, true),
            ));
        }

        let obstacles = if config.obstacles.enabled {
            let initial_cells: Vec<GridPos> = snakes
                .iter()
                .flat_map(|(_, snake)| snake.body().iter().copied())
                .collect();
            Obstacles::place(
                grid,
                &initial_cells,
                &config.obstacles,
                config.spawning.max_attempts,
                rng,
            )?
        } else {
            Obstacles::default()
        };

        let occupied = occupied_cells(snakes.iter().map(|(_, snake)| snake), &obstacles);
        let food = Food::spawn(
            grid,
            &occupied,
            &config.powerups,
            config.spawning.max_attempts,
            rng,
        )?;

        Ok(Self {
            snakes,
            obstacles,
            food: Some(food),
        })
    }

    /// Every cell lies on the grid and no seat is taken twice.
    pub fn check(&self, grid: &Grid) -> Result<(), ArenaError> {
        let mut roles: Vec<SnakeRole> = self.snakes.iter().map(|(role, _)| *role).collect();
        roles.sort();
        roles.dedup();
        if roles.len() != self.snakes.len() {
            return Err(ArenaError::InvalidLayout("each role may appear once".into()));
        }
        if !roles.contains(&SnakeRole::Player) {
            return Err(ArenaError::InvalidLayout("a player snake is required".into()));
        }

        let cells = self
            .snakes
            .iter()
            .flat_map(|(_, snake)| snake.body().iter().copied())
            .chain(self.obstacles.positions().iter().copied())
            .chain(self.food.iter().map(|food| food.position));
        for cell in cells {
            if !grid.contains(cell) {
                return Err(ArenaError::InvalidLayout(format!("cell {} is off the grid", cell)));
            }
        }
        Ok(())
    }
}

/// Player a quarter of the way across, opponent three quarters, both on the
/// middle row.
pub fn start_positions(grid: &Grid) -> (GridPos, GridPos) {
    let row = grid.height() / 2;
    (
        GridPos::new(grid.width() / 4, row),
        GridPos::new(grid.width() * 3 / 4, row),
    )
}

fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
}

/// Replace every entity and per-game resource in `world` with `layout`.
pub fn install_layout(world: &mut World, layout: ArenaLayout) {
    world.clear_entities();
    for (role, snake) in layout.snakes {
        world.spawn((SnakeId(role), snake));
    }

    let mut events = TickEvents::new();
    events.push(0, EventKind::Reset);
    if let Some(food) = layout.food {
        events.push(
            0,
            EventKind::FoodSpawned {
                at: food.position,
                food: food.kind,
            },
        );
    }

    world.insert_resource(layout.obstacles);
    world.insert_resource(FoodState::new(layout.food));
    world.insert_resource(TickClock::default());
    world.insert_resource(GameState::default());
    world.insert_resource(PlayerInput::new());
    world.insert_resource(events);
}
