//! Arena
//!
//! The tick controller: owns the ECS world holding every snake, obstacle and
//! the food, and runs the tick schedule over it.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use arena_events::{ArenaEvent, ArenaSnapshot, ArenaStatus, Direction, GridPos, SnakeRole};

use crate::components::{Food, FoodState, GameState, Grid, Obstacles, Snake, Surroundings, TickClock};
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::events::TickEvents;
use crate::output::{build_snapshot, ordered_snakes};
use crate::setup::{install_layout, ArenaLayout};
use crate::systems::{build_tick_schedule, choose_direction, nearest_food, PlayerInput};
use crate::SimRng;

/// A running snake arena
pub struct Arena {
    world: World,
    schedule: Schedule,
}

impl Arena {
    /// Build an arena with a random layout drawn from `seed`.
    pub fn new(config: ArenaConfig, seed: u64) -> Result<Self, ArenaError> {
        let grid = Self::checked_grid(&config)?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let layout = ArenaLayout::generate(&config, &grid, &mut rng)?;
        Ok(Self::assemble(config, grid, rng, layout))
    }

    /// Build an arena from an explicit layout. `seed` drives later food
    /// respawns and resets.
    pub fn from_layout(config: ArenaConfig, seed: u64, layout: ArenaLayout) -> Result<Self, ArenaError> {
        let grid = Self::checked_grid(&config)?;
        layout.check(&grid)?;
        Ok(Self::assemble(config, grid, SmallRng::seed_from_u64(seed), layout))
    }

    fn checked_grid(config: &ArenaConfig) -> Result<Grid, ArenaError> {
        config.validate()?;
        Grid::from_config(config)
    }

    fn assemble(config: ArenaConfig, grid: Grid, rng: SmallRng, layout: ArenaLayout) -> Self {
        let mut world = World::new();
        world.insert_resource(config);
        world.insert_resource(grid);
        world.insert_resource(SimRng(rng));
        install_layout(&mut world, layout);
        tracing::info!(
            width = grid.width(),
            height = grid.height(),
            "Arena ready"
        );
        Self {
            world,
            schedule: build_tick_schedule(),
        }
    }

    /// Rebuild every snake, the obstacles and the food from scratch. The
    /// random stream continues from where it was.
    pub fn reset(&mut self) -> Result<(), ArenaError> {
        let config = self.config().clone();
        let grid = self.grid();
        let layout = self
            .world
            .resource_scope(|_, mut rng: Mut<SimRng>| ArenaLayout::generate(&config, &grid, &mut rng.0))?;
        install_layout(&mut self.world, layout);
        tracing::info!("Arena reset");
        Ok(())
    }

    /// Queue a turn for the player, applied at the start of the next tick.
    pub fn queue_input(&mut self, direction: Direction) {
        if self.is_game_over() {
            return;
        }
        self.world.resource_mut::<PlayerInput>().push(direction);
    }

    /// Advance the simulation by `dt` seconds. Does nothing once the game
    /// is over.
    pub fn tick(&mut self, dt: f32) -> ArenaStatus {
        if self.is_game_over() {
            return ArenaStatus::GameOver;
        }
        self.world.resource_mut::<TickClock>().advance(dt);
        self.schedule.run(&mut self.world);
        self.status()
    }

    /// Take every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<ArenaEvent> {
        self.world.resource_mut::<TickEvents>().drain()
    }

    pub fn snapshot(&self) -> ArenaSnapshot {
        build_snapshot(&self.world)
    }

    pub fn status(&self) -> ArenaStatus {
        self.world.resource::<GameState>().status
    }

    pub fn is_game_over(&self) -> bool {
        self.world.resource::<GameState>().is_game_over()
    }

    pub fn current_tick(&self) -> u64 {
        self.world.resource::<TickClock>().tick
    }

    pub fn config(&self) -> &ArenaConfig {
        self.world.resource::<ArenaConfig>()
    }

    pub fn grid(&self) -> Grid {
        *self.world.resource::<Grid>()
    }

    /// Every snake, dead or alive, player first.
    pub fn snakes(&self) -> Vec<(SnakeRole, &Snake)> {
        ordered_snakes(&self.world)
    }

    pub fn snake(&self, role: SnakeRole) -> Option<&Snake> {
        self.snakes()
            .into_iter()
            .find(|(r, _)| *r == role)
            .map(|(_, snake)| snake)
    }

    pub fn obstacles(&self) -> &[GridPos] {
        self.world.resource::<Obstacles>().positions()
    }

    pub fn food(&self) -> Option<Food> {
        self.world.resource::<FoodState>().current
    }

    /// The move the opponent's greedy procedure would pick for the player
    /// right now, or `None` when the player is dead or there is no food.
    pub fn autopilot_direction(&self) -> Option<Direction> {
        let snakes = self.snakes();
        let (_, player) = snakes
            .iter()
            .find(|(role, snake)| *role == SnakeRole::Player && snake.is_alive())?;
        let foods: Vec<GridPos> = self.food().iter().map(|food| food.position).collect();
        let target = nearest_food(player.head(), &foods)?;

        let others: Vec<GridPos> = snakes
            .iter()
            .filter(|(role, snake)| *role != SnakeRole::Player && snake.is_alive())
            .flat_map(|(_, snake)| snake.body().iter().copied())
            .collect();
        let grid = self.grid();
        let surroundings = Surroundings::new(&grid, self.obstacles(), &others);
        Some(choose_direction(player, target, &surroundings))
    }
}
