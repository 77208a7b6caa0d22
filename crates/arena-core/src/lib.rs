//! Snake Arena Simulation Library
//!
//! A tick-driven snake arena on a toroidal grid: a player snake, an optional
//! greedy opponent, static obstacles and a single food item that can grant
//! a timed speed modifier.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;

pub mod arena;
pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod output;
pub mod setup;
pub mod systems;

pub use arena::Arena;
pub use components::*;
pub use config::ArenaConfig;
pub use error::{ArenaError, ConfigError};
pub use events::{EventLogger, TickEvents};
pub use setup::ArenaLayout;

/// Seeded random number generator resource
#[derive(Resource)]
pub struct SimRng(pub SmallRng);
