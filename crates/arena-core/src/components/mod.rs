//! ECS Components
//!
//! Snake components plus the grid, food, obstacle and tick-state resources.

pub mod food;
pub mod grid;
pub mod obstacle;
pub mod powerup;
pub mod snake;
pub mod state;

pub use food::{draw_food_kind, Food, FoodState};
pub use grid::Grid;
pub use obstacle::Obstacles;
pub use powerup::ActivePowerup;
pub use snake::{AdvanceOutcome, Snake, SnakeId, Surroundings};
pub use state::{GameState, TickClock};
