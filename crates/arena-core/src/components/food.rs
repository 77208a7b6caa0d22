//! Food Resource
//!
//! The single food item on the board and how it is (re)spawned.

use bevy_ecs::prelude::*;
use rand::Rng;
use std::collections::HashSet;

use arena_events::{FoodKind, FoodSnapshot, GridPos};

use crate::components::grid::Grid;
use crate::config::PowerupConfig;
use crate::error::ArenaError;
use crate::setup::placement::place_cell;

/// A food item on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: GridPos,
    pub kind: FoodKind,
}

impl Food {
    pub fn new(position: GridPos, kind: FoodKind) -> Self {
        Self { position, kind }
    }

    /// Spawn on a uniformly random cell outside `occupied`.
    pub fn spawn<R: Rng + ?Sized>(
        grid: &Grid,
        occupied: &HashSet<GridPos>,
        powerups: &PowerupConfig,
        max_attempts: u32,
        rng: &mut R,
    ) -> Result<Self, ArenaError> {
        let position = place_cell(
            rng,
            "food",
            max_attempts,
            |rng| grid.random_cell(rng),
            grid.cells(),
            |pos| !occupied.contains(&pos),
        )?;
        let kind = draw_food_kind(powerups, rng);
        Ok(Self::new(position, kind))
    }

    pub fn to_snapshot(&self) -> FoodSnapshot {
        FoodSnapshot {
            position: self.position,
            kind: self.kind,
        }
    }
}

/// Weighted kind draw: modifiers take `spawn_chance` split evenly between
/// the two kinds, the rest is normal food. Normal only when disabled.
pub fn draw_food_kind<R: Rng + ?Sized>(powerups: &PowerupConfig, rng: &mut R) -> FoodKind {
    if powerups.enabled && rng.gen_bool(powerups.spawn_chance) {
        if rng.gen_bool(0.5) {
            FoodKind::SpeedBoost
        } else {
            FoodKind::SlowMo
        }
    } else {
        FoodKind::Normal
    }
}

/// Resource holding the live food, if any
#[derive(Resource, Debug, Clone, Default)]
pub struct FoodState {
    pub current: Option<Food>,
    /// Set when the food was eaten this tick
    pub respawn_requested: bool,
}

impl FoodState {
    pub fn new(food: Option<Food>) -> Self {
        Self {
            current: food,
            respawn_requested: false,
        }
    }

    /// Position of every live food item, in enumeration order.
    pub fn positions(&self) -> Vec<GridPos> {
        self.current.iter().map(|food| food.position).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_avoids_occupied_cells() {
        let grid = Grid::new(4, 4).unwrap();
        let free = GridPos::new(2, 3);
        let occupied: HashSet<GridPos> = grid.cells().filter(|&p| p != free).collect();
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..20 {
            let food = Food::spawn(&grid, &occupied, &PowerupConfig::default(), 50, &mut rng).unwrap();
            assert_eq!(food.position, free);
        }
    }

    #[test]
    fn test_spawn_fails_on_full_board() {
        let grid = Grid::new(4, 4).unwrap();
        let occupied: HashSet<GridPos> = grid.cells().collect();
        let mut rng = SmallRng::seed_from_u64(12);
        assert!(Food::spawn(&grid, &occupied, &PowerupConfig::default(), 50, &mut rng).is_err());
    }

    #[test]
    fn test_kind_distribution() {
        let mut rng = SmallRng::seed_from_u64(42);
        let config = PowerupConfig::default();
        let draws = 20_000;
        let mut normal = 0;
        let mut boost = 0;
        let mut slow = 0;
        for _ in 0..draws {
            match draw_food_kind(&config, &mut rng) {
                FoodKind::Normal => normal += 1,
                FoodKind::SpeedBoost => boost += 1,
                FoodKind::SlowMo => slow += 1,
            }
        }
        let share = |n: i32| n as f64 / draws as f64;
        assert!((share(normal) - 0.70).abs() < 0.02);
        assert!((share(boost) - 0.15).abs() < 0.02);
        assert!((share(slow) - 0.15).abs() < 0.02);
    }

    #[test]
    fn test_disabled_powerups_only_spawn_normal_food() {
        let mut rng = SmallRng::seed_from_u64(5);
        let config = PowerupConfig {
            enabled: false,
            ..PowerupConfig::default()
        };
        assert!((0..1000).all(|_| draw_food_kind(&config, &mut rng) == FoodKind::Normal));
    }
}
