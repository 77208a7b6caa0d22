//! Obstacle Resource
//!
//! Static blocking cells placed once per reset.

use bevy_ecs::prelude::*;
use rand::Rng;

use arena_events::GridPos;

use crate::components::grid::Grid;
use crate::config::ObstacleConfig;
use crate::error::ArenaError;
use crate::setup::placement::place_cell;

/// All obstacles on the board
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Obstacles {
    positions: Vec<GridPos>,
}

impl Obstacles {
    pub fn new(positions: Vec<GridPos>) -> Self {
        Self { positions }
    }

    /// Place `config.count` obstacles on interior cells, each at least
    /// `min_spawn_distance` away from every initial snake cell.
    pub fn place<R: Rng + ?Sized>(
        grid: &Grid,
        initial_bodies: &[GridPos],
        config: &ObstacleConfig,
        max_attempts: u32,
        rng: &mut R,
    ) -> Result<Self, ArenaError> {
        let min_sq = config.min_spawn_distance * config.min_spawn_distance;
        let mut positions: Vec<GridPos> = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            let pos = place_cell(
                rng,
                "obstacle",
                max_attempts,
                |rng| grid.random_interior_cell(rng),
                grid.interior_cells(),
                |pos| {
                    !positions.contains(&pos)
                        && initial_bodies
                            .iter()
                            .all(|&cell| pos.distance_squared(cell) as f32 >= min_sq)
                },
            )?;
            positions.push(pos);
        }
        Ok(Self { positions })
    }

    pub fn positions(&self) -> &[GridPos] {
        &self.positions
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        self.positions.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_placement_keeps_distance_and_border() {
        let grid = Grid::new(40, 30).unwrap();
        let bodies = [GridPos::new(10, 15), GridPos::new(30, 15)];
        let config = ObstacleConfig {
            count: 25,
            ..ObstacleConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(7);
        let obstacles = Obstacles::place(&grid, &bodies, &config, 1000, &mut rng).unwrap();
        assert_eq!(obstacles.len(), 25);
        for &pos in obstacles.positions() {
            assert!(pos.x >= 1 && pos.x <= 38 && pos.y >= 1 && pos.y <= 28);
            for &cell in &bodies {
                assert!(pos.distance_squared(cell) >= 9);
            }
        }
    }

    #[test]
    fn test_placement_never_duplicates() {
        let grid = Grid::new(5, 5).unwrap();
        let config = ObstacleConfig {
            count: 9,
            min_spawn_distance: 0.0,
            ..ObstacleConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(8);
        let obstacles = Obstacles::place(&grid, &[], &config, 3, &mut rng).unwrap();
        let mut cells = obstacles.positions().to_vec();
        cells.sort_by_key(|p| (p.x, p.y));
        cells.dedup();
        assert_eq!(cells.len(), 9);
    }

    #[test]
    fn test_impossible_placement_is_an_error() {
        let grid = Grid::new(5, 5).unwrap();
        let config = ObstacleConfig {
            count: 1,
            min_spawn_distance: 10.0,
            ..ObstacleConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(9);
        let result = Obstacles::place(&grid, &[GridPos::new(2, 2)], &config, 50, &mut rng);
        assert!(matches!(result, Err(ArenaError::SpawnExhausted { what: "obstacle", .. })));
    }
}
