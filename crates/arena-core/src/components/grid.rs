//! Grid Resource
//!
//! The toroidal board every entity lives on.

use bevy_ecs::prelude::*;
use rand::Rng;

use arena_events::{Direction, GridPos, GridSnapshot};

use crate::config::{ArenaConfig, MIN_GRID_EDGE};
use crate::error::ArenaError;

/// Fixed-size toroidal coordinate space
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self, ArenaError> {
        if width < MIN_GRID_EDGE || height < MIN_GRID_EDGE {
            return Err(ArenaError::DegenerateGrid { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn from_config(config: &ArenaConfig) -> Result<Self, ArenaError> {
        Self::new(config.grid_width(), config.grid_height())
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Normalize a position into `[0, width) x [0, height)`.
    pub fn wrap(&self, pos: GridPos) -> GridPos {
        GridPos::new(pos.x.rem_euclid(self.width), pos.y.rem_euclid(self.height))
    }

    /// The wrapped neighbour of `pos` in `direction`.
    pub fn step(&self, pos: GridPos, direction: Direction) -> GridPos {
        let (dx, dy) = direction.delta();
        self.wrap(pos.offset(dx, dy))
    }

    pub fn cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| GridPos::new(x, y)))
    }

    /// Cells not on the one-cell border.
    pub fn interior_cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        (1..self.height - 1).flat_map(move |y| (1..self.width - 1).map(move |x| GridPos::new(x, y)))
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> GridPos {
        GridPos::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    pub fn random_interior_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> GridPos {
        GridPos::new(
            rng.gen_range(1..self.width - 1),
            rng.gen_range(1..self.height - 1),
        )
    }

    pub fn to_snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            width: self.width,
            height: self.height,
        }
    }
}
