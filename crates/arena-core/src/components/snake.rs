//! Snake Components
//!
//! The per-actor movement, growth and collision state machine. Both the
//! player and the opponent are `Snake`s; only the source of their turn
//! requests differs.

use bevy_ecs::prelude::*;
use std::collections::VecDeque;

use arena_events::{DeathCause, Direction, FoodKind, GridPos, PowerupKind, SnakeRole, SnakeSnapshot};

use crate::components::grid::Grid;
use crate::components::powerup::ActivePowerup;
use crate::config::PowerupConfig;

/// Which seat a snake entity occupies
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnakeId(pub SnakeRole);

/// Everything a snake can run into besides itself.
#[derive(Debug, Clone, Copy)]
pub struct Surroundings<'a> {
    pub grid: &'a Grid,
    pub obstacles: &'a [GridPos],
    /// Cells of every other live snake
    pub others: &'a [GridPos],
}

impl<'a> Surroundings<'a> {
    pub fn new(grid: &'a Grid, obstacles: &'a [GridPos], others: &'a [GridPos]) -> Self {
        Self {
            grid,
            obstacles,
            others,
        }
    }

    /// Obstacle or foreign body at `pos`, in collision-check order.
    pub fn hazard_at(&self, pos: GridPos) -> Option<DeathCause> {
        if self.obstacles.contains(&pos) {
            Some(DeathCause::Obstacle)
        } else if self.others.contains(&pos) {
            Some(DeathCause::OtherSnake)
        } else {
            None
        }
    }
}

/// What happened to a snake during one `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AdvanceOutcome {
    /// Discrete cell steps taken
    pub steps: u32,
    pub death: Option<DeathCause>,
    pub powerup_expired: bool,
}

/// A snake on the grid. Head first, tail last.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<GridPos>,
    direction: Direction,
    pending_direction: Direction,
    alive: bool,
    grow_pending: bool,
    move_accumulator: f32,
    base_speed: f32,
    current_speed: f32,
    powerup: Option<ActivePowerup>,
    ai_controlled: bool,
}

impl Snake {
    /// A single-cell snake at `start`.
    pub fn new(start: GridPos, direction: Direction, base_speed: f32, ai_controlled: bool) -> Self {
        Self::with_body([start], direction, base_speed, ai_controlled)
    }

    /// A snake with an explicit body, head first.
    ///
    /// # Panics
    /// If `body` is empty.
    pub fn with_body(
        body: impl IntoIterator<Item = GridPos>,
        direction: Direction,
        base_speed: f32,
        ai_controlled: bool,
    ) -> Self {
        let body: VecDeque<GridPos> = body.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least one cell");
        Self {
            body,
            direction,
            pending_direction: direction,
            alive: true,
            grow_pending: false,
            move_accumulator: 0.0,
            base_speed,
            current_speed: base_speed,
            powerup: None,
            ai_controlled,
        }
    }

    pub fn head(&self) -> GridPos {
        self.body[0]
    }

    pub fn tail(&self) -> GridPos {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &VecDeque<GridPos> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, pos: GridPos) -> bool {
        self.body.contains(&pos)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn grow_pending(&self) -> bool {
        self.grow_pending
    }

    pub fn move_accumulator(&self) -> f32 {
        self.move_accumulator
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    pub fn powerup(&self) -> Option<&ActivePowerup> {
        self.powerup.as_ref()
    }

    pub fn is_ai_controlled(&self) -> bool {
        self.ai_controlled
    }

    /// Food eaten so far.
    pub fn score(&self) -> usize {
        self.body.len() - 1
    }

    /// Whether turning to `direction` would fold the snake back onto its neck.
    pub fn is_reversal(&self, direction: Direction) -> bool {
        self.body.len() > 1 && direction.is_opposite(self.direction)
    }

    /// Queue a turn for the next step. Reversals are ignored once the snake
    /// is longer than one cell, and dead snakes ignore everything. Returns
    /// whether the request was kept.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !self.alive || self.is_reversal(direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Run one tick of `dt` seconds: modifier countdown, then as many cell
    /// steps as the accumulated speed allows, stopping at the first death.
    pub fn advance(&mut self, dt: f32, surroundings: &Surroundings<'_>) -> AdvanceOutcome {
        let mut outcome = AdvanceOutcome::default();
        if !self.alive {
            return outcome;
        }

        if let Some(powerup) = self.powerup.as_mut() {
            if powerup.tick(dt) {
                self.clear_powerup();
                outcome.powerup_expired = true;
            }
        }

        self.move_accumulator += dt * self.current_speed;
        let whole = self.move_accumulator.floor();
        self.move_accumulator -= whole;
        for _ in 0..whole as u64 {
            outcome.steps += 1;
            if let Some(cause) = self.step(surroundings) {
                self.alive = false;
                outcome.death = Some(cause);
                tracing::debug!(cause = ?cause, head = %self.head(), "snake died");
                break;
            }
        }
        outcome
    }

    /// One discrete move. Returns the cause of death, if any.
    fn step(&mut self, surroundings: &Surroundings<'_>) -> Option<DeathCause> {
        if !self.is_reversal(self.pending_direction) {
            self.direction = self.pending_direction;
        }
        self.pending_direction = self.direction;

        let new_head = surroundings.grid.step(self.head(), self.direction);
        self.body.push_front(new_head);
        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.body.pop_back();
        }

        if self.body.iter().skip(1).any(|&cell| cell == new_head) {
            return Some(DeathCause::SelfCollision);
        }
        surroundings.hazard_at(new_head)
    }

    /// Eat a food item: grow on the next step and, when modifiers are
    /// enabled, replace any active modifier with a fresh one.
    pub fn on_consume(&mut self, food: FoodKind, config: &PowerupConfig) -> Option<PowerupKind> {
        self.grow_pending = true;
        if !config.enabled {
            return None;
        }
        let kind = food.powerup()?;
        self.clear_powerup();
        let powerup = ActivePowerup::new(kind, config.duration);
        self.current_speed = self.base_speed * powerup.speed_multiplier(config);
        self.powerup = Some(powerup);
        Some(kind)
    }

    fn clear_powerup(&mut self) {
        self.powerup = None;
        self.current_speed = self.base_speed;
    }

    pub fn to_snapshot(&self, role: SnakeRole) -> SnakeSnapshot {
        SnakeSnapshot {
            role,
            body: self.body.iter().copied().collect(),
            direction: self.direction,
            speed: self.current_speed,
            score: self.score(),
            powerup: self.powerup.as_ref().map(ActivePowerup::to_snapshot),
        }
    }
}
