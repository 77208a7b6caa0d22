//! Configuration System
//!
//! Loads tuning parameters from arena.toml for easy adjustment without recompiling.
//! Every section and key falls back to its default when absent, so a partial
//! file only overrides what it names.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Default tuning file path
pub const DEFAULT_CONFIG_PATH: &str = "arena.toml";

/// Smallest grid edge the arena accepts.
pub const MIN_GRID_EDGE: i32 = 4;

/// Top-level configuration structure
#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArenaConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub snakes: SnakeConfig,
    #[serde(default)]
    pub powerups: PowerupConfig,
    #[serde(default)]
    pub obstacles: ObstacleConfig,
    #[serde(default)]
    pub opponent: OpponentConfig,
    #[serde(default)]
    pub spawning: SpawnConfig,
}

/// Screen geometry; the grid is derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Pixels per grid cell
    pub cell_size: u32,
    /// Target frame rate; the runner derives its delta from it
    pub fps: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            cell_size: 20,
            fps: 60,
        }
    }
}

/// Base speeds in cells per second
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    pub player_speed: f32,
    pub ai_speed: f32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            player_speed: 10.0,
            ai_speed: 9.0,
        }
    }
}

/// Timed speed modifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerupConfig {
    pub enabled: bool,
    /// Seconds a modifier stays active
    pub duration: f32,
    pub speed_boost_multiplier: f32,
    pub slow_mo_multiplier: f32,
    /// Probability that a spawned food carries a modifier
    pub spawn_chance: f64,
}

impl Default for PowerupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: 5.0,
            speed_boost_multiplier: 2.0,
            slow_mo_multiplier: 0.5,
            spawn_chance: 0.3,
        }
    }
}

/// Static obstacles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub enabled: bool,
    pub count: usize,
    /// Minimum Euclidean distance from any initial snake cell
    pub min_spawn_distance: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 5,
            min_spawn_distance: 3.0,
        }
    }
}

/// Rule-driven opponent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    pub enabled: bool,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Spawn retry policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Random draws before falling back to scanning every eligible cell
    pub max_attempts: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self { max_attempts: 10_000 }
    }
}

impl ArenaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Render this configuration as a TOML document
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from `path`, or use defaults if it is missing or unparsable
    pub fn load_or_default_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                tracing::info!("Loaded settings from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Could not load {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    /// Grid columns (screen width / cell size)
    pub fn grid_width(&self) -> i32 {
        grid_cells(self.display.screen_width, self.display.cell_size)
    }

    /// Grid rows (screen height / cell size)
    pub fn grid_height(&self) -> i32 {
        grid_cells(self.display.screen_height, self.display.cell_size)
    }

    /// Seconds per frame at the configured frame rate
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.display.fps.max(1) as f32
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.cell_size == 0 {
            return Err(ConfigError::Invalid("display.cell_size must be positive".into()));
        }
        let (width, height) = (self.grid_width(), self.grid_height());
        if width < MIN_GRID_EDGE || height < MIN_GRID_EDGE {
            return Err(ConfigError::Invalid(format!(
                "grid {}x{} is smaller than {}x{}",
                width, height, MIN_GRID_EDGE, MIN_GRID_EDGE
            )));
        }
        if !(self.snakes.player_speed > 0.0) || !(self.snakes.ai_speed > 0.0) {
            return Err(ConfigError::Invalid("snake speeds must be positive".into()));
        }
        if !(self.powerups.duration > 0.0) {
            return Err(ConfigError::Invalid("powerups.duration must be positive".into()));
        }
        if !(self.powerups.speed_boost_multiplier > 0.0)
            || !(self.powerups.slow_mo_multiplier > 0.0)
        {
            return Err(ConfigError::Invalid("powerup multipliers must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.powerups.spawn_chance) {
            return Err(ConfigError::Invalid("powerups.spawn_chance must lie in [0, 1]".into()));
        }
        if self.obstacles.min_spawn_distance < 0.0 {
            return Err(ConfigError::Invalid(
                "obstacles.min_spawn_distance must not be negative".into(),
            ));
        }
        if self.spawning.max_attempts == 0 {
            return Err(ConfigError::Invalid("spawning.max_attempts must be positive".into()));
        }
        Ok(())
    }
}

fn grid_cells(pixels: u32, cell_size: u32) -> i32 {
    if cell_size == 0 {
        return 0;
    }
    i32::try_from(pixels / cell_size).unwrap_or(i32::MAX)
}
