//! Error Types
//!
//! Failures that can stop an arena from being built. Nothing inside a tick
//! is an error: deaths, rejected turns and a trapped opponent are ordinary
//! state transitions.

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised while constructing or resetting an arena.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Grid {width}x{height} is too small to host an arena")]
    DegenerateGrid { width: i32, height: i32 },
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
    #[error("Could not place {what} after {attempts} attempts: no eligible cell left")]
    SpawnExhausted { what: &'static str, attempts: u32 },
}
