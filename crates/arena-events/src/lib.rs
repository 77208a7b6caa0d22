//! Shared vocabulary and serialization types for the snake arena.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for the core crate and for any renderer that consumes
//! arena snapshots.

pub mod event;
pub mod grid;
pub mod snapshot;

// Re-export grid vocabulary
pub use grid::{Direction, FoodKind, GridPos, PowerupKind, SnakeRole};

// Re-export event types
pub use event::{ArenaEvent, DeathCause, EventKind};

// Re-export snapshot types
pub use snapshot::{
    generate_snapshot_id, ArenaSnapshot, ArenaStatus, FoodSnapshot, GridSnapshot,
    PowerupSnapshot, SnakeSnapshot,
};
