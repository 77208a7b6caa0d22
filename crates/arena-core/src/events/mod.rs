//! Event Collection
//!
//! Per-tick event buffer and the JSONL logger that persists it.

pub mod logger;

use bevy_ecs::prelude::*;

use arena_events::{ArenaEvent, EventKind};

pub use logger::EventLogger;

/// Events produced during the current tick, drained by the arena afterwards.
#[derive(Resource, Debug, Default)]
pub struct TickEvents {
    pub events: Vec<ArenaEvent>,
}

impl TickEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tick: u64, kind: EventKind) {
        self.events.push(ArenaEvent::new(tick, kind));
    }

    pub fn drain(&mut self) -> Vec<ArenaEvent> {
        std::mem::take(&mut self.events)
    }
}
