//! Arena State Resources
//!
//! Tick counter and the running/game-over flag.

use bevy_ecs::prelude::*;

use arena_events::ArenaStatus;

/// Current tick number and the real-time delta it advances by
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct TickClock {
    pub tick: u64,
    /// Seconds
    pub delta: f32,
}

impl TickClock {
    /// Move to the next tick. Negative or non-finite deltas count as zero.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.delta = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    }
}

/// Whether the arena still accepts ticks
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameState {
    pub status: ArenaStatus,
}

impl GameState {
    pub fn is_game_over(&self) -> bool {
        self.status == ArenaStatus::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_sanitizes_delta() {
        let mut clock = TickClock::default();
        clock.advance(0.25);
        assert_eq!((clock.tick, clock.delta), (1, 0.25));
        clock.advance(-1.0);
        assert_eq!((clock.tick, clock.delta), (2, 0.0));
        clock.advance(f32::NAN);
        assert_eq!((clock.tick, clock.delta), (3, 0.0));
    }
}
