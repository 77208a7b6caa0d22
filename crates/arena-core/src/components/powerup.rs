//! Power-up State
//!
//! The timed speed modifier a snake carries after eating special food.

use arena_events::{PowerupKind, PowerupSnapshot};

use crate::config::PowerupConfig;

/// An active modifier. At most one exists per snake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePowerup {
    pub kind: PowerupKind,
    /// Seconds left
    pub remaining: f32,
}

impl ActivePowerup {
    pub fn new(kind: PowerupKind, duration: f32) -> Self {
        Self {
            kind,
            remaining: duration.max(0.0),
        }
    }

    /// Factor applied to the base speed while active.
    pub fn speed_multiplier(&self, config: &PowerupConfig) -> f32 {
        match self.kind {
            PowerupKind::SpeedBoost => config.speed_boost_multiplier,
            PowerupKind::SlowMotion => config.slow_mo_multiplier,
        }
    }

    /// Count down by `dt`. Returns `true` once the modifier has run out.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining = (self.remaining - dt).max(0.0);
        self.remaining <= 0.0
    }

    pub fn to_snapshot(&self) -> PowerupSnapshot {
        PowerupSnapshot {
            kind: self.kind,
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_per_kind() {
        let config = PowerupConfig::default();
        assert_eq!(ActivePowerup::new(PowerupKind::SpeedBoost, 5.0).speed_multiplier(&config), 2.0);
        assert_eq!(ActivePowerup::new(PowerupKind::SlowMotion, 5.0).speed_multiplier(&config), 0.5);
    }

    #[test]
    fn test_countdown_clamps_at_zero() {
        let mut powerup = ActivePowerup::new(PowerupKind::SpeedBoost, 1.0);
        assert!(!powerup.tick(0.75));
        assert_eq!(powerup.remaining, 0.25);
        assert!(powerup.tick(0.75));
        assert_eq!(powerup.remaining, 0.0);
    }
}
