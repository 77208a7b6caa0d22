//! Game Status System

use bevy_ecs::prelude::*;

use arena_events::{ArenaStatus, EventKind, SnakeRole};

use crate::components::{GameState, Snake, SnakeId, TickClock};
use crate::events::TickEvents;

/// System: end the game once the player is dead. A dead opponent just
/// stays out of the simulation.
pub fn update_game_status(
    clock: Res<TickClock>,
    mut state: ResMut<GameState>,
    mut events: ResMut<TickEvents>,
    snakes: Query<(&SnakeId, &Snake)>,
) {
    if state.is_game_over() {
        return;
    }
    let dead_player = snakes
        .iter()
        .find(|(id, snake)| id.0 == SnakeRole::Player && !snake.is_alive());

    if let Some((_, player)) = dead_player {
        state.status = ArenaStatus::GameOver;
        tracing::info!("Game over at tick {} with score {}", clock.tick, player.score());
        events.push(
            clock.tick,
            EventKind::GameOver {
                player_score: player.score(),
            },
        );
    }
}
