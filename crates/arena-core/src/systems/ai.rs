//! Opponent Decision System
//!
//! Greedy one-step steering toward the nearest food. There is no path
//! search: the opponent only avoids cells that would kill it on the very
//! next step, so it can and does trap itself in dead ends.

use bevy_ecs::prelude::*;

use arena_events::{Direction, GridPos};

use crate::components::{FoodState, Grid, Obstacles, Snake, SnakeId, Surroundings};
use crate::systems::other_live_cells;

/// The food closest to `head` by squared distance. Ties go to the first
/// position in `foods`.
pub fn nearest_food(head: GridPos, foods: &[GridPos]) -> Option<GridPos> {
    foods.iter().copied().min_by_key(|&food| head.distance_squared(food))
}

/// Pick the direction to request for `snake` this tick.
///
/// Candidates are all non-reversing directions whose next cell is free of
/// the snake's own body, obstacles and other snakes; the one landing
/// closest to `target` wins, earliest in [`Direction::ALL`] on ties.
pub fn choose_direction(snake: &Snake, target: GridPos, surroundings: &Surroundings<'_>) -> Direction {
    let head = snake.head();
    let safe: Vec<(Direction, GridPos)> = candidate_moves(snake, surroundings)
        .filter(|&(_, next)| !snake.occupies(next) && surroundings.hazard_at(next).is_none())
        .collect();

    match safe.iter().min_by_key(|(_, next)| next.distance_squared(target)) {
        Some(&(direction, next)) => {
            tracing::trace!(from = %head, to = %next, ?direction, "opponent steering");
            direction
        }
        None => trapped_direction(snake, surroundings),
    }
}

/// Every non-reversing direction with its wrapped destination.
fn candidate_moves<'a>(
    snake: &'a Snake,
    surroundings: &'a Surroundings<'a>,
) -> impl Iterator<Item = (Direction, GridPos)> + 'a {
    Direction::ALL
        .into_iter()
        .filter(move |&direction| !snake.is_reversal(direction))
        .map(move |direction| (direction, surroundings.grid.step(snake.head(), direction)))
}

/// Fallback when no strictly safe move exists.
///
/// Re-scan with the tail cell counted as free, since it moves away this
/// step unless the snake is growing. Keep the current heading if it passes
/// the relaxed scan, otherwise take the first that does, otherwise keep
/// going and die.
fn trapped_direction(snake: &Snake, surroundings: &Surroundings<'_>) -> Direction {
    let vacating = (!snake.grow_pending() && snake.len() > 1).then(|| snake.tail());
    let relaxed: Vec<Direction> = candidate_moves(snake, surroundings)
        .filter(|&(_, next)| {
            let blocked_by_self = snake.occupies(next) && Some(next) != vacating;
            !blocked_by_self && surroundings.hazard_at(next).is_none()
        })
        .map(|(direction, _)| direction)
        .collect();

    if relaxed.contains(&snake.direction()) {
        snake.direction()
    } else if let Some(&direction) = relaxed.first() {
        direction
    } else {
        tracing::debug!(head = %snake.head(), "opponent trapped with no safe move");
        snake.direction()
    }
}

/// System: set the pending direction of every live AI-controlled snake.
///
/// Runs before movement, so decisions see the positions left by the
/// previous tick.
pub fn decide_ai_directions(
    grid: Res<Grid>,
    obstacles: Res<Obstacles>,
    food: Res<FoodState>,
    mut snakes: Query<(Entity, &SnakeId, &mut Snake)>,
) {
    let foods = food.positions();
    let deciders: Vec<Entity> = snakes
        .iter()
        .filter(|(_, _, snake)| snake.is_alive() && snake.is_ai_controlled())
        .map(|(entity, _, _)| entity)
        .collect();

    for entity in deciders {
        let others = other_live_cells(&snakes, entity);
        let Ok((_, _, mut snake)) = snakes.get_mut(entity) else {
            continue;
        };
        let Some(target) = nearest_food(snake.head(), &foods) else {
            continue;
        };
        let surroundings = Surroundings::new(&grid, obstacles.positions(), &others);
        let direction = choose_direction(&snake, target, &surroundings);
        snake.request_direction(direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(10, 10).unwrap()
    }

    #[test]
    fn test_nearest_food_prefers_first_on_tie() {
        let head = GridPos::new(5, 5);
        let foods = [GridPos::new(7, 5), GridPos::new(3, 5), GridPos::new(5, 9)];
        assert_eq!(nearest_food(head, &foods), Some(GridPos::new(7, 5)));
        assert_eq!(nearest_food(head, &[]), None);
    }

    #[test]
    fn test_steers_straight_at_food() {
        let grid = grid();
        // Moving right with a neck behind it, so left is excluded
        let snake = Snake::with_body(
            [GridPos::new(0, 0), GridPos::new(9, 0)],
            Direction::Right,
            9.0,
            true,
        );
        let surroundings = Surroundings::new(&grid, &[], &[]);
        assert_eq!(choose_direction(&snake, GridPos::new(3, 0), &surroundings), Direction::Right);
    }

    #[test]
    fn test_single_cell_snake_may_turn_back() {
        let grid = grid();
        let snake = Snake::new(GridPos::new(5, 5), Direction::Right, 9.0, true);
        let surroundings = Surroundings::new(&grid, &[], &[]);
        assert_eq!(choose_direction(&snake, GridPos::new(1, 5), &surroundings), Direction::Left);
    }

    #[test]
    fn test_avoids_obstacle_on_best_cell() {
        let grid = grid();
        let snake = Snake::with_body(
            [GridPos::new(2, 5), GridPos::new(1, 5)],
            Direction::Right,
            9.0,
            true,
        );
        let obstacles = [GridPos::new(3, 5)];
        let surroundings = Surroundings::new(&grid, &obstacles, &[]);
        let choice = choose_direction(&snake, GridPos::new(8, 5), &surroundings);
        // Up and down land equally close; up is enumerated first
        assert_eq!(choice, Direction::Up);
    }

    #[test]
    fn test_avoids_other_snake() {
        let grid = grid();
        let snake = Snake::with_body(
            [GridPos::new(2, 5), GridPos::new(1, 5)],
            Direction::Right,
            9.0,
            true,
        );
        let others = [GridPos::new(3, 5), GridPos::new(2, 4)];
        let surroundings = Surroundings::new(&grid, &[], &others);
        assert_eq!(choose_direction(&snake, GridPos::new(8, 5), &surroundings), Direction::Down);
    }

    #[test]
    fn test_greedy_walks_into_dead_end_pocket() {
        let grid = grid();
        // Food sits in a pocket whose only way out is back the way it came
        let obstacles = [GridPos::new(4, 4), GridPos::new(4, 6), GridPos::new(5, 5)];
        let snake = Snake::with_body(
            [GridPos::new(3, 5), GridPos::new(2, 5), GridPos::new(1, 5)],
            Direction::Right,
            9.0,
            true,
        );
        let surroundings = Surroundings::new(&grid, &obstacles, &[]);
        assert_eq!(choose_direction(&snake, GridPos::new(4, 5), &surroundings), Direction::Right);
    }

    #[test]
    fn test_trapped_uses_vacating_tail() {
        let grid = grid();
        // Boxed in on all open sides except the tail cell below the head
        let snake = Snake::with_body(
            [
                GridPos::new(5, 5),
                GridPos::new(4, 5),
                GridPos::new(4, 6),
                GridPos::new(5, 6),
            ],
            Direction::Right,
            9.0,
            true,
        );
        let obstacles = [GridPos::new(6, 5), GridPos::new(5, 4)];
        let surroundings = Surroundings::new(&grid, &obstacles, &[]);
        assert_eq!(choose_direction(&snake, GridPos::new(9, 9), &surroundings), Direction::Down);
    }

    #[test]
    fn test_fully_trapped_keeps_heading() {
        let grid = grid();
        let snake = Snake::with_body(
            [GridPos::new(5, 5), GridPos::new(4, 5)],
            Direction::Right,
            9.0,
            true,
        );
        let obstacles = [GridPos::new(6, 5), GridPos::new(5, 4), GridPos::new(5, 6)];
        let surroundings = Surroundings::new(&grid, &obstacles, &[]);
        assert_eq!(choose_direction(&snake, GridPos::new(0, 0), &surroundings), Direction::Right);
    }
}
