//! Cell Placement
//!
//! Bounded random placement shared by food and obstacles: draw random cells
//! up to a retry cap, then fall back to choosing uniformly among every
//! eligible cell so a crowded board never spins forever.

use rand::seq::SliceRandom;
use rand::Rng;

use arena_events::GridPos;

use crate::error::ArenaError;

/// Find a cell satisfying `accept`.
///
/// `draw` produces random candidates; `candidates` enumerates every cell the
/// exhaustive fallback may consider.
pub fn place_cell<R, D, C, A>(
    rng: &mut R,
    what: &'static str,
    max_attempts: u32,
    mut draw: D,
    candidates: C,
    accept: A,
) -> Result<GridPos, ArenaError>
where
    R: Rng + ?Sized,
    D: FnMut(&mut R) -> GridPos,
    C: IntoIterator<Item = GridPos>,
    A: Fn(GridPos) -> bool,
{
    for _ in 0..max_attempts {
        let pos = draw(rng);
        if accept(pos) {
            return Ok(pos);
        }
    }

    let eligible: Vec<GridPos> = candidates.into_iter().filter(|&pos| accept(pos)).collect();
    match eligible.choose(rng) {
        Some(&pos) => {
            tracing::debug!(
                "Placed {} by scanning {} eligible cells after {} random attempts",
                what,
                eligible.len(),
                max_attempts
            );
            Ok(pos)
        }
        None => Err(ArenaError::SpawnExhausted {
            what,
            attempts: max_attempts,
        }),
    }
}
