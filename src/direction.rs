//! One-slot buffer for turn requests arriving between ticks.

use crate::grid::Direction;

/// Returns the pending direction after receiving `intent`.
///
/// An empty slot takes the intent. A filled slot is overwritten unless the
/// intent reverses the pending turn, which would point the snake back into
/// its neck once both were applied. `_current` is checked by the tick, not
/// here.
pub fn propose(_current: Direction, pending: Option<Direction>, intent: Direction) -> Option<Direction> {
    match pending {
        Some(p) if p.is_opposite(intent) => Some(p),
        _ => Some(intent),
    }
}
