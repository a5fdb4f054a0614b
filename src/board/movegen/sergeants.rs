use super::super::{Color, Coord};

/// One row forward for the color, drifting at most one column either way.
/// Captures follow the same pattern as quiet moves.
#[inline]
pub(super) fn is_sergeant_step(color: Color, delta: Coord) -> bool {
    delta.row() == color.forward() && delta.col().abs() <= 1
}
