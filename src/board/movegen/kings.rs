use super::super::Coord;

/// The 8 king steps around the origin.
pub(crate) const KING_STEPS: [Coord; 8] = [
    Coord(-1, -1),
    Coord(-1, 0),
    Coord(-1, 1),
    Coord(0, -1),
    Coord(0, 1),
    Coord(1, -1),
    Coord(1, 0),
    Coord(1, 1),
];

#[inline]
pub(super) fn is_king_step(delta: Coord) -> bool {
    delta.chebyshev_norm() == 1
}
