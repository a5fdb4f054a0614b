//! Fixed-offset leapers. Legality depends only on the absolute offsets.

use super::super::Coord;

pub(crate) const KNIGHT_LEAPS: [Coord; 8] = [
    Coord(-2, -1),
    Coord(-2, 1),
    Coord(-1, -2),
    Coord(-1, 2),
    Coord(1, -2),
    Coord(1, 2),
    Coord(2, -1),
    Coord(2, 1),
];

pub(crate) const CAMEL_LEAPS: [Coord; 8] = [
    Coord(-3, -1),
    Coord(-3, 1),
    Coord(-1, -3),
    Coord(-1, 3),
    Coord(1, -3),
    Coord(1, 3),
    Coord(3, -1),
    Coord(3, 1),
];

/// True if {|dr|, |dc|} equals {short, long} as a multiset.
#[inline]
fn is_leap(delta: Coord, short: i32, long: i32) -> bool {
    let r = delta.row().abs();
    let c = delta.col().abs();
    (r == short && c == long) || (r == long && c == short)
}

#[inline]
pub(super) fn is_knight_leap(delta: Coord) -> bool {
    is_leap(delta, 1, 2)
}

#[inline]
pub(super) fn is_camel_leap(delta: Coord) -> bool {
    is_leap(delta, 1, 3)
}
