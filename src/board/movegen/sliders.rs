use super::super::{Board, Coord};

/// Every square strictly between `from` and `to` along their common line is
/// empty. `to - from` must be a rank, file or diagonal offset.
pub(super) fn path_clear(board: &Board, from: Coord, to: Coord) -> bool {
    let step = (to - from).signum();
    let mut sq = from + step;
    while sq != to {
        if !board.is_empty(sq) {
            return false;
        }
        sq = sq + step;
    }
    true
}

pub(super) fn rook_reaches(board: &Board, from: Coord, to: Coord) -> bool {
    let delta = to - from;
    (delta.row() == 0 || delta.col() == 0) && path_clear(board, from, to)
}

pub(super) fn bishop_reaches(board: &Board, from: Coord, to: Coord) -> bool {
    let delta = to - from;
    delta.row().abs() == delta.col().abs() && path_clear(board, from, to)
}
