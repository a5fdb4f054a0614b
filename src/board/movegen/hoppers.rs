use super::super::{Board, Coord};

/// Grasshopper: along any rank, file or diagonal, land on the square just
/// past the nearest occupied square (of either color). With nothing to hop
/// over, the line has no legal destination.
pub(super) fn grasshopper_reaches(board: &Board, from: Coord, to: Coord) -> bool {
    let delta = to - from;
    let (dr, dc) = (delta.row(), delta.col());
    if !(dr == 0 || dc == 0 || dr.abs() == dc.abs()) {
        return false;
    }

    let step = delta.signum();
    let mut sq = from + step;
    while board.in_bounds(sq) {
        if board.piece_at(sq).is_some() {
            return to == sq + step;
        }
        sq = sq + step;
    }
    false
}
