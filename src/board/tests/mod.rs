//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movement.rs` - per-variant geometry
//! - `edge_cases.rs` - bounds, odd board shapes, move tags
//! - `check.rs` - threat and check detection
//! - `make_unmake.rs` - mutation primitives and speculative apply/undo
//! - `proptest.rs` - Property-based tests


use crate::board::{Board, BoardBuilder, Color, Coord, PieceType};

/// Empty `rows` x `cols` board without kings, for pure geometry tests.
pub(super) fn bare(rows: i32, cols: i32) -> BoardBuilder {
    BoardBuilder::new(rows, cols)
}

/// Builder with White's king on a1 and Black's on the far corner.
pub(super) fn with_kings(rows: i32, cols: i32) -> BoardBuilder {
    BoardBuilder::new(rows, cols)
        .piece(Coord(0, 0), Color::White, PieceType::King)
        .piece(Coord(rows - 1, cols - 1), Color::Black, PieceType::King)
}

/// Every square of the board the piece on `from` can legally reach.
pub(super) fn destinations(board: &Board, from: Coord) -> Vec<Coord> {
    let piece = board.piece_at(from).expect("no piece on origin square");
    let mut out = Vec::new();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if let Some(mv) = piece.can_move_to(board, Coord(row, col), None) {
                out.push(mv.to());
            }
        }
    }
    out
}

/// Parse a list of algebraic squares.
pub(super) fn squares(names: &[&str]) -> Vec<Coord> {
    let mut out: Vec<Coord> = names.iter().map(|s| s.parse().unwrap()).collect();
    out.sort();
    out
}
