//! Piece movement rules.
//!
//! The engine answers point queries ("can this piece land on that square")
//! for every variant. Enumerating all destinations is only offered by the
//! fixed-offset leapers; asking any other variant fails with
//! `MoveGenError::Unsupported` rather than returning an empty list.

mod compound;
mod hoppers;
mod kings;
mod leapers;
mod sergeants;
mod sliders;

pub(crate) use kings::KING_STEPS;
pub(crate) use leapers::{CAMEL_LEAPS, KNIGHT_LEAPS};

use super::error::MoveGenError;
use super::{Board, Coord, Move, Piece, PieceType, SpecialMove};

impl Piece {
    /// Validate a move of this piece to `to` on `board`.
    ///
    /// Returns `None` for an out-of-bounds destination, a destination held by
    /// a piece of the same color, or one the variant's geometry rejects. The
    /// returned move records whether the destination is occupied right now.
    #[must_use]
    pub fn can_move_to(
        &self,
        board: &Board,
        to: Coord,
        special: Option<SpecialMove>,
    ) -> Option<Move> {
        if !board.in_bounds(to) || board.color_at(to) == Some(self.color) {
            return None;
        }
        if !self.reaches(board, to) {
            return None;
        }
        Some(Move::new(
            self.loc,
            to,
            board.piece_at(to).is_some(),
            special,
        ))
    }

    /// Geometry only: bounds and same-color checks have already passed.
    pub(crate) fn reaches(&self, board: &Board, to: Coord) -> bool {
        let delta = to - self.loc;
        if delta == Coord(0, 0) {
            return false;
        }
        match self.kind {
            PieceType::King => kings::is_king_step(delta),
            PieceType::Rook => sliders::rook_reaches(board, self.loc, to),
            PieceType::Bishop => sliders::bishop_reaches(board, self.loc, to),
            PieceType::Knight => leapers::is_knight_leap(delta),
            PieceType::Camel => leapers::is_camel_leap(delta),
            PieceType::Sergeant => sergeants::is_sergeant_step(self.color, delta),
            PieceType::Grasshopper => hoppers::grasshopper_reaches(board, self.loc, to),
            PieceType::Wildebeest
            | PieceType::Wamazon
            | PieceType::Queen
            | PieceType::Chancellor
            | PieceType::Archbishop => compound::reaches(self, board, to),
        }
    }

    /// List every legal destination of this piece.
    ///
    /// Only King, Knight, Camel and Wildebeest support this.
    pub fn enumerate_moves(&self, board: &Board) -> Result<Vec<Move>, MoveGenError> {
        let tables: &[&[Coord]] = match self.kind {
            PieceType::King => &[&KING_STEPS],
            PieceType::Knight => &[&KNIGHT_LEAPS],
            PieceType::Camel => &[&CAMEL_LEAPS],
            PieceType::Wildebeest => &[&KNIGHT_LEAPS, &CAMEL_LEAPS],
            other => return Err(MoveGenError::Unsupported(other)),
        };

        Ok(tables
            .iter()
            .flat_map(|offsets| offsets.iter())
            .filter_map(|&d| self.can_move_to(board, self.loc + d, None))
            .collect())
    }
}

impl Board {
    /// Validate moving whatever stands on `from` to `to`.
    ///
    /// `None` if `from` is empty or the occupant cannot make that move.
    #[must_use]
    pub fn can_move(&self, from: Coord, to: Coord, special: Option<SpecialMove>) -> Option<Move> {
        self.piece_at(from)?.can_move_to(self, to, special)
    }
}
