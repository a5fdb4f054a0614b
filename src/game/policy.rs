use crate::board::{Board, Color, Coord, Move, SpecialMove};

use super::Rejection;

/// How strictly a proposed move is checked before `GameState` applies it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LegalityPolicy {
    /// Ownership and piece geometry only. Walking into check is allowed;
    /// losing the king simply loses the game.
    #[default]
    Permissive,
    /// Also refuse moves that leave the mover's own king attacked.
    NoSelfCheck,
}

impl LegalityPolicy {
    /// Validate `color` moving the piece on `from` to `to`.
    ///
    /// Takes the board mutably only for the speculative check query; the
    /// board is unchanged when this returns.
    pub fn validate(
        self,
        board: &mut Board,
        color: Color,
        from: Coord,
        to: Coord,
        special: Option<SpecialMove>,
    ) -> Result<Move, Rejection> {
        let piece = board
            .piece_at(from)
            .ok_or(Rejection::EmptySquare { square: from })?;
        if piece.color() != color {
            return Err(Rejection::NotYourPiece { square: from });
        }
        let mv = piece
            .can_move_to(board, to, special)
            .ok_or(Rejection::IllegalGeometry { from, to })?;

        match self {
            LegalityPolicy::Permissive => Ok(mv),
            LegalityPolicy::NoSelfCheck => {
                if board.exists_check_after_move(color, &mv)? {
                    Err(Rejection::LeavesKingInCheck)
                } else {
                    Ok(mv)
                }
            }
        }
    }
}
