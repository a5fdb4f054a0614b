//! Threat and check detection.
//!
//! There are no precomputed attack tables: every query asks each enemy
//! piece whether it could legally land on the target square. That is
//! O(squares) geometry checks per target, which is fine for the board
//! sizes this engine is used with.

use super::error::BoardError;
use super::{Board, Color, Coord, Piece};

impl Board {
    /// Pieces of color `by` that could legally move to `target` right now.
    pub fn attackers_of(&self, target: Coord, by: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces_of(by)
            .filter(move |p| p.can_move_to(self, target, None).is_some())
    }

    /// Whether any piece of color `by` could move to `target`.
    #[must_use]
    pub fn is_square_attacked(&self, target: Coord, by: Color) -> bool {
        self.attackers_of(target, by).next().is_some()
    }

    /// True iff some opposing piece can legally move onto `color`'s king.
    ///
    /// Fails with `BoardError::MissingKing` if that king is gone; callers are
    /// expected to stop asking once the game has been won by capture.
    pub fn exists_check(&self, color: Color) -> Result<bool, BoardError> {
        let king = self
            .king_location(color)
            .ok_or(BoardError::MissingKing { color })?;
        Ok(self.is_square_attacked(king, color.other()))
    }
}
