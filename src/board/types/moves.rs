//! Move type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Optional tag carried by a move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialMove {
    /// Single-use long-range move. The engine carries the tag through
    /// validation without changing the geometry it checks.
    Hyperdrive,
}

/// A validated displacement of one piece.
///
/// Only produced by `Piece::can_move_to` (and enumeration built on it), so
/// `capture` reflects the destination occupancy at validation time. A move
/// goes stale once the board mutates; revalidate before replaying it.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    from: Coord,
    to: Coord,
    capture: bool,
    special: Option<SpecialMove>,
    message: Option<String>,
}

impl Move {
    #[inline]
    pub(crate) const fn new(
        from: Coord,
        to: Coord,
        capture: bool,
        special: Option<SpecialMove>,
    ) -> Self {
        Move {
            from,
            to,
            capture,
            special,
            message: None,
        }
    }

    /// Attach free text for delivery to the opponent.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Coord {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Coord {
        self.to
    }

    /// Whether the destination was occupied when the move was validated
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.capture
    }

    #[inline]
    #[must_use]
    pub const fn special(&self) -> Option<SpecialMove> {
        self.special
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.capture { 'x' } else { ' ' };
        write!(f, "{} > {} [{}]", self.from, self.to, marker)
    }
}
