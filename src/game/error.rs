use std::fmt;

use crate::board::{BoardError, Color, Coord};

/// Why a legality policy refused a proposed move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The game already has a winner
    GameOver { winner: Color },
    /// Nothing stands on the origin square
    EmptySquare { square: Coord },
    /// The origin holds the opponent's piece
    NotYourPiece { square: Coord },
    /// The piece cannot reach the destination from where it stands
    IllegalGeometry { from: Coord, to: Coord },
    /// The mover's king would be attacked afterwards
    LeavesKingInCheck,
    /// The board could not answer the check query
    Board(BoardError),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::GameOver { winner } => write!(f, "Game is over, {winner} won"),
            Rejection::EmptySquare { square } => write!(f, "No piece on {square}"),
            Rejection::NotYourPiece { square } => {
                write!(f, "The piece on {square} belongs to the opponent")
            }
            Rejection::IllegalGeometry { from, to } => {
                write!(f, "Illegal move from {from} to {to}")
            }
            Rejection::LeavesKingInCheck => write!(f, "Move would leave the king in check"),
            Rejection::Board(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Rejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Rejection::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for Rejection {
    fn from(e: BoardError) -> Self {
        Rejection::Board(e)
    }
}
