//! Core value types.
//!
//! - `Coord` - board square as (row, col) with algebraic notation
//! - `Color`, `PieceType`, `PieceId`, `Piece` - piece identity and behavior tag
//! - `Move`, `SpecialMove` - validated displacements

mod coord;
mod moves;
mod piece;

pub use coord::Coord;
pub use moves::{Move, SpecialMove};
pub use piece::{Color, Piece, PieceId, PieceType};
