//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use star_chess::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, BoardError, BoardSpec, Color, Coord, CoordError, Move, MoveGenError,
    Piece, PieceType, SpecError, SpecialMove,
};
