//! Board representation and piece movement rules.
//!
//! A board is a fixed `rows x cols` grid of optional pieces plus a
//! (color, type) -> squares index. Pieces answer "can I move there" through
//! `Piece::can_move_to`; the board adds check detection and the mutation
//! primitives the turn machine drives.
//!
//! # Example
//! ```
//! use star_chess::board::{Board, Color, Coord};
//!
//! let board = Board::try_from_json(
//!     r#"{"size": {"w": 8, "h": 8},
//!         "white": {"king": ["a1"], "rook": ["a2"]},
//!         "black": {"king": ["h8"]}}"#,
//! )
//! .unwrap();
//! let rook = board.piece_at(Coord(1, 0)).unwrap();
//! assert!(rook.can_move_to(&board, Coord(7, 0), None).is_some());
//! assert!(!board.exists_check(Color::Black).unwrap());
//! ```

mod attacks;
mod builder;
#[cfg(any(test, debug_assertions))]
mod debug;
mod display;
mod error;
mod make_unmake;
mod movegen;
pub mod prelude;
mod spec;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, CoordError, MoveGenError, SpecError};
pub use spec::{BoardSize, BoardSpec, Placement, Squares};
pub use state::Board;
pub use types::{Color, Coord, Move, Piece, PieceId, PieceType, SpecialMove};
