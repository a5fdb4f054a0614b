//! Fluent builder for constructing boards.
//!
//! Allows creating positions piece by piece rather than writing a JSON spec.
//!
//! # Example
//! ```
//! use star_chess::board::{BoardBuilder, Color, Coord, PieceType};
//!
//! let board = BoardBuilder::new(8, 8)
//!     .piece(Coord(0, 4), Color::White, PieceType::King)
//!     .piece(Coord(7, 4), Color::Black, PieceType::King)
//!     .piece(Coord(1, 0), Color::White, PieceType::Sergeant)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::error::{BoardError, SpecError};
use super::spec::{BoardSize, BoardSpec, Squares};
use super::{Board, Color, Coord, PieceType};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    rows: i32,
    cols: i32,
    pieces: Vec<(Coord, Color, PieceType)>,
}

impl BoardBuilder {
    /// Create a builder for an empty `rows` x `cols` board.
    #[must_use]
    pub fn new(rows: i32, cols: i32) -> Self {
        BoardBuilder {
            rows,
            cols,
            pieces: Vec::new(),
        }
    }

    /// Create a builder holding a spec's placements, so individual squares
    /// can be adjusted before building.
    pub fn from_spec(spec: &BoardSpec) -> Result<Self, SpecError> {
        let mut builder = Self::new(spec.size.height, spec.size.width);
        for color in Color::BOTH {
            for (&kind, squares) in spec.placement(color) {
                for notation in squares.as_slice() {
                    let square = Coord::from_algebraic(notation)?;
                    builder.pieces.push((square, color, kind));
                }
            }
        }
        Ok(builder)
    }

    /// Place a piece, replacing anything already queued for that square.
    #[must_use]
    pub fn piece(mut self, square: Coord, color: Color, kind: PieceType) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Coord) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// The equivalent declarative spec.
    #[must_use]
    pub fn to_spec(&self) -> BoardSpec {
        let mut spec = BoardSpec {
            size: BoardSize {
                width: self.cols,
                height: self.rows,
            },
            white: Default::default(),
            black: Default::default(),
        };
        for &(square, color, kind) in &self.pieces {
            let side = match color {
                Color::White => &mut spec.white,
                Color::Black => &mut spec.black,
            };
            let entry = side.entry(kind).or_insert_with(|| Squares::Many(Vec::new()));
            if let Squares::Many(list) = entry {
                list.push(square.to_algebraic());
            }
        }
        spec
    }

    /// Build the board.
    ///
    /// Applies the same checks as spec loading: both kings present exactly
    /// once and every square on the board.
    pub fn build(self) -> Result<Board, SpecError> {
        Board::from_spec(&self.to_spec())
    }

    /// Build without requiring kings. Only useful for geometry tests;
    /// `exists_check` fails on a board built this way if a king is missing.
    pub fn build_unchecked(self) -> Result<Board, BoardError> {
        let mut board = Board::empty(self.rows, self.cols)?;
        for (square, color, kind) in self.pieces {
            board.add_piece(kind, color, square)?;
        }
        Ok(board)
    }
}
