//! Declarative board specs.
//!
//! A spec is a JSON object with exactly three keys:
//!
//! ```json
//! {
//!   "size": { "w": 8, "h": 8 },
//!   "white": { "king": "e1", "rook": ["a1", "h1"] },
//!   "black": { "king": ["e8"], "sergeant": ["a7", "b7"] }
//! }
//! ```
//!
//! Each side maps piece names to the squares they start on, either as a
//! list or a single string. Both sides must list exactly one king.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{BoardError, SpecError};
use super::{Board, Color, Coord, PieceType};

/// Board dimensions as written in a spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardSize {
    #[serde(rename = "w")]
    pub width: i32,
    #[serde(rename = "h")]
    pub height: i32,
}

/// One or more algebraic squares.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Squares {
    One(String),
    Many(Vec<String>),
}

impl Squares {
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        match self {
            Squares::One(s) => std::slice::from_ref(s),
            Squares::Many(v) => v,
        }
    }
}

/// Starting placement for one side, keyed by piece type.
pub type Placement = BTreeMap<PieceType, Squares>;

/// A parsed board spec. Immutable once loaded; `GameState` keeps one to
/// rebuild the board on reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardSpec {
    pub size: BoardSize,
    pub white: Placement,
    pub black: Placement,
}

impl BoardSpec {
    /// Parse a spec from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let spec: BoardSpec = serde_json::from_str(json)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Read and parse a `.json` spec file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let path = path.as_ref();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            return Err(SpecError::NotJson {
                path: path.display().to_string(),
            });
        }
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    #[must_use]
    pub fn placement(&self, color: Color) -> &Placement {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Checks that do not need a board: a sane size and one king per side.
    fn validate(&self) -> Result<(), SpecError> {
        let BoardSize { width, height } = self.size;
        if Board::square_count(height, width).is_none() {
            return Err(SpecError::InvalidSize { width, height });
        }
        for color in Color::BOTH {
            let kings = self
                .placement(color)
                .get(&PieceType::King)
                .ok_or(SpecError::MissingKing { color })?;
            let found = kings.as_slice().len();
            if found != 1 {
                return Err(SpecError::KingCount { color, found });
            }
        }
        Ok(())
    }

    /// Placements in the order pieces receive ids: both kings first (White,
    /// then Black), then each side's remaining pieces in type order.
    fn placements(&self) -> Vec<(PieceType, Color, &str)> {
        let mut out = Vec::new();
        for color in Color::BOTH {
            if let Some(kings) = self.placement(color).get(&PieceType::King) {
                out.extend(kings.as_slice().iter().map(|s| (PieceType::King, color, s.as_str())));
            }
        }
        for color in Color::BOTH {
            for (&kind, squares) in self.placement(color) {
                if kind == PieceType::King {
                    continue;
                }
                out.extend(squares.as_slice().iter().map(|s| (kind, color, s.as_str())));
            }
        }
        out
    }
}

impl Board {
    /// Build a board from a spec. No partial board is returned on failure.
    pub fn from_spec(spec: &BoardSpec) -> Result<Self, SpecError> {
        spec.validate()?;
        let BoardSize { width, height } = spec.size;
        let mut board =
            Board::empty(height, width).map_err(|_| SpecError::InvalidSize { width, height })?;

        for (kind, color, notation) in spec.placements() {
            let square = Coord::from_algebraic(notation)?;
            board
                .add_piece(kind, color, square)
                .map_err(|e| match e {
                    BoardError::Occupied { square } => SpecError::Collision { square },
                    _ => SpecError::OutOfBounds { square },
                })?;
        }

        emit!(
            debug,
            "built {}x{} board with {} pieces",
            board.cols(),
            board.rows(),
            board.pieces().count()
        );
        Ok(board)
    }

    /// Parse a JSON spec and build the board from it.
    pub fn try_from_json(json: &str) -> Result<Self, SpecError> {
        Self::from_spec(&BoardSpec::from_json(json)?)
    }
}
