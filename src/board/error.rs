//! Error types for board construction and mutation.

use std::fmt;
use std::io;

use super::{Board, Color, Coord, PieceType};

/// Error type for algebraic square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Empty notation string
    Empty,
    /// First character is not a lowercase column letter
    InvalidFile { notation: String },
    /// Remainder after the column letter is not a number
    InvalidRank { notation: String },
    /// Row number parsed but lands below row 1
    RankOutOfRange { notation: String },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::Empty => write!(f, "Empty square notation"),
            CoordError::InvalidFile { notation } => {
                write!(f, "Invalid column letter in square '{notation}'")
            }
            CoordError::InvalidRank { notation } => {
                write!(f, "Invalid row number in square '{notation}'")
            }
            CoordError::RankOutOfRange { notation } => {
                write!(f, "Row out of range in square '{notation}'")
            }
        }
    }
}

impl std::error::Error for CoordError {}

/// Error type for board spec loading failures.
///
/// Every variant is fatal: no partial board is produced.
#[derive(Debug)]
pub enum SpecError {
    /// Spec file could not be read
    Io(io::Error),
    /// Spec path does not end in `.json`
    NotJson { path: String },
    /// JSON was malformed or had the wrong key set
    Json(serde_json::Error),
    /// Width or height is not positive, or the board is too large
    InvalidSize { width: i32, height: i32 },
    /// A side has no king entry
    MissingKing { color: Color },
    /// A side lists a king square count other than one
    KingCount { color: Color, found: usize },
    /// A placement square could not be parsed
    Square(CoordError),
    /// A placement square lies outside the board
    OutOfBounds { square: Coord },
    /// Two placements target the same square
    Collision { square: Coord },
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::Io(e) => write!(f, "Failed to read board spec: {e}"),
            SpecError::NotJson { path } => {
                write!(f, "Board spec '{path}' must be a .json file")
            }
            SpecError::Json(e) => write!(f, "Malformed board spec: {e}"),
            SpecError::InvalidSize { width, height } => {
                write!(
                    f,
                    "Board size {width}x{height} must be positive and at most {} squares",
                    Board::MAX_SQUARES
                )
            }
            SpecError::MissingKing { color } => {
                write!(f, "{color} has no king in the board spec")
            }
            SpecError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            SpecError::Square(e) => write!(f, "Invalid placement: {e}"),
            SpecError::OutOfBounds { square } => {
                write!(f, "Placement {square} lies outside the board")
            }
            SpecError::Collision { square } => {
                write!(f, "Two pieces placed on {square}")
            }
        }
    }
}

impl std::error::Error for SpecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpecError::Io(e) => Some(e),
            SpecError::Json(e) => Some(e),
            SpecError::Square(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SpecError {
    fn from(e: io::Error) -> Self {
        SpecError::Io(e)
    }
}

impl From<serde_json::Error> for SpecError {
    fn from(e: serde_json::Error) -> Self {
        SpecError::Json(e)
    }
}

impl From<CoordError> for SpecError {
    fn from(e: CoordError) -> Self {
        SpecError::Square(e)
    }
}

/// Error type for board mutation and check queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Target square already holds a piece
    Occupied { square: Coord },
    /// Square lies outside the board
    OutOfBounds { square: Coord },
    /// Source square of a relocation is empty
    EmptySquare { square: Coord },
    /// The color's king is not on the board
    MissingKing { color: Color },
    /// Board dimensions are not positive or exceed `Board::MAX_SQUARES`
    InvalidSize { rows: i32, cols: i32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Occupied { square } => write!(f, "Square {square} is already occupied"),
            BoardError::OutOfBounds { square } => {
                write!(f, "Square {square} lies outside the board")
            }
            BoardError::EmptySquare { square } => write!(f, "No piece on {square}"),
            BoardError::MissingKing { color } => write!(f, "{color} king is not on the board"),
            BoardError::InvalidSize { rows, cols } => {
                write!(f, "Board of {rows} rows and {cols} columns is not allowed")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for move enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveGenError {
    /// The variant answers point queries only
    Unsupported(PieceType),
}

impl fmt::Display for MoveGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenError::Unsupported(kind) => {
                write!(f, "Move enumeration is not supported for {kind}")
            }
        }
    }
}

impl std::error::Error for MoveGenError {}
