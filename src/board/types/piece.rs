//! Piece, piece type and color types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// The twelve movement behaviors a piece can have.
///
/// Names serialize in lowercase (`"king"`, `"wildebeest"`, ...), which is how
/// board spec files refer to them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    King,
    Rook,
    Sergeant,
    Wamazon,
    Bishop,
    Knight,
    Camel,
    Wildebeest,
    Queen,
    Chancellor,
    Archbishop,
    Grasshopper,
}

impl PieceType {
    /// All piece types in declaration order
    pub const ALL: [PieceType; 12] = [
        PieceType::King,
        PieceType::Rook,
        PieceType::Sergeant,
        PieceType::Wamazon,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Camel,
        PieceType::Wildebeest,
        PieceType::Queen,
        PieceType::Chancellor,
        PieceType::Archbishop,
        PieceType::Grasshopper,
    ];

    /// Name used in board spec files
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceType::King => "king",
            PieceType::Rook => "rook",
            PieceType::Sergeant => "sergeant",
            PieceType::Wamazon => "wamazon",
            PieceType::Bishop => "bishop",
            PieceType::Knight => "knight",
            PieceType::Camel => "camel",
            PieceType::Wildebeest => "wildebeest",
            PieceType::Queen => "queen",
            PieceType::Chancellor => "chancellor",
            PieceType::Archbishop => "archbishop",
            PieceType::Grasshopper => "grasshopper",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<PieceType> {
        PieceType::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Single uppercase letter used when drawing the board
    #[must_use]
    pub const fn char_code(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Rook => 'R',
            PieceType::Sergeant => 'S',
            PieceType::Wamazon => 'W',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Camel => 'L',
            PieceType::Wildebeest => 'E',
            PieceType::Queen => 'Q',
            PieceType::Chancellor => 'C',
            PieceType::Archbishop => 'A',
            PieceType::Grasshopper => 'G',
        }
    }

    /// Letter with case based on color (uppercase for White)
    #[must_use]
    pub fn to_display_char(self, color: Color) -> char {
        let c = self.char_code();
        if color == Color::White {
            c
        } else {
            c.to_ascii_lowercase()
        }
    }

    /// Returns true if legality is the union of other variants' legality
    #[must_use]
    pub const fn is_compound(self) -> bool {
        matches!(
            self,
            PieceType::Wildebeest
                | PieceType::Wamazon
                | PieceType::Queen
                | PieceType::Chancellor
                | PieceType::Archbishop
        )
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Side colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row direction a Sergeant advances in (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Creation-order identity of a piece, assigned by the owning board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece standing on a board.
///
/// `loc` is kept in sync with the grid cell the piece occupies. The id is
/// stable for the piece's lifetime, including across moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub(crate) kind: PieceType,
    pub(crate) color: Color,
    pub(crate) loc: Coord,
    pub(crate) id: PieceId,
}

impl Piece {
    pub(crate) const fn new(kind: PieceType, color: Color, loc: Coord, id: PieceId) -> Self {
        Piece {
            kind,
            color,
            loc,
            id,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceType {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn loc(&self) -> Coord {
        self.loc
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// A throwaway piece of another type standing on the same square with
    /// the same color. Compound pieces delegate to these.
    #[inline]
    #[must_use]
    pub(crate) const fn as_kind(&self, kind: PieceType) -> Piece {
        Piece { kind, ..*self }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind, self.loc)
    }
}
