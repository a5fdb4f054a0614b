use std::collections::{BTreeSet, HashMap};

use super::error::BoardError;
use super::{Color, Coord, Piece, PieceType};

/// Squares held by each (color, type) pair. Keys whose set empties are dropped.
pub(crate) type PieceIndex = HashMap<(Color, PieceType), BTreeSet<Coord>>;

/// A fixed-size grid of optional pieces plus a (color, type) -> squares index.
///
/// For every occupied cell exactly one index entry holds its coordinate under
/// the occupant's (color, type) key, and the index holds nothing else. All
/// mutation goes through `add_piece` / `remove_piece` / `move_piece`, which
/// keep both in step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) rows: i32,
    pub(crate) cols: i32,
    pub(crate) grid: Vec<Option<Piece>>, // row-major
    pub(crate) index: PieceIndex,
    pub(crate) next_id: u32,
}

impl Board {
    /// Largest number of squares a board may have.
    pub const MAX_SQUARES: usize = 1 << 20;

    /// Square count of a `rows` x `cols` board, or `None` unless both sides
    /// are positive and the area is at most `MAX_SQUARES`.
    #[must_use]
    pub fn square_count(rows: i32, cols: i32) -> Option<usize> {
        if rows <= 0 || cols <= 0 {
            return None;
        }
        let cells = usize::try_from(rows.checked_mul(cols)?).ok()?;
        (cells <= Self::MAX_SQUARES).then_some(cells)
    }

    /// An empty board. Callers are responsible for placing both kings.
    pub(crate) fn empty(rows: i32, cols: i32) -> Result<Self, BoardError> {
        let cells =
            Self::square_count(rows, cols).ok_or(BoardError::InvalidSize { rows, cols })?;
        Ok(Board {
            rows,
            cols,
            grid: vec![None; cells],
            index: HashMap::new(),
            next_id: 0,
        })
    }

    /// Number of rows (board height)
    #[must_use]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns (board width)
    #[must_use]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[must_use]
    pub fn n_squares(&self) -> usize {
        self.grid.len()
    }

    #[inline]
    #[must_use]
    pub fn in_bounds(&self, c: Coord) -> bool {
        (0..self.rows).contains(&c.row()) && (0..self.cols).contains(&c.col())
    }

    #[inline]
    pub(crate) fn cell(&self, c: Coord) -> Option<usize> {
        if self.in_bounds(c) {
            Some((c.row() * self.cols + c.col()) as usize)
        } else {
            None
        }
    }

    /// The piece on a square, or `None` if empty or off the board
    #[inline]
    #[must_use]
    pub fn piece_at(&self, c: Coord) -> Option<Piece> {
        self.cell(c).and_then(|i| self.grid[i])
    }

    /// Just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_at(&self, c: Coord) -> Option<Color> {
        self.piece_at(c).map(|p| p.color())
    }

    /// True for an in-bounds square with no occupant
    #[inline]
    #[must_use]
    pub fn is_empty(&self, c: Coord) -> bool {
        matches!(self.cell(c), Some(i) if self.grid[i].is_none())
    }

    /// Squares held by `color`'s pieces of type `kind`, in row-major order
    pub fn squares_of(&self, color: Color, kind: PieceType) -> impl Iterator<Item = Coord> + '_ {
        self.index
            .get(&(color, kind))
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Every piece on the board, in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.grid.iter().flatten()
    }

    /// Every piece of one color, in row-major order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color() == color)
    }

    /// Where `color`'s king stands, if it is still on the board
    #[must_use]
    pub fn king_location(&self, color: Color) -> Option<Coord> {
        self.squares_of(color, PieceType::King).next()
    }

    /// Number of pieces of one (color, type) pair
    #[must_use]
    pub fn count(&self, color: Color, kind: PieceType) -> usize {
        self.index.get(&(color, kind)).map_or(0, BTreeSet::len)
    }

    /// Id the next placed piece will receive
    #[must_use]
    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}
