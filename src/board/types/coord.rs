//! Board coordinate type and algebraic notation.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::error::CoordError;

/// A square on the board, represented as (row, col).
///
/// Row 0 is the bottom of the board (White's side) and col 0 is the leftmost
/// column. Coordinates are signed so that offsets and ray walks can step off
/// the board; bounds are checked against a `Board`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord(pub i32, pub i32); // (row, col)

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Coord(row, col)
    }

    /// Get the row (0 = row "1" in algebraic notation)
    #[inline]
    #[must_use]
    pub const fn row(self) -> i32 {
        self.0
    }

    /// Get the column (0 = column "a")
    #[inline]
    #[must_use]
    pub const fn col(self) -> i32 {
        self.1
    }

    /// Parse column letters followed by a one-indexed row number, e.g. "a1",
    /// "c12" or "ab3".
    ///
    /// Columns past `z` continue as `aa`, `ab`, ..., `az`, `ba`, like
    /// spreadsheet columns.
    pub fn from_algebraic(s: &str) -> Result<Self, CoordError> {
        if s.is_empty() {
            return Err(CoordError::Empty);
        }
        let split = s
            .find(|c: char| !c.is_ascii_lowercase())
            .unwrap_or(s.len());
        let (letters, rest) = s.split_at(split);
        let invalid_file = || CoordError::InvalidFile {
            notation: s.to_string(),
        };
        if letters.is_empty() {
            return Err(invalid_file());
        }
        let mut col: i32 = 0;
        for b in letters.bytes() {
            col = col
                .checked_mul(26)
                .and_then(|c| c.checked_add(i32::from(b - b'a') + 1))
                .ok_or_else(invalid_file)?;
        }

        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoordError::InvalidRank {
                notation: s.to_string(),
            });
        }
        let rank: i32 = rest.parse().map_err(|_| CoordError::InvalidRank {
            notation: s.to_string(),
        })?;
        if rank < 1 {
            return Err(CoordError::RankOutOfRange {
                notation: s.to_string(),
            });
        }

        Ok(Coord(rank - 1, col - 1))
    }

    /// Column letters alone: `a` for column 0, `aa` for column 26.
    /// Negative columns have no name and render as `?`.
    #[must_use]
    pub fn file_label(self) -> String {
        let Ok(col) = u32::try_from(self.1) else {
            return "?".to_string();
        };
        let mut n = col + 1;
        let mut letters = Vec::new();
        while n > 0 {
            n -= 1;
            letters.push(b'a' + (n % 26) as u8);
            n /= 26;
        }
        letters.iter().rev().map(|&b| char::from(b)).collect()
    }

    /// Render as algebraic notation; the inverse of `from_algebraic` for
    /// every on-board square.
    #[must_use]
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_label(), self.0 + 1)
    }

    /// Uniformly chosen square inside a `rows` x `cols` board.
    pub fn random<R: Rng + ?Sized>(rows: i32, cols: i32, rng: &mut R) -> Self {
        Coord(rng.gen_range(0..rows), rng.gen_range(0..cols))
    }

    /// Per-axis sign of the offset, for stepping along a line.
    #[inline]
    #[must_use]
    pub const fn signum(self) -> Self {
        Coord(self.0.signum(), self.1.signum())
    }

    /// Larger of the absolute row and column offsets.
    #[inline]
    #[must_use]
    pub const fn chebyshev_norm(self) -> i32 {
        let r = self.0.abs();
        let c = self.1.abs();
        if r > c {
            r
        } else {
            c
        }
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord(self.0 * rhs, self.1 * rhs)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 || self.1 < 0 {
            return write!(f, "({}, {})", self.0, self.1);
        }
        f.write_str(&self.to_algebraic())
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::from_algebraic(s)
    }
}

impl TryFrom<&str> for Coord {
    type Error = CoordError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Coord::from_algebraic(s)
    }
}
