use super::{Board, Coord};

#[cfg(any(test, debug_assertions))]
impl Board {
    /// Panic unless the grid and the (color, type) index describe the same
    /// pieces, and every piece's `loc` matches the cell holding it.
    pub fn assert_consistent(&self) {
        let mut indexed = 0;
        for (&(color, kind), squares) in &self.index {
            assert!(!squares.is_empty(), "empty index entry for {color} {kind}");
            for &sq in squares {
                let piece = self
                    .piece_at(sq)
                    .unwrap_or_else(|| panic!("index lists {color} {kind} on empty {sq}"));
                assert_eq!(
                    (piece.color(), piece.kind()),
                    (color, kind),
                    "index key disagrees with occupant of {sq}"
                );
                indexed += 1;
            }
        }

        let mut occupied = 0;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let sq = Coord(row, col);
                if let Some(piece) = self.piece_at(sq) {
                    assert_eq!(piece.loc(), sq, "{piece} stored on {sq}");
                    occupied += 1;
                }
            }
        }
        assert_eq!(indexed, occupied, "index and grid piece counts differ");
    }
}
