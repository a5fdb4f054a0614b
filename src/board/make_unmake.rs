use super::error::BoardError;
use super::{Board, Color, Coord, Move, Piece, PieceId, PieceType};

/// What `make_move` needs to put the board back exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct UnmakeInfo {
    pub(crate) moved: Piece,
    pub(crate) to: Coord,
    pub(crate) captured: Option<Piece>,
}

impl Board {
    fn index_insert(&mut self, piece: &Piece) {
        self.index
            .entry((piece.color(), piece.kind()))
            .or_default()
            .insert(piece.loc());
    }

    fn index_remove(&mut self, piece: &Piece) {
        let key = (piece.color(), piece.kind());
        if let Some(set) = self.index.get_mut(&key) {
            set.remove(&piece.loc());
            if set.is_empty() {
                self.index.remove(&key);
            }
        }
    }

    /// Put an existing piece (with its id) back on its own `loc`.
    fn place(&mut self, piece: Piece) -> Result<(), BoardError> {
        let square = piece.loc();
        let i = self.cell(square).ok_or(BoardError::OutOfBounds { square })?;
        if self.grid[i].is_some() {
            return Err(BoardError::Occupied { square });
        }
        self.grid[i] = Some(piece);
        self.index_insert(&piece);
        Ok(())
    }

    /// Place a new piece, giving it the next id.
    pub fn add_piece(
        &mut self,
        kind: PieceType,
        color: Color,
        at: Coord,
    ) -> Result<PieceId, BoardError> {
        let id = PieceId(self.next_id);
        self.place(Piece::new(kind, color, at, id))?;
        self.next_id += 1;
        Ok(id)
    }

    /// Remove and return the occupant of a square (`None` if empty).
    pub fn remove_piece(&mut self, at: Coord) -> Option<Piece> {
        let i = self.cell(at)?;
        let piece = self.grid[i].take()?;
        self.index_remove(&piece);
        Some(piece)
    }

    /// Relocate the occupant of `from` to `to`, deleting any occupant of
    /// `to`. The moving piece keeps its id. Returns the captured piece.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Result<Option<Piece>, BoardError> {
        Ok(self.relocate(from, to)?.captured)
    }

    fn relocate(&mut self, from: Coord, to: Coord) -> Result<UnmakeInfo, BoardError> {
        if !self.in_bounds(to) {
            return Err(BoardError::OutOfBounds { square: to });
        }
        let Some(mover) = self.piece_at(from) else {
            return Err(BoardError::EmptySquare { square: from });
        };
        if from == to {
            return Ok(UnmakeInfo {
                moved: mover,
                to,
                captured: None,
            });
        }

        let captured = self.remove_piece(to);
        let Some(moved) = self.remove_piece(from) else {
            return Err(BoardError::EmptySquare { square: from });
        };
        self.place(Piece { loc: to, ..moved })?;

        if let Some(victim) = captured {
            emit!(debug, "{} captures {} on {}", moved.kind(), victim.kind(), to);
        }
        Ok(UnmakeInfo {
            moved,
            to,
            captured,
        })
    }

    /// Apply a move, returning what is needed to undo it.
    pub(crate) fn make_move(&mut self, mv: &Move) -> Result<UnmakeInfo, BoardError> {
        self.relocate(mv.from(), mv.to())
    }

    /// Undo a `make_move`: the mover returns to its square with its id and
    /// any captured piece reappears where it stood.
    pub(crate) fn unmake_move(&mut self, info: UnmakeInfo) {
        self.remove_piece(info.to);
        let restored = self.place(info.moved);
        debug_assert!(restored.is_ok(), "origin square refilled before unmake");
        if let Some(victim) = info.captured {
            let restored = self.place(victim);
            debug_assert!(restored.is_ok(), "capture square refilled before unmake");
        }
    }

    /// Whether `color` would be in check after `mv`, leaving the board as it was.
    ///
    /// The apply/evaluate/undo sequence runs under the `&mut` borrow, so no
    /// other reader can observe the half-applied position.
    pub fn exists_check_after_move(&mut self, color: Color, mv: &Move) -> Result<bool, BoardError> {
        let info = self.make_move(mv)?;
        let result = self.exists_check(color);
        self.unmake_move(info);
        #[cfg(debug_assertions)]
        self.assert_consistent();
        result
    }
}
