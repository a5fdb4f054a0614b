//! A game that several threads can query.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{BoardError, Color, Coord, Move, Piece, SpecialMove};

use super::{GameState, LegalityPolicy, Rejection};

/// Cloneable handle to one `GameState` behind a mutex.
///
/// Every operation holds the lock for its whole duration, so the transient
/// position inside `exists_check_after_move` is never visible to another
/// thread.
#[derive(Clone, Debug)]
pub struct SharedGame {
    inner: Arc<Mutex<GameState>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(game: GameState) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Run `f` with exclusive access to the game.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameState) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// A copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.inner.lock().clone()
    }

    pub fn exists_check(&self, color: Color) -> Result<bool, BoardError> {
        self.inner.lock().board().exists_check(color)
    }

    pub fn exists_check_after_move(&self, color: Color, mv: &Move) -> Result<bool, BoardError> {
        self.inner.lock().board_mut().exists_check_after_move(color, mv)
    }

    /// Validate and apply in one critical section.
    pub fn play(
        &self,
        policy: LegalityPolicy,
        from: Coord,
        to: Coord,
        special: Option<SpecialMove>,
    ) -> Result<Option<Piece>, Rejection> {
        let mut game = self.inner.lock();
        let mv = game.validate(policy, from, to, special)?;
        Ok(game.make_move(&mv)?)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.inner.lock().is_game_over()
    }
}
