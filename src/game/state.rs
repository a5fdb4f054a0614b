use std::fmt;
use std::path::Path;

use crate::board::{
    Board, BoardError, BoardSpec, Color, Coord, Move, Piece, PieceType, SpecError, SpecialMove,
};

use super::{LegalityPolicy, Rejection};

/// Outcome of a match so far
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Color),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(color) => write!(f, "{color} wins"),
        }
    }
}

/// One match: the board plus whose move it is and whether someone has won.
///
/// `make_move` applies whatever it is given. Legality is the caller's job
/// (see [`LegalityPolicy`] and [`GameState::validate`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    spec: BoardSpec,
    /// Board as built from `spec`, restored by `reset`
    initial: Board,
    board: Board,
    pov: Color,
    has_turn: Color,
    turn: u32,
    winner: Option<Color>,
}

impl GameState {
    /// The side that opens every match
    pub const FIRST_TO_MOVE: Color = Color::White;

    /// Start a match from `spec`, viewed from `pov`'s side of the board.
    pub fn new(spec: BoardSpec, pov: Color) -> Result<Self, SpecError> {
        let board = Board::from_spec(&spec)?;
        Ok(GameState {
            spec,
            initial: board.clone(),
            board,
            pov,
            has_turn: Self::FIRST_TO_MOVE,
            turn: 0,
            winner: None,
        })
    }

    /// Start a match from a `.json` spec file.
    pub fn load(path: impl AsRef<Path>, pov: Color) -> Result<Self, SpecError> {
        Self::new(BoardSpec::load(path)?, pov)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for speculative queries such as
    /// `exists_check_after_move`. Turn bookkeeping is not touched.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn spec(&self) -> &BoardSpec {
        &self.spec
    }

    /// The human player's color. Only affects presentation.
    #[must_use]
    pub fn pov(&self) -> Color {
        self.pov
    }

    #[must_use]
    pub fn has_turn(&self) -> Color {
        self.has_turn
    }

    /// Half-moves (including passes) since the start of the match
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(color) => GameStatus::Won(color),
            None => GameStatus::InProgress,
        }
    }

    /// Check a proposed move for the side to move under `policy`.
    pub fn validate(
        &mut self,
        policy: LegalityPolicy,
        from: Coord,
        to: Coord,
        special: Option<SpecialMove>,
    ) -> Result<Move, Rejection> {
        if let Some(winner) = self.winner {
            return Err(Rejection::GameOver { winner });
        }
        policy.validate(&mut self.board, self.has_turn, from, to, special)
    }

    /// Apply an already validated move and hand the turn over.
    ///
    /// Landing on the opposing king wins the game for the side to move.
    /// Returns the captured piece, if any. On error nothing changes.
    pub fn make_move(&mut self, mv: &Move) -> Result<Option<Piece>, BoardError> {
        let takes_king = self.board.piece_at(mv.to()).is_some_and(|p| {
            p.kind() == PieceType::King && p.color() == self.has_turn.other()
        });
        let captured = self.board.move_piece(mv.from(), mv.to())?;
        if takes_king {
            emit!(debug, "{} captures the king on {}", self.has_turn, mv.to());
            self.winner = Some(self.has_turn);
        }
        self.pass_turn();
        Ok(captured)
    }

    /// Hand the move to the other side without touching the board.
    pub fn pass_turn(&mut self) {
        self.has_turn = self.has_turn.other();
        self.turn += 1;
    }

    /// `color` gives up; the other side wins immediately.
    pub fn resign_player(&mut self, color: Color) {
        emit!(debug, "{color} resigns at turn {}", self.turn);
        self.winner = Some(color.other());
    }

    /// Rebuild the board from the spec and start over with the same sides.
    pub fn reset(&mut self) {
        self.board.clone_from(&self.initial);
        self.has_turn = Self::FIRST_TO_MOVE;
        self.turn = 0;
        self.winner = None;
        emit!(debug, "game reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "size": {"w": 8, "h": 8},
        "white": {"king": ["a1"]},
        "black": {"king": ["h8"]}
    }"#;

    fn minimal() -> GameState {
        GameState::new(BoardSpec::from_json(MINIMAL).unwrap(), Color::White).unwrap()
    }

    fn adjacent_kings() -> GameState {
        let spec = BoardSpec::from_json(
            r#"{
                "size": {"w": 8, "h": 8},
                "white": {"king": "a1", "rook": ["h1"]},
                "black": {"king": "b2"}
            }"#,
        )
        .unwrap();
        GameState::new(spec, Color::White).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = minimal();
        assert_eq!(game.has_turn(), Color::White);
        assert_eq!(game.turn(), 0);
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_game_over());
        assert_eq!(game.pov(), Color::White);
    }

    #[test]
    fn test_pass_turn() {
        let mut game = minimal();
        let board = game.board().clone();
        game.pass_turn();
        assert_eq!(game.has_turn(), Color::Black);
        assert_eq!(game.turn(), 1);
        game.pass_turn();
        assert_eq!(game.has_turn(), Color::White);
        assert_eq!(game.turn(), 2);
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn test_king_capture_wins() {
        let mut game = adjacent_kings();
        let mv = game.board().can_move(Coord(0, 0), Coord(1, 1), None).unwrap();
        assert!(mv.is_capture());

        let captured = game.make_move(&mv).unwrap().unwrap();
        assert_eq!(captured.kind(), PieceType::King);
        assert_eq!(game.winner(), Some(Color::White));
        assert!(game.is_game_over());
        assert_eq!(game.status(), GameStatus::Won(Color::White));
        assert_eq!(game.board().king_location(Color::Black), None);
    }

    #[test]
    fn test_quiet_king_move_does_not_win() {
        let mut game = adjacent_kings();
        game.pass_turn();
        let mv = game.board().can_move(Coord(1, 1), Coord(0, 1), None).unwrap();
        game.make_move(&mv).unwrap();
        assert_eq!(game.winner(), None);
        assert_eq!(game.turn(), 2);
    }

    #[test]
    fn test_make_move_from_empty_square_changes_nothing() {
        let mut game = adjacent_kings();
        let mv = game.board().can_move(Coord(0, 7), Coord(5, 7), None).unwrap();
        game.make_move(&mv).unwrap();
        let before = game.clone();
        assert!(game.make_move(&mv).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_resign() {
        let mut game = minimal();
        game.resign_player(Color::White);
        assert_eq!(game.winner(), Some(Color::Black));
        assert!(game.is_game_over());

        let mut game = minimal();
        game.resign_player(Color::Black);
        assert_eq!(game.winner(), Some(Color::White));
    }

    #[test]
    fn test_reset_after_win() {
        let mut game = adjacent_kings();
        let fresh = game.clone();
        let rook_slide = game.board().can_move(Coord(0, 7), Coord(4, 7), None).unwrap();
        game.make_move(&rook_slide).unwrap();
        game.pass_turn();
        let takes_king = game.board().can_move(Coord(0, 0), Coord(1, 1), None).unwrap();
        game.make_move(&takes_king).unwrap();
        assert!(game.is_game_over());

        game.reset();
        assert_eq!(game, fresh);
        assert_eq!(game.turn(), 0);
        assert_eq!(game.winner(), None);
        assert_eq!(game.has_turn(), Color::White);
    }

    #[test]
    fn test_reset_restores_captured_pieces_and_ids() {
        let mut game = adjacent_kings();
        let rook_id = game.board().piece_at(Coord(0, 7)).unwrap().id();
        game.pass_turn();
        let mv = game.board().can_move(Coord(1, 1), Coord(0, 1), None).unwrap();
        game.make_move(&mv).unwrap();
        game.board_mut().remove_piece(Coord(0, 7));
        assert_eq!(game.board().pieces().count(), 2);

        game.reset();
        assert_eq!(game.board(), &Board::from_spec(game.spec()).unwrap());
        assert_eq!(game.board().piece_at(Coord(0, 7)).unwrap().id(), rook_id);
        assert_eq!(game.board().king_location(Color::Black), Some(Coord(1, 1)));
    }

    #[test]
    fn test_validate_refuses_after_game_over() {
        let mut game = minimal();
        game.resign_player(Color::Black);
        assert_eq!(
            game.validate(LegalityPolicy::Permissive, Coord(0, 0), Coord(0, 1), None),
            Err(Rejection::GameOver {
                winner: Color::White
            })
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Won(Color::Black).to_string(), "Black wins");
        assert_eq!(GameStatus::InProgress.to_string(), "in progress");
    }
}
