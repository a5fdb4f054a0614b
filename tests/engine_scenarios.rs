use star_chess::board::{Board, BoardSpec, Color, Coord, MoveGenError, PieceType, SpecError};
use star_chess::game::{GameState, GameStatus, LegalityPolicy, Rejection};

fn fixture(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn standard() -> GameState {
    GameState::load(fixture("standard.json"), Color::White).expect("standard fixture loads")
}

#[test]
fn standard_setup_loads() {
    let game = standard();
    let board = game.board();
    assert_eq!((board.rows(), board.cols()), (10, 10));
    assert_eq!(board.pieces().count(), 54);
    for color in Color::BOTH {
        assert_eq!(board.count(color, PieceType::Sergeant), 10);
        assert_eq!(board.count(color, PieceType::King), 1);
        assert_eq!(board.exists_check(color), Ok(false));
    }
    assert_eq!(board.king_location(Color::Black), Some(Coord(9, 4)));

    let rendered = board.to_string();
    assert!(rendered.contains(" 1 | R L N B K W B N L R\n"));
    assert!(rendered.contains("10 | r l n b k w b n l r\n"));
}

#[test]
fn minimal_fixture_accepts_bare_string_king() {
    let game = GameState::load(fixture("minimal.json"), Color::Black).unwrap();
    assert_eq!(game.board().king_location(Color::White), Some(Coord(0, 0)));
    assert_eq!(game.board().king_location(Color::Black), Some(Coord(7, 7)));
    assert_eq!(game.pov(), Color::Black);
    assert_eq!(game.has_turn(), Color::White);
}

#[test]
fn missing_king_fixture_fails() {
    let err = GameState::load(fixture("no_black_king.json"), Color::White).unwrap_err();
    assert!(matches!(err, SpecError::MissingKing { color: Color::Black }));
}

#[test]
fn missing_file_is_io_error() {
    let err = BoardSpec::load(fixture("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, SpecError::Io(_)));
}

#[test]
fn opening_moves_alternate_turns() {
    let mut game = standard();

    let sergeant = game
        .validate(LegalityPolicy::NoSelfCheck, Coord(2, 4), Coord(3, 5), None)
        .unwrap();
    game.make_move(&sergeant).unwrap();
    assert_eq!(game.has_turn(), Color::Black);

    // White may not move twice.
    assert_eq!(
        game.validate(LegalityPolicy::Permissive, Coord(0, 1), Coord(3, 2), None),
        Err(Rejection::NotYourPiece {
            square: Coord(0, 1)
        })
    );

    let camel = game
        .validate(LegalityPolicy::NoSelfCheck, Coord(9, 1), Coord(6, 2), None)
        .unwrap();
    game.make_move(&camel).unwrap();

    let grasshopper = game
        .validate(LegalityPolicy::NoSelfCheck, Coord(1, 1), Coord(3, 1), None)
        .unwrap();
    assert!(!grasshopper.is_capture());
    game.make_move(&grasshopper).unwrap();

    assert_eq!(game.turn(), 3);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn enumeration_only_for_leapers() {
    let game = standard();
    let board = game.board();

    let knight = board.piece_at(Coord(0, 2)).unwrap();
    assert_eq!(knight.enumerate_moves(board), Ok(Vec::new()));

    let camel = board.piece_at(Coord(0, 1)).unwrap();
    let targets: Vec<Coord> = camel
        .enumerate_moves(board)
        .unwrap()
        .iter()
        .map(|m| m.to())
        .collect();
    assert_eq!(targets.len(), 2);
    assert!(targets.contains(&Coord(3, 0)));
    assert!(targets.contains(&Coord(3, 2)));

    let queen = board.piece_at(Coord(1, 4)).unwrap();
    assert_eq!(
        queen.enumerate_moves(board),
        Err(MoveGenError::Unsupported(PieceType::Queen))
    );
}

#[test]
fn king_capture_scenario() {
    let spec = BoardSpec::from_json(
        r#"{"size": {"w": 8, "h": 8}, "white": {"king": "d4"}, "black": {"king": "e5"}}"#,
    )
    .unwrap();
    let mut game = GameState::new(spec, Color::White).unwrap();
    let mv = game
        .validate(LegalityPolicy::Permissive, Coord(3, 3), Coord(4, 4), None)
        .unwrap();
    game.make_move(&mv).unwrap();
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(Color::White));
    assert!(matches!(
        game.validate(LegalityPolicy::Permissive, Coord(4, 4), Coord(4, 5), None),
        Err(Rejection::GameOver { .. })
    ));
}

#[test]
fn resign_then_reset_restores_spec() {
    let mut game = standard();
    let fresh_board = game.board().clone();

    for (from, to) in [
        (Coord(2, 0), Coord(3, 0)),
        (Coord(7, 0), Coord(6, 0)),
        (Coord(0, 1), Coord(3, 2)),
    ] {
        let mv = game
            .validate(LegalityPolicy::Permissive, from, to, None)
            .unwrap();
        game.make_move(&mv).unwrap();
    }
    game.resign_player(Color::White);
    assert_eq!(game.winner(), Some(Color::Black));

    game.reset();
    assert_eq!(game.board(), &fresh_board);
    assert_eq!(game.turn(), 0);
    assert_eq!(game.winner(), None);
    assert_eq!(game.has_turn(), Color::White);
}

#[test]
fn board_from_spec_matches_game_board() {
    let game = standard();
    let board = Board::from_spec(game.spec()).unwrap();
    assert_eq!(&board, game.board());
}
