use std::env;
use std::process::ExitCode;

use star_chess::game::{GameState, LegalityPolicy};
use star_chess::{Color, Coord};

const USAGE: &str = "usage: star_chess <spec.json> [from-to | pass]...";

/// Parse `e2-e4` into its two squares.
fn parse_step(arg: &str) -> Result<(Coord, Coord), String> {
    let (from, to) = arg
        .split_once('-')
        .ok_or_else(|| format!("expected <from>-<to>, got '{arg}'"))?;
    let from = Coord::from_algebraic(from).map_err(|e| e.to_string())?;
    let to = Coord::from_algebraic(to).map_err(|e| e.to_string())?;
    Ok((from, to))
}

fn play(game: &mut GameState, arg: &str) -> Result<(), String> {
    if arg == "pass" {
        game.pass_turn();
        return Ok(());
    }
    let (from, to) = parse_step(arg)?;
    let mv = game
        .validate(LegalityPolicy::NoSelfCheck, from, to, None)
        .map_err(|e| format!("{arg}: {e}"))?;
    game.make_move(&mv).map_err(|e| format!("{arg}: {e}"))?;
    Ok(())
}

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((path, moves)) = args.split_first() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let mut game = match GameState::load(path, Color::White) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    for arg in moves {
        if let Err(e) = play(&mut game, arg) {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }

    print!("{}", game.board());
    println!("turn: {}", game.turn());
    println!("to_move: {}", game.has_turn());
    for color in Color::BOTH {
        match game.board().exists_check(color) {
            Ok(check) => println!("{} in check: {check}", color.to_string().to_lowercase()),
            Err(e) => println!("{e}"),
        }
    }
    println!("status: {}", game.status());
    ExitCode::SUCCESS
}
