//! Turn bookkeeping and the legality layer that sits above it.
//!
//! `GameState` trusts every move it is handed. Callers validate first with
//! a [`LegalityPolicy`], which lets a human front end, an AI and the online
//! relay each pick how strict to be:
//!
//! ```
//! use star_chess::game::{GameState, LegalityPolicy};
//! use star_chess::{BoardSpec, Color, Coord};
//!
//! let spec = BoardSpec::from_json(r#"{
//!     "size": {"w": 4, "h": 4},
//!     "white": {"king": "a1", "rook": ["b2"]},
//!     "black": {"king": "d4"}
//! }"#).unwrap();
//! let mut game = GameState::new(spec, Color::White).unwrap();
//!
//! let mv = game.validate(LegalityPolicy::NoSelfCheck, Coord(1, 1), Coord(3, 1), None).unwrap();
//! game.make_move(&mv).unwrap();
//! assert_eq!(game.has_turn(), Color::Black);
//! assert_eq!(game.turn(), 1);
//! ```

mod error;
mod policy;
mod shared;
mod state;

pub use error::Rejection;
pub use policy::LegalityPolicy;
pub use shared::SharedGame;
pub use state::{GameState, GameStatus};
