// Emits through the `log` facade when the `logging` feature is on and
// compiles to nothing otherwise.
macro_rules! emit {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        {
            log::$level!($($arg)+);
        }
    }};
}

pub mod board;
pub mod game;
pub mod online;

pub use board::{Board, BoardSpec, Color, Coord, Move, Piece, PieceType};
pub use game::GameState;
