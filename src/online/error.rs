use std::fmt;

use crate::board::BoardError;
use crate::game::Rejection;

/// Error type for the online move exchange
#[derive(Debug)]
pub enum OnlineError {
    /// The request never produced an HTTP response
    Transport(String),
    /// The server answered with a failure status
    Status { status: u16, body: String },
    /// The response body was not the expected JSON
    Decode(serde_json::Error),
    /// The move was still missing after the configured number of polls
    Exhausted { key: String, attempts: u32 },
    /// A received move is not legal on the local board
    Rejected(Rejection),
    /// Applying a received move failed
    Board(BoardError),
}

impl fmt::Display for OnlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnlineError::Transport(e) => write!(f, "Request failed: {e}"),
            OnlineError::Status { status, body } => {
                write!(f, "Server returned {status}: {body}")
            }
            OnlineError::Decode(e) => write!(f, "Malformed server response: {e}"),
            OnlineError::Exhausted { key, attempts } => {
                write!(f, "No move under '{key}' after {attempts} attempts")
            }
            OnlineError::Rejected(r) => write!(f, "Opponent sent an illegal move: {r}"),
            OnlineError::Board(e) => write!(f, "Could not apply opponent move: {e}"),
        }
    }
}

impl std::error::Error for OnlineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OnlineError::Decode(e) => Some(e),
            OnlineError::Rejected(e) => Some(e),
            OnlineError::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for OnlineError {
    fn from(e: serde_json::Error) -> Self {
        OnlineError::Decode(e)
    }
}

impl From<Rejection> for OnlineError {
    fn from(e: Rejection) -> Self {
        OnlineError::Rejected(e)
    }
}

impl From<BoardError> for OnlineError {
    fn from(e: BoardError) -> Self {
        OnlineError::Board(e)
    }
}
