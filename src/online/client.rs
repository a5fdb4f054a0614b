//! Submitting and polling moves.

use std::thread;
use std::time::Duration;

use crate::board::{Color, Coord, Move};
use crate::game::{GameState, LegalityPolicy};

use super::error::OnlineError;
use super::wire::{move_key, QueryResponse, Request, Response, Signal, WireMove};

/// Sends one request body to the server.
pub trait Transport {
    fn post(&self, endpoint: &str, request: &Request) -> Result<Response, OnlineError>;
}

/// Waits between polls. Tests substitute one that only records.
pub trait Sleeper {
    fn sleep(&self, delay: Duration);
}

/// Blocks the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, delay: Duration) {
        thread::sleep(delay);
    }
}

/// How `query` waits for the opponent's move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Pause before every poll, including the first
    pub delay: Duration,
    /// Give up after this many polls; `None` polls forever
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            delay: Duration::from_secs(3),
            max_attempts: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeConfig {
    pub endpoint: String,
    pub username: String,
    pub retry: RetryPolicy,
}

impl ExchangeConfig {
    pub fn new(endpoint: impl Into<String>, username: impl Into<String>) -> Self {
        ExchangeConfig {
            endpoint: endpoint.into(),
            username: username.into(),
            retry: RetryPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

/// What the local player sends for a turn
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outgoing {
    Move(Move),
    Pass,
    Forfeit,
}

/// What the opponent sent for a turn, before it is checked locally
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteAction {
    Move {
        from: Coord,
        to: Coord,
        capture: bool,
        msg: Option<String>,
    },
    Pass,
    Forfeit,
}

impl RemoteAction {
    fn decode(response: QueryResponse) -> Option<Self> {
        Some(match response.mv? {
            WireMove::Signal(Signal::Pass) => RemoteAction::Pass,
            WireMove::Signal(Signal::Forfeit) => RemoteAction::Forfeit,
            WireMove::Step {
                fr,
                to,
                capture,
                msg,
            } => RemoteAction::Move {
                from: Coord(fr[0], fr[1]),
                to: Coord(to[0], to[1]),
                capture,
                msg,
            },
        })
    }

    /// Turn a received step into a locally validated `Move` for the side to
    /// move. Pass and forfeit resolve to `None`.
    ///
    /// The sender's capture flag is advisory; the returned move carries the
    /// flag computed from the local board.
    pub fn resolve(
        &self,
        game: &mut GameState,
        policy: LegalityPolicy,
    ) -> Result<Option<Move>, OnlineError> {
        let RemoteAction::Move {
            from,
            to,
            capture,
            msg,
        } = self
        else {
            return Ok(None);
        };
        let mv = game.validate(policy, *from, *to, None)?;
        if mv.is_capture() != *capture {
            emit!(warn, "capture flag mismatch on {mv}, using local board");
        }
        Ok(Some(match msg {
            Some(text) => mv.with_message(text.clone()),
            None => mv,
        }))
    }

    /// Validate and apply to `game`: a move goes through `make_move`, a pass
    /// through `pass_turn`, and a forfeit resigns the side to move.
    ///
    /// Returns the applied move, if any.
    pub fn apply_to(
        &self,
        game: &mut GameState,
        policy: LegalityPolicy,
    ) -> Result<Option<Move>, OnlineError> {
        match self {
            RemoteAction::Pass => {
                game.pass_turn();
                Ok(None)
            }
            RemoteAction::Forfeit => {
                let loser: Color = game.has_turn();
                game.resign_player(loser);
                Ok(None)
            }
            RemoteAction::Move { .. } => {
                let mv = self.resolve(game, policy)?;
                if let Some(mv) = &mv {
                    game.make_move(mv)?;
                }
                Ok(mv)
            }
        }
    }
}

/// Talks to the move server on behalf of one user.
pub struct MoveExchange<T, S = ThreadSleeper> {
    config: ExchangeConfig,
    transport: T,
    sleeper: S,
}

impl<T: Transport> MoveExchange<T> {
    pub fn new(config: ExchangeConfig, transport: T) -> Self {
        Self::with_sleeper(config, transport, ThreadSleeper)
    }
}

impl<T: Transport, S: Sleeper> MoveExchange<T, S> {
    pub fn with_sleeper(config: ExchangeConfig, transport: T, sleeper: S) -> Self {
        MoveExchange {
            config,
            transport,
            sleeper,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    fn send(&self, request: &Request) -> Result<Response, OnlineError> {
        self.transport.post(&self.config.endpoint, request)
    }

    fn send_ok(&self, request: &Request) -> Result<(), OnlineError> {
        let response = self.send(request)?;
        if response.is_success() {
            Ok(())
        } else {
            Err(OnlineError::Status {
                status: response.status,
                body: response.body,
            })
        }
    }

    /// Drop everything the server holds for this user.
    pub fn clear(&self) -> Result<(), OnlineError> {
        self.send_ok(&Request::Clear {
            username: self.config.username.clone(),
        })
    }

    /// Publish the local player's action for `turn`.
    pub fn submit(&self, turn: u32, outgoing: &Outgoing) -> Result<(), OnlineError> {
        let mv = match outgoing {
            Outgoing::Move(mv) => WireMove::from(mv),
            Outgoing::Pass => WireMove::Signal(Signal::Pass),
            Outgoing::Forfeit => WireMove::Signal(Signal::Forfeit),
        };
        let key = move_key(turn);
        emit!(debug, "submitting {key}");
        self.send_ok(&Request::Submit {
            username: self.config.username.clone(),
            mv,
            key,
        })
    }

    /// Wait for the opponent's action for `turn`.
    ///
    /// Sleeps before every poll. A 404, or a success body with no move,
    /// means the key is not there yet; any other failure status is fatal.
    pub fn query(&self, turn: u32) -> Result<RemoteAction, OnlineError> {
        let key = move_key(turn);
        let request = Request::Query {
            username: self.config.username.clone(),
            key: key.clone(),
        };
        let retry = self.config.retry;
        let mut attempts = 0u32;

        loop {
            if retry.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(OnlineError::Exhausted { key, attempts });
            }
            self.sleeper.sleep(retry.delay);
            attempts += 1;

            let response = self.send(&request)?;
            if response.status == 404 {
                emit!(trace, "{key} not available yet (attempt {attempts})");
                continue;
            }
            if !response.is_success() {
                return Err(OnlineError::Status {
                    status: response.status,
                    body: response.body,
                });
            }
            let decoded: QueryResponse = serde_json::from_str(&response.body)?;
            match RemoteAction::decode(decoded) {
                Some(action) => return Ok(action),
                None => emit!(trace, "{key} empty (attempt {attempts})"),
            }
        }
    }
}
