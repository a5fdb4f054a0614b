//! Client side of the online move exchange.
//!
//! Both players talk to one HTTP endpoint that stores moves under
//! `move-NNN` keys. The mover submits, the opponent polls until the key
//! shows up. Everything here is generic over a [`Transport`] so the
//! exchange can be driven without a network; the `online` feature adds a
//! blocking `reqwest` transport.

mod client;
mod error;
#[cfg(feature = "online")]
mod http;
mod wire;

pub use client::{
    ExchangeConfig, MoveExchange, Outgoing, RemoteAction, RetryPolicy, Sleeper, ThreadSleeper,
    Transport,
};
pub use error::OnlineError;
#[cfg(feature = "online")]
pub use http::HttpTransport;
pub use wire::{move_key, QueryResponse, Request, Response, Signal, WireMove};
