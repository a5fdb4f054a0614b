//! Blocking HTTP transport.

use std::time::Duration;

use reqwest::blocking::Client;

use super::error::OnlineError;
use super::wire::{Request, Response};
use super::Transport;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Posts JSON bodies with a shared `reqwest` blocking client.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, OnlineError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| OnlineError::Transport(e.to_string()))?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn post(&self, endpoint: &str, request: &Request) -> Result<Response, OnlineError> {
        let response = self
            .client
            .post(endpoint)
            .json(request)
            .send()
            .map_err(|e| OnlineError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| OnlineError::Transport(e.to_string()))?;
        Ok(Response { status, body })
    }
}
