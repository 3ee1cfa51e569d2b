//! Session client port
//!
//! Defines the interface for exchanging one request with the session endpoint.

use async_trait::async_trait;
use dirchat_domain::{SessionExchangeRequest, SessionExchangeResponse};
use thiserror::Error;

/// Errors that can occur during one exchange
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    /// Transport-level failure (connection refused, reset, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("API Error {status}: {body}")]
    Http { status: u16, body: String },

    /// The endpoint answered 2xx but the body is not a valid response
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Client for the session endpoint
///
/// One call is one blocking round trip: the future resolves when the endpoint
/// answers or the transport fails. Implementations (adapters) live in the
/// infrastructure layer.
#[async_trait]
pub trait SessionClient: Send + Sync {
    /// Send a request and wait for the full response
    async fn exchange(
        &self,
        request: &SessionExchangeRequest,
    ) -> Result<SessionExchangeResponse, ExchangeError>;
}
