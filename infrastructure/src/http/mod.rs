//! HTTP adapter for the session endpoint.
//!
//! Provides [`HttpSessionClient`], a `reqwest` implementation of the
//! [`SessionClient`](dirchat_application::SessionClient) port.

mod session_client;

pub use session_client::{DEFAULT_ENDPOINT, HttpSessionClient};
