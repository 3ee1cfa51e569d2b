//! Events delivered to the TUI loop from background tasks

use dirchat_application::{ExchangeError, PendingExchange};
use dirchat_domain::SessionExchangeResponse;

/// Message sent back by a spawned exchange task
#[derive(Debug)]
pub enum AppEvent {
    /// The request for `pending` finished
    ExchangeFinished {
        pending: PendingExchange,
        result: Result<SessionExchangeResponse, ExchangeError>,
    },
}
