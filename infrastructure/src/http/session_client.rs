//! `reqwest` client for the session endpoint

use async_trait::async_trait;
use dirchat_application::{ExchangeError, SessionClient};
use dirchat_domain::{SessionExchangeRequest, SessionExchangeResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Endpoint used when nothing is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:7092/api/FileReader";

/// Session client that POSTs JSON to a single fixed URL
#[derive(Clone)]
pub struct HttpSessionClient {
    client: Client,
    endpoint: String,
}

impl HttpSessionClient {
    /// Create a client for `endpoint`.
    ///
    /// `timeout` bounds the whole request; `None` waits as long as the
    /// transport does.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> reqwest::Result<Self> {
        // The endpoint is a local service; system proxies are not consulted.
        let mut builder = Client::builder().no_proxy();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SessionClient for HttpSessionClient {
    async fn exchange(
        &self,
        request: &SessionExchangeRequest,
    ) -> Result<SessionExchangeResponse, ExchangeError> {
        debug!(
            endpoint = %self.endpoint,
            session = request.session_id.as_deref().unwrap_or("<new>"),
            "POST exchange"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ExchangeError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ExchangeError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ExchangeError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SessionExchangeResponse = serde_json::from_str(&body)
            .map_err(|e| ExchangeError::MalformedResponse(e.to_string()))?;

        info!(
            "Exchange with session {} returned {} turns",
            parsed.session_id,
            parsed.full_conversation_history.len()
        );
        Ok(parsed)
    }
}
