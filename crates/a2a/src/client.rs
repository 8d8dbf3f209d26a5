//! Client side of the A2A protocol.
//!
//! One [`AgentEndpoint`] per remote agent. The underlying
//! `reqwest::Client` is a connection pool and is safe to share across
//! concurrent calls; endpoints created with [`AgentEndpoint::with_client`]
//! reuse one pool across all three agents.

use anyhow::Result;
use async_trait::async_trait;
use schemas::{Category, Recommend, TravelRequest};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Default per-call ceiling, matching the service-to-service path.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors that can occur when calling a remote agent.
#[derive(Error, Debug)]
pub enum A2aError {
    #[error("call to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("failed to reach {url}: {reason}")]
    Connect { url: String, reason: String },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("{url} returned an unparseable body: {reason}")]
    Body { url: String, reason: String },
}

/// Client for a single remote agent's `/run` endpoint.
pub struct AgentEndpoint {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl AgentEndpoint {
    /// Create an endpoint with its own connection pool and the default
    /// 60-second timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Create an endpoint sharing an existing connection pool.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Configure the per-call timeout (default: 60 seconds).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST the request to the agent and parse its JSON reply.
    ///
    /// A single attempt: no retries at this layer. Timeouts, connection
    /// failures, and non-2xx statuses all come back as typed errors for
    /// the dispatcher to convert into per-slot failures.
    #[instrument(skip(self, request), fields(url = %self.url))]
    pub async fn call(&self, request: &TravelRequest) -> Result<Value, A2aError> {
        debug!("Calling agent at {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    A2aError::Timeout {
                        url: self.url.clone(),
                        timeout: self.timeout,
                    }
                } else {
                    A2aError::Connect {
                        url: self.url.clone(),
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(A2aError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|e| A2aError::Body {
            url: self.url.clone(),
            reason: e.to_string(),
        })
    }
}

/// The host-side view of a remote recommendation agent.
///
/// Wraps an [`AgentEndpoint`] in the [`Recommend`] capability so the
/// dispatcher is generic over local and remote agents alike.
pub struct RemoteAgent {
    category: Category,
    endpoint: AgentEndpoint,
}

impl RemoteAgent {
    pub fn new(category: Category, endpoint: AgentEndpoint) -> Self {
        Self { category, endpoint }
    }
}

#[async_trait]
impl Recommend for RemoteAgent {
    fn category(&self) -> Category {
        self.category
    }

    async fn recommend(&self, request: &TravelRequest) -> Result<Value> {
        Ok(self.endpoint.call(request).await?)
    }
}
