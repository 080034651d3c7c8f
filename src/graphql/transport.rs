/// The HTTP seam: a `Transport` trait and its blocking reqwest implementation.
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use serde_json::{Map, Value};
use tracing::debug;

use super::errors::GraphQlError;
use super::request::GraphQlRequest;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can carry one GraphQL request and hand back the decoded body.
pub trait Transport {
    /// Send `request` and return the top-level JSON object of the response.
    ///
    /// # Errors
    ///
    /// Returns `GraphQlError` on network, HTTP status, or body decoding failure.
    fn send(&self, request: &GraphQlRequest<'_>) -> Result<Map<String, Value>, GraphQlError>;
}

/// Authenticated blocking HTTP transport for a single `/graphql` endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    token: String,
}

impl HttpTransport {
    /// Build a transport for `<base_url>/graphql` using a bearer `token`.
    ///
    /// # Errors
    ///
    /// Returns `GraphQlError::Request` if the HTTP client cannot be constructed.
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self, GraphQlError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint_for(base_url),
            token: token.to_owned(),
        })
    }

    /// The full GraphQL endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &GraphQlRequest<'_>) -> Result<Map<String, Value>, GraphQlError> {
        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(request)
            .send()?;

        let status = response.status();
        debug!(
            endpoint = %self.endpoint,
            status = status.as_u16(),
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "graphql round trip"
        );

        if !status.is_success() {
            return Err(GraphQlError::Status {
                status: status.as_u16(),
                endpoint: self.endpoint.clone(),
            });
        }

        let text = response.text()?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Derive the GraphQL endpoint from a server base URL.
#[must_use]
pub fn endpoint_for(base_url: &str) -> String {
    format!("{}/graphql", base_url.trim_end_matches('/'))
}
