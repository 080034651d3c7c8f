/// Errors from the GraphQL wire layer.
use serde_json::Value;
use thiserror::Error;

/// Typed errors from a single GraphQL round trip.
#[derive(Debug, Error)]
pub enum GraphQlError {
    /// The request never produced a response (connect failure, timeout, TLS).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("Request failed: HTTP {status} from {endpoint}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Endpoint that was called.
        endpoint: String,
    },

    /// The response body carried a top-level `errors` field.
    #[error("GraphQL Error: {}", summarize(errors))]
    Api {
        /// Raw error objects as returned by the server.
        errors: Vec<Value>,
    },

    /// The response body was not a JSON object.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Join the `message` of each GraphQL error, falling back to the raw JSON.
fn summarize(errors: &[Value]) -> String {
    if errors.is_empty() {
        return "(empty error list)".to_owned();
    }
    errors
        .iter()
        .map(|e| match e.get("message").and_then(Value::as_str) {
            Some(msg) => msg.to_owned(),
            None => e.to_string(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}
