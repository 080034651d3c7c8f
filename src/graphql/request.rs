/// GraphQL request/response envelope and the `execute` round trip.
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::errors::GraphQlError;
use super::transport::Transport;

/// JSON body of a GraphQL POST: `{query, variables}`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    /// Query or mutation document.
    pub query: &'a str,
    /// Variables object; omitted from the body when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<&'a Value>,
}

/// Send one GraphQL document and return its `data` payload.
///
/// A top-level `errors` key always fails the call, even if `data` is also
/// present. A body without `data` yields `Value::Null`.
///
/// # Errors
///
/// Returns `GraphQlError` on transport failure or when the server reports errors.
pub fn execute<T: Transport + ?Sized>(
    transport: &T,
    query: &str,
    variables: Option<&Value>,
) -> Result<Value, GraphQlError> {
    let request = GraphQlRequest { query, variables };
    let body = transport.send(&request)?;
    into_data(body)
}

fn into_data(mut body: Map<String, Value>) -> Result<Value, GraphQlError> {
    if let Some(errors) = body.remove("errors") {
        let errors = match errors {
            Value::Array(list) => list,
            other => vec![other],
        };
        debug!(count = errors.len(), "server returned graphql errors");
        return Err(GraphQlError::Api { errors });
    }
    Ok(body.remove("data").unwrap_or(Value::Null))
}
