/// Errors from the wiki domain layer.
use std::path::PathBuf;

use thiserror::Error;

use crate::graphql::GraphQlError;

/// Errors that can occur while running a wiki command.
#[derive(Debug, Error)]
pub enum WikiError {
    /// No bearer token configured.
    #[error("WIKIJS_TOKEN not set. Export it or pass --token.")]
    MissingToken,

    /// An update targeted a page id that does not exist.
    #[error("Page {id} not found")]
    NotFound {
        /// The requested page id.
        id: i64,
    },

    /// A local source file does not exist.
    #[error("Source file not found: {}", path.display())]
    SourceNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// `create` was called without `--content` or `--file`.
    #[error("--content or --file required")]
    MissingContent,

    /// Reading a local file failed for a reason other than absence.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The interactive confirmation prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// The server payload did not match the expected shape.
    #[error("Unexpected response shape at '{pointer}': {source}")]
    Decode {
        pointer: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An underlying GraphQL/transport error.
    #[error(transparent)]
    GraphQl(#[from] GraphQlError),
}

impl WikiError {
    /// Machine-readable code used in the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingToken => "missing_token",
            Self::NotFound { .. } => "page_not_found",
            Self::SourceNotFound { .. } => "file_not_found",
            Self::MissingContent => "missing_content",
            Self::Io { .. } => "io_error",
            Self::Prompt(_) => "prompt_failed",
            Self::Decode { .. } => "decode_error",
            Self::GraphQl(GraphQlError::Api { .. }) => "api_error",
            Self::GraphQl(_) => "transport_error",
        }
    }
}
