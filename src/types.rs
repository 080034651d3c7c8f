/// Shared serializable types: the remote data model and CLI output envelopes.
///
/// Field names follow the Wiki.js GraphQL schema (camelCase on the wire), so
/// these types deserialize server payloads directly and re-serialize them
/// unchanged for `--json` output.
use serde::{Deserialize, Deserializer, Serialize};

/// Decode a nullable server string, mapping null (or absence) to `""`.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A documentation page as returned by the server.
///
/// Which fields are populated depends on the query: list results carry no
/// `content` or `tags`, single-page fetches carry everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Numeric page id.
    pub id: i64,
    /// Hierarchical path, e.g. `projects/atlas/setup`.
    pub path: String,
    /// Page locale (e.g. `zh`, `en`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Display title. The server allows null here; it decodes as `""`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Short description; may be null on the server.
    #[serde(default)]
    pub description: Option<String>,
    /// Source body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Editor/content type tag (e.g. `markdown`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Creation timestamp (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Tags attached to the page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<PageTag>,
}

impl Page {
    /// Tag codes attached to this page, in server order.
    #[must_use]
    pub fn tag_codes(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.tag.clone()).collect()
    }
}

/// A tag as embedded in a single-page fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTag {
    /// Short tag code.
    pub tag: String,
    /// Optional display title.
    #[serde(default)]
    pub title: Option<String>,
}

/// A tag from the global tag list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub tag: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// One hit from a full-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Page id. The search index reports it as a string.
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub path: String,
    pub locale: String,
}

/// Full-text search response: hits plus aggregate count and suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<SearchHit>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub total_hits: u64,
}

/// Business-level outcome reported by every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseResult {
    /// Whether the server accepted the mutation.
    pub succeeded: bool,
    /// Server error code; `0` on success.
    #[serde(default)]
    pub error_code: i64,
    /// Machine-readable outcome slug (e.g. `success`, `PageDuplicateCreate`).
    #[serde(default)]
    pub slug: String,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Minimal page reference returned by create/update mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRef {
    pub id: i64,
    pub path: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Result of `create` or `update`: the response result plus the touched page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationOutcome {
    pub response_result: ResponseResult,
    /// Null when the mutation was rejected.
    #[serde(default)]
    pub page: Option<PageRef>,
}

impl MutationOutcome {
    /// Whether the server accepted the mutation.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.response_result.succeeded
    }
}

/// Which branch the sync helper took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncAction {
    Created,
    Updated,
}

impl std::fmt::Display for SyncAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => f.write_str("Created"),
            Self::Updated => f.write_str("Updated"),
        }
    }
}

/// Outcome of syncing one local file to one remote page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncOutcome {
    pub action: SyncAction,
    pub result: MutationOutcome,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `WikiError`.
    #[must_use]
    pub fn from_wiki_error(err: &crate::wiki::WikiError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
