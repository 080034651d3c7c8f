/// Typed client: one method per remote page/tag operation.
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::errors::WikiError;
use super::input::{NewPage, PageUpdate};
use super::project::filter_by_project;
use super::queries;
use crate::config::Config;
use crate::graphql::{self, HttpTransport, Transport};
use crate::types::{MutationOutcome, Page, ResponseResult, SearchResults, Tag};

/// Default page count for `list_pages`.
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// Default hit count for `search_pages`.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Wiki API client over any [`Transport`].
#[derive(Debug, Clone)]
pub struct WikiClient<T = HttpTransport> {
    transport: T,
}

impl WikiClient<HttpTransport> {
    /// Build an authenticated HTTP client from validated settings.
    ///
    /// # Errors
    ///
    /// Returns `WikiError::GraphQl` if the HTTP client cannot be constructed.
    pub fn connect(config: &Config) -> Result<Self, WikiError> {
        let transport = HttpTransport::new(&config.base_url, &config.token, config.timeout)?;
        debug!(endpoint = transport.endpoint(), "wiki client ready");
        Ok(Self::new(transport))
    }
}

impl<T: Transport> WikiClient<T> {
    /// Wrap an existing transport.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    #[cfg(test)]
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run a raw GraphQL document and return its `data` payload.
    ///
    /// # Errors
    ///
    /// Returns `WikiError::GraphQl` on transport failure or server-reported errors.
    pub fn execute(&self, query: &str, variables: Option<&Value>) -> Result<Value, WikiError> {
        Ok(graphql::execute(&self.transport, query, variables)?)
    }

    /// List up to `limit` pages ordered by path, optionally restricted to one project.
    ///
    /// The project filter runs client-side, after the limit is applied.
    ///
    /// # Errors
    ///
    /// Returns `WikiError` on transport, server, or decoding failure.
    pub fn list_pages(&self, project: Option<&str>, limit: u32) -> Result<Vec<Page>, WikiError> {
        debug!(op = "list_pages", ?project, limit);
        let data = self.execute(queries::LIST_PAGES, Some(&json!({ "limit": limit })))?;
        let pages: Vec<Page> = extract(&data, "/pages/list")?.unwrap_or_default();
        Ok(match project {
            Some(p) => filter_by_project(pages, p),
            None => pages,
        })
    }

    /// Fetch one page by id; `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `WikiError` on transport, server, or decoding failure.
    pub fn get_page(&self, id: i64) -> Result<Option<Page>, WikiError> {
        debug!(op = "get_page", id);
        let data = self.execute(queries::GET_PAGE, Some(&json!({ "id": id })))?;
        extract(&data, "/pages/single")
    }

    /// Fetch one page by `(path, locale)`; `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `WikiError` on transport, server, or decoding failure.
    pub fn get_page_by_path(&self, path: &str, locale: &str) -> Result<Option<Page>, WikiError> {
        debug!(op = "get_page_by_path", path, locale);
        let vars = json!({ "path": path, "locale": locale });
        let data = self.execute(queries::GET_PAGE_BY_PATH, Some(&vars))?;
        extract(&data, "/pages/singleByPath")
    }

    /// Full-text search. The server has no limit argument, so at most `limit`
    /// hits are kept here; `total_hits` still reports the server's count.
    ///
    /// # Errors
    ///
    /// Returns `WikiError` on transport, server, or decoding failure.
    pub fn search_pages(&self, text: &str, limit: usize) -> Result<SearchResults, WikiError> {
        debug!(op = "search_pages", text, limit);
        let data = self.execute(queries::SEARCH_PAGES, Some(&json!({ "query": text })))?;
        let mut results: SearchResults = extract(&data, "/pages/search")?.unwrap_or_default();
        results.results.truncate(limit);
        Ok(results)
    }

    /// Create a page. Server-side rejections come back as `succeeded == false`.
    ///
    /// # Errors
    ///
    /// Returns `WikiError` only on transport, server, or decoding failure.
    pub fn create_page(&self, page: &NewPage) -> Result<MutationOutcome, WikiError> {
        debug!(op = "create_page", path = %page.path, locale = %page.locale);
        let vars = to_variables(page)?;
        let data = self.execute(queries::CREATE_PAGE, Some(&vars))?;
        let outcome: MutationOutcome = extract(&data, "/pages/create")?.unwrap_or_default();
        log_rejection("create_page", &outcome.response_result);
        Ok(outcome)
    }

    /// Update a page, filling omitted fields from its current state.
    ///
    /// # Errors
    ///
    /// Returns `WikiError::NotFound` if no page has this id, or any
    /// transport/server/decoding error.
    pub fn update_page(&self, id: i64, update: &PageUpdate) -> Result<MutationOutcome, WikiError> {
        let existing = self.get_page(id)?.ok_or(WikiError::NotFound { id })?;
        let merged = update.merge(&existing);
        debug!(op = "update_page", id, path = %existing.path);
        let vars = to_variables(&merged)?;
        let data = self.execute(queries::UPDATE_PAGE, Some(&vars))?;
        let outcome: MutationOutcome = extract(&data, "/pages/update")?.unwrap_or_default();
        log_rejection("update_page", &outcome.response_result);
        Ok(outcome)
    }

    /// Delete a page.
    ///
    /// # Errors
    ///
    /// Returns `WikiError` on transport, server, or decoding failure.
    pub fn delete_page(&self, id: i64) -> Result<ResponseResult, WikiError> {
        debug!(op = "delete_page", id);
        let data = self.execute(queries::DELETE_PAGE, Some(&json!({ "id": id })))?;
        let result: ResponseResult =
            extract(&data, "/pages/delete/responseResult")?.unwrap_or_default();
        log_rejection("delete_page", &result);
        Ok(result)
    }

    /// Ask the server to re-render a page's cached output.
    ///
    /// # Errors
    ///
    /// Returns `WikiError` on transport, server, or decoding failure.
    pub fn render_page(&self, id: i64) -> Result<ResponseResult, WikiError> {
        debug!(op = "render_page", id);
        let data = self.execute(queries::RENDER_PAGE, Some(&json!({ "id": id })))?;
        let result: ResponseResult =
            extract(&data, "/pages/render/responseResult")?.unwrap_or_default();
        log_rejection("render_page", &result);
        Ok(result)
    }

    /// List every tag known to the server.
    ///
    /// # Errors
    ///
    /// Returns `WikiError` on transport, server, or decoding failure.
    pub fn list_tags(&self) -> Result<Vec<Tag>, WikiError> {
        debug!(op = "list_tags");
        let data = self.execute(queries::LIST_TAGS, None)?;
        Ok(extract(&data, "/pages/tags")?.unwrap_or_default())
    }
}

/// Decode the value at a JSON pointer; missing or null yields `None`.
fn extract<D: DeserializeOwned>(
    data: &Value,
    pointer: &'static str,
) -> Result<Option<D>, WikiError> {
    match data.pointer(pointer) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => serde_json::from_value(v.clone())
            .map(Some)
            .map_err(|source| WikiError::Decode { pointer, source }),
    }
}

fn to_variables<S: serde::Serialize>(input: &S) -> Result<Value, WikiError> {
    serde_json::to_value(input).map_err(|source| WikiError::Decode {
        pointer: "/variables",
        source,
    })
}

fn log_rejection(op: &str, result: &ResponseResult) {
    if !result.succeeded {
        warn!(
            op,
            error_code = result.error_code,
            slug = %result.slug,
            message = result.message.as_deref().unwrap_or(""),
            "server rejected mutation"
        );
    }
}
