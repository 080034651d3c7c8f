/// Wiki domain layer: typed client, mutation inputs, project paths, file sync.
pub mod client;
pub mod errors;
pub mod input;
pub mod project;
pub mod queries;
pub mod sync;

pub use client::{DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT, WikiClient};
pub use errors::WikiError;
pub use input::{DEFAULT_EDITOR, DEFAULT_LOCALE, NewPage, PageUpdate};
pub use project::{project_path, project_tag};
pub use sync::{read_source, sync_file_to_wiki};
