/// Mutation inputs: new-page fields with server defaults, and partial updates.
use serde::Serialize;

use crate::types::Page;

/// Locale used when none is given.
pub const DEFAULT_LOCALE: &str = "zh";

/// Editor used when none is given.
pub const DEFAULT_EDITOR: &str = "markdown";

/// Fields for `pages.create`. Serializes directly into the mutation variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPage {
    pub path: String,
    pub title: String,
    pub content: String,
    pub description: String,
    pub editor: String,
    pub locale: String,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub is_private: bool,
}

impl NewPage {
    /// A published, public markdown page in the default locale with no tags.
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            content: content.into(),
            description: String::new(),
            editor: DEFAULT_EDITOR.to_owned(),
            locale: DEFAULT_LOCALE.to_owned(),
            tags: Vec::new(),
            is_published: true,
            is_private: false,
        }
    }
}

/// A partial update. `None` means "keep the current value"; `Some` replaces it,
/// so `Some(String::new())` clears a description and `Some(vec![])` clears tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageUpdate {
    pub content: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Fully-populated variables for `pages.update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateVariables {
    pub id: i64,
    pub content: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl PageUpdate {
    /// Fill every omitted field from `existing`.
    #[must_use]
    pub fn merge(&self, existing: &Page) -> UpdateVariables {
        UpdateVariables {
            id: existing.id,
            content: self
                .content
                .clone()
                .unwrap_or_else(|| existing.content.clone().unwrap_or_default()),
            title: self.title.clone().unwrap_or_else(|| existing.title.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| existing.description.clone().unwrap_or_default()),
            tags: self.tags.clone().unwrap_or_else(|| existing.tag_codes()),
        }
    }
}
