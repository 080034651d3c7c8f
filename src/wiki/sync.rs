/// File-to-page sync: idempotent upsert of a local file under a project path.
use std::path::Path;

use tracing::info;

use super::client::WikiClient;
use super::errors::WikiError;
use super::input::{DEFAULT_LOCALE, NewPage, PageUpdate};
use super::project::{project_path, project_tag};
use crate::graphql::Transport;
use crate::types::{SyncAction, SyncOutcome};

/// Read a UTF-8 text file, distinguishing "does not exist" from other I/O errors.
///
/// # Errors
///
/// Returns `WikiError::SourceNotFound` if the file is absent, `WikiError::Io` otherwise.
pub fn read_source(path: &Path) -> Result<String, WikiError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            WikiError::SourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            WikiError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Sync `source` to `projects/<project>/<target_path>` in the default locale.
///
/// An existing page gets its content and title replaced (description and tags
/// are kept); otherwise a new page tagged `project:<project>` is created.
/// Running this twice with the same inputs creates once, then updates.
///
/// # Errors
///
/// Returns `WikiError` if the file cannot be read or any request fails.
pub fn sync_file_to_wiki<T: Transport>(
    client: &WikiClient<T>,
    project: &str,
    source: &Path,
    target_path: &str,
    title: Option<&str>,
) -> Result<SyncOutcome, WikiError> {
    let content = read_source(source)?;
    let full_path = project_path(project, target_path);

    let existing = client.get_page_by_path(&full_path, DEFAULT_LOCALE)?;

    let title = match title.filter(|t| !t.is_empty()) {
        Some(t) => t.to_owned(),
        None => derive_title(&content, target_path),
    };

    let (action, result) = if let Some(page) = existing {
        let update = PageUpdate {
            content: Some(content),
            title: Some(title),
            ..PageUpdate::default()
        };
        (SyncAction::Updated, client.update_page(page.id, &update)?)
    } else {
        let mut page = NewPage::new(full_path.as_str(), title, content);
        page.tags = vec![project_tag(project)];
        (SyncAction::Created, client.create_page(&page)?)
    };

    info!(%action, path = %full_path, succeeded = result.succeeded(), "synced file");
    Ok(SyncOutcome { action, result })
}

/// Title from the first `# ` heading, else the title-cased target path.
#[must_use]
pub fn derive_title(content: &str, target_path: &str) -> String {
    let heading = content
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .unwrap_or_default();
    if heading.is_empty() {
        title_case(&target_path.replace('-', " "))
    } else {
        heading.to_owned()
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
///
/// `guides/my-page` becomes `Guides/My-Page`.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::testing::{MemoryWiki, sample_page};
    use crate::types::PageTag;
    use std::io::Write;

    fn write_source(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_title_from_first_heading() {
        assert_eq!(derive_title("# Hello World\nbody", "ignored"), "Hello World");
    }

    #[test]
    fn test_title_skips_deeper_headings() {
        let content = "intro\n## Section\n# Real Title  \n# Second";
        assert_eq!(derive_title(content, "x"), "Real Title");
    }

    #[test]
    fn test_title_from_target_path() {
        assert_eq!(derive_title("no heading here", "my-page"), "My Page");
    }

    #[test]
    fn test_title_empty_heading_falls_back() {
        assert_eq!(derive_title("# \nbody", "release-notes"), "Release Notes");
    }

    #[test]
    fn test_title_crlf_heading() {
        assert_eq!(derive_title("# Windows\r\nbody", "x"), "Windows");
    }

    #[test]
    fn test_title_case_nested_path() {
        assert_eq!(title_case("guides/getting started"), "Guides/Getting Started");
        assert_eq!(title_case("API v2"), "Api V2");
    }

    #[test]
    fn test_sync_twice_creates_then_updates() {
        let client = WikiClient::new(MemoryWiki::new());
        let file = write_source("# Deploy Guide\n\nSteps.");

        let first = sync_file_to_wiki(&client, "atlas", file.path(), "deploy", None).unwrap();
        assert_eq!(first.action, SyncAction::Created);
        assert!(first.result.succeeded());

        let second = sync_file_to_wiki(&client, "atlas", file.path(), "deploy", None).unwrap();
        assert_eq!(second.action, SyncAction::Updated);
        assert!(second.result.succeeded());

        let pages = client.transport().pages();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].path, "projects/atlas/deploy");
        assert_eq!(pages[0].title, "Deploy Guide");
        assert_eq!(pages[0].tag_codes(), vec!["project:atlas".to_owned()]);
    }

    #[test]
    fn test_sync_update_keeps_description_and_tags() {
        let mut existing = sample_page(5, "projects/atlas/faq", "FAQ");
        existing.description = Some("Common questions".to_owned());
        existing.tags = vec![PageTag {
            tag: "support".to_owned(),
            title: None,
        }];
        let client = WikiClient::new(MemoryWiki::new().with_page(existing));
        let file = write_source("plain text");

        let outcome =
            sync_file_to_wiki(&client, "atlas", file.path(), "faq", Some("Questions")).unwrap();
        assert_eq!(outcome.action, SyncAction::Updated);

        let page = &client.transport().pages()[0];
        assert_eq!(page.title, "Questions");
        assert_eq!(page.content.as_deref(), Some("plain text"));
        assert_eq!(page.description.as_deref(), Some("Common questions"));
        assert_eq!(page.tag_codes(), vec!["support".to_owned()]);
        assert_eq!(
            client.transport().calls(),
            vec!["singleByPath", "single", "update"]
        );
    }

    #[test]
    fn test_sync_missing_source_sends_nothing() {
        let client = WikiClient::new(MemoryWiki::new());
        let err = sync_file_to_wiki(
            &client,
            "atlas",
            Path::new("/definitely/not/here.md"),
            "x",
            None,
        )
        .unwrap_err();
        assert!(matches!(err, WikiError::SourceNotFound { .. }));
        assert!(client.transport().calls().is_empty());
    }

    #[test]
    fn test_read_source_non_utf8_is_io_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(read_source(file.path()), Err(WikiError::Io { .. })));
    }
}
