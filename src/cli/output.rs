/// Output formatting: text tables and blocks for reads, JSON for mutations.
use std::fmt::Write as _;
use std::io::Write;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{ErrorOutput, Page, SearchResults, SyncOutcome, Tag};

/// Shown by `format_page_list` for an empty list.
pub const NO_PAGES: &str = "No pages found.";

/// Shown by `format_page_detail` for a missing page.
pub const PAGE_NOT_FOUND: &str = "Page not found.";

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all writers.
#[derive(Debug, Clone, Copy)]
pub struct OutputCtx {
    pub format: OutputFormat,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
        }
    }

    /// Whether reads should print JSON instead of text.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format != OutputFormat::Text
    }
}

// --- Pure formatters ---

/// Render pages as an id/path/title table.
#[must_use]
pub fn format_page_list(pages: &[Page]) -> String {
    if pages.is_empty() {
        return NO_PAGES.to_owned();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["ID", "PATH", "TITLE"]);
    for page in pages {
        let id = page.id.to_string();
        table.add_row([id.as_str(), page.path.as_str(), page.title.as_str()]);
    }
    table.to_string()
}

/// Render one page's metadata followed by its full content.
#[must_use]
pub fn format_page_detail(page: Option<&Page>) -> String {
    let Some(page) = page else {
        return PAGE_NOT_FOUND.to_owned();
    };
    let mut out = String::new();
    let _ = writeln!(out, "ID: {}", page.id);
    let _ = writeln!(out, "Path: {}", page.path);
    if let Some(locale) = &page.locale {
        let _ = writeln!(out, "Locale: {locale}");
    }
    let _ = writeln!(out, "Title: {}", page.title);
    let _ = writeln!(out, "Description: {}", page.description.as_deref().unwrap_or(""));
    let _ = writeln!(out, "Content Type: {}", page.content_type.as_deref().unwrap_or(""));
    let _ = writeln!(out, "Created: {}", page.created_at.as_deref().unwrap_or(""));
    let _ = writeln!(out, "Updated: {}", page.updated_at.as_deref().unwrap_or(""));
    if !page.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", page.tag_codes().join(", "));
    }
    let _ = writeln!(out, "\n--- Content ---\n");
    out.push_str(page.content.as_deref().unwrap_or(""));
    out
}

/// Render search hits as `[id] path: title` lines.
#[must_use]
pub fn format_search_results(results: &SearchResults) -> String {
    let mut out = format!("Found {} results:\n", results.total_hits);
    for hit in &results.results {
        let _ = write!(out, "\n  [{}] {}: {}", hit.id, hit.path, hit.title);
    }
    if !results.suggestions.is_empty() {
        let _ = write!(out, "\n\nDid you mean: {}", results.suggestions.join(", "));
    }
    out
}

/// Render tags as `tag: title` lines.
#[must_use]
pub fn format_tags(tags: &[Tag]) -> String {
    tags.iter()
        .map(|t| format!("  {}: {}", t.tag, t.title.as_deref().unwrap_or("")))
        .collect::<Vec<_>>()
        .join("\n")
}

// --- Writers ---

/// Write a page list to stdout.
pub fn write_page_list(pages: &[Page], ctx: &OutputCtx) {
    if ctx.is_json() {
        write_json(pages, ctx);
    } else {
        println!("{}", format_page_list(pages));
    }
}

/// Write a single page (or the not-found sentinel) to stdout.
pub fn write_page(page: Option<&Page>, ctx: &OutputCtx) {
    if ctx.is_json() {
        write_json(&page, ctx);
    } else {
        println!("{}", format_page_detail(page));
    }
}

/// Write search results to stdout.
pub fn write_search_results(results: &SearchResults, ctx: &OutputCtx) {
    if ctx.is_json() {
        write_json(results, ctx);
    } else {
        println!("{}", format_search_results(results));
    }
}

/// Write the tag list to stdout.
pub fn write_tags(tags: &[Tag], ctx: &OutputCtx) {
    if ctx.is_json() {
        write_json(tags, ctx);
    } else if !tags.is_empty() {
        println!("{}", format_tags(tags));
    }
}

/// Write a sync outcome: a status line then the server result in text mode.
pub fn write_sync(outcome: &SyncOutcome, ctx: &OutputCtx) {
    if ctx.is_json() {
        write_json(outcome, ctx);
    } else {
        println!("{} page successfully.", outcome.action);
        write_json(&outcome.result, ctx);
    }
}

/// Write a mutation result as JSON: compact with `--output compact`, pretty otherwise.
pub fn write_json<T: Serialize + ?Sized>(value: &T, ctx: &OutputCtx) {
    let rendered = if ctx.format == OutputFormat::Compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    match rendered {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match resolve_format(format, json_flag) {
        OutputFormat::Json => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Compact => {
            let s = serde_json::to_string(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Text => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}
