/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_URL;

/// wikijs — manage Wiki.js documentation pages over GraphQL.
#[derive(Debug, Parser)]
#[command(
    name = "wikijs",
    about = "Create, read, update, delete, search and sync Wiki.js pages",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Wiki.js server base URL.
    #[arg(long, global = true, env = "WIKIJS_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// API bearer token.
    #[arg(long, global = true, env = "WIKIJS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds.
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        default_value_t = crate::graphql::DEFAULT_TIMEOUT.as_secs()
    )]
    pub timeout: u64,

    /// Output format for read commands and errors.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Log requests and timings to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Tables and text blocks for reads, pretty JSON for mutations.
    #[default]
    Text,
    /// Pretty-printed JSON for everything.
    Json,
    /// Single-line JSON for everything.
    Compact,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List pages, optionally within one project.
    List(ListArgs),
    /// Show a page by id.
    Get(GetArgs),
    /// Show a page by path and locale.
    GetByPath(GetByPathArgs),
    /// Full-text search.
    Search(SearchArgs),
    /// Create a page under a project.
    Create(CreateArgs),
    /// Update an existing page; omitted fields are kept.
    Update(UpdateArgs),
    /// Delete a page.
    Delete(DeleteArgs),
    /// Re-render a page's cached output.
    Render(RenderArgs),
    /// Create or update a project page from a local file.
    SyncFile(SyncFileArgs),
    /// List all tags.
    Tags,
}

/// Arguments for `wikijs list`.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Only pages under `projects/<PROJECT>`.
    #[arg(short, long)]
    pub project: Option<String>,

    /// Maximum number of pages to fetch.
    #[arg(short, long, value_name = "N", default_value_t = crate::wiki::DEFAULT_LIST_LIMIT)]
    pub limit: u32,
}

/// Arguments for `wikijs get`.
#[derive(Debug, Parser)]
pub struct GetArgs {
    /// Page id.
    #[arg(short, long)]
    pub id: i64,
}

/// Arguments for `wikijs get-by-path`.
#[derive(Debug, Parser)]
pub struct GetByPathArgs {
    /// Full page path, e.g. `projects/atlas/setup`.
    #[arg(short, long)]
    pub path: String,

    /// Page locale.
    #[arg(short, long, default_value = crate::wiki::DEFAULT_LOCALE)]
    pub locale: String,
}

/// Arguments for `wikijs search`.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Search text.
    #[arg(short, long)]
    pub query: String,

    /// Maximum number of hits to show.
    #[arg(long, value_name = "N", default_value_t = crate::wiki::DEFAULT_SEARCH_LIMIT)]
    pub limit: usize,
}

/// Arguments for `wikijs create`.
#[derive(Debug, Parser)]
pub struct CreateArgs {
    /// Project name; the page lands under `projects/<PROJECT>/`.
    #[arg(short, long)]
    pub project: String,

    /// Page path relative to the project.
    #[arg(long)]
    pub path: String,

    /// Page title.
    #[arg(short, long)]
    pub title: String,

    /// Inline page content.
    #[arg(short, long)]
    pub content: Option<String>,

    /// Read content from a file (wins over --content).
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Page description.
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Extra tags; `project:<PROJECT>` is always added.
    #[arg(long, num_args = 0..)]
    pub tags: Vec<String>,

    /// Page locale.
    #[arg(long, default_value = crate::wiki::DEFAULT_LOCALE)]
    pub locale: String,

    /// Editor / content type.
    #[arg(long, default_value = crate::wiki::DEFAULT_EDITOR)]
    pub editor: String,

    /// Create the page as private.
    #[arg(long)]
    pub private: bool,

    /// Create the page unpublished.
    #[arg(long)]
    pub unpublished: bool,
}

/// Arguments for `wikijs update`.
#[derive(Debug, Parser)]
pub struct UpdateArgs {
    /// Page id.
    #[arg(short, long)]
    pub id: i64,

    /// New inline content.
    #[arg(short, long)]
    pub content: Option<String>,

    /// Read new content from a file (wins over --content).
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// New title.
    #[arg(short, long)]
    pub title: Option<String>,

    /// New description (`""` clears it).
    #[arg(short, long)]
    pub description: Option<String>,

    /// Replace tags. A bare `--tags` clears them; omit to keep the current ones.
    #[arg(long, num_args = 0..)]
    pub tags: Option<Vec<String>>,
}

/// Arguments for `wikijs delete`.
#[derive(Debug, Parser)]
pub struct DeleteArgs {
    /// Page id.
    #[arg(short, long)]
    pub id: i64,

    /// Skip the confirmation prompt.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `wikijs render`.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    /// Page id.
    #[arg(short, long)]
    pub id: i64,
}

/// Arguments for `wikijs sync-file`.
#[derive(Debug, Parser)]
pub struct SyncFileArgs {
    /// Project name.
    #[arg(short, long)]
    pub project: String,

    /// Local source file.
    #[arg(short, long, value_name = "PATH")]
    pub source: PathBuf,

    /// Target page path relative to the project.
    #[arg(short, long)]
    pub target: String,

    /// Page title (defaults to the first `# ` heading, then the target path).
    #[arg(long)]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_update_tags_omitted_vs_empty() {
        let cli = Cli::try_parse_from(["wikijs", "update", "-i", "3"]).unwrap();
        let Command::Update(args) = cli.command else {
            panic!("expected update");
        };
        assert_eq!(args.tags, None);

        let cli = Cli::try_parse_from(["wikijs", "update", "-i", "3", "--tags"]).unwrap();
        let Command::Update(args) = cli.command else {
            panic!("expected update");
        };
        assert_eq!(args.tags, Some(Vec::new()));

        let cli = Cli::try_parse_from(["wikijs", "update", "-i", "3", "--tags", "a", "b"]).unwrap();
        let Command::Update(args) = cli.command else {
            panic!("expected update");
        };
        assert_eq!(args.tags, Some(vec!["a".to_owned(), "b".to_owned()]));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wikijs", "get-by-path", "-p", "home"]).unwrap();
        let Command::GetByPath(args) = cli.command else {
            panic!("expected get-by-path");
        };
        assert_eq!(args.locale, "zh");
        assert_eq!(cli.timeout, 30);
        assert_eq!(cli.output, OutputFormat::Text);
    }

    #[test]
    fn test_json_conflicts_with_output() {
        assert!(Cli::try_parse_from(["wikijs", "--json", "--output", "text", "tags"]).is_err());
    }
}
