/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod create;
pub mod delete;
pub mod get;
pub mod get_by_path;
pub mod list;
pub mod render;
pub mod search;
pub mod sync_file;
pub mod tags;
pub mod update;

use std::path::Path;

use crate::cli::args::Command;
use crate::cli::{OutputCtx, TerminalPrompt};
use crate::graphql::Transport;
use crate::wiki::{WikiClient, WikiError, read_source};

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `WikiError` on any command failure.
pub fn dispatch<T: Transport>(
    command: &Command,
    client: &WikiClient<T>,
    ctx: &OutputCtx,
) -> Result<(), WikiError> {
    match command {
        Command::List(args) => list::run(args, client, ctx),
        Command::Get(args) => get::run(args, client, ctx),
        Command::GetByPath(args) => get_by_path::run(args, client, ctx),
        Command::Search(args) => search::run(args, client, ctx),
        Command::Create(args) => create::run(args, client, ctx),
        Command::Update(args) => update::run(args, client, ctx),
        Command::Delete(args) => delete::run(args, client, &TerminalPrompt, ctx),
        Command::Render(args) => render::run(args, client, ctx),
        Command::SyncFile(args) => sync_file::run(args, client, ctx),
        Command::Tags => tags::run(client, ctx),
    }
}

/// Pick page content from `--file` (preferred) or `--content`.
///
/// # Errors
///
/// Returns `WikiError` if the file cannot be read.
pub fn resolve_content(
    inline: Option<&str>,
    file: Option<&Path>,
) -> Result<Option<String>, WikiError> {
    match file {
        Some(path) => read_source(path).map(Some),
        None => Ok(inline.map(str::to_owned)),
    }
}
