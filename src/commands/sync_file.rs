/// `sync-file` command: create or update a project page from a local file.
use crate::cli::OutputCtx;
use crate::cli::args::SyncFileArgs;
use crate::cli::output::write_sync;
use crate::graphql::Transport;
use crate::wiki::{WikiClient, WikiError, sync_file_to_wiki};

/// Run `wikijs sync-file`.
///
/// # Errors
///
/// Returns `WikiError` if the source file is missing or a request fails.
pub fn run<T: Transport>(
    args: &SyncFileArgs,
    client: &WikiClient<T>,
    ctx: &OutputCtx,
) -> Result<(), WikiError> {
    let outcome = sync_file_to_wiki(
        client,
        &args.project,
        &args.source,
        &args.target,
        args.title.as_deref(),
    )?;
    write_sync(&outcome, ctx);
    Ok(())
}
