/// `search` command: full-text search.
use crate::cli::OutputCtx;
use crate::cli::args::SearchArgs;
use crate::cli::output::write_search_results;
use crate::graphql::Transport;
use crate::wiki::{WikiClient, WikiError};

/// Run `wikijs search`.
///
/// # Errors
///
/// Returns `WikiError` on transport or server failure.
pub fn run<T: Transport>(
    args: &SearchArgs,
    client: &WikiClient<T>,
    ctx: &OutputCtx,
) -> Result<(), WikiError> {
    let results = client.search_pages(&args.query, args.limit)?;
    write_search_results(&results, ctx);
    Ok(())
}
