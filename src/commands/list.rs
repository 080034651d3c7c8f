/// `list` command: list pages, optionally within one project.
use crate::cli::OutputCtx;
use crate::cli::args::ListArgs;
use crate::cli::output::write_page_list;
use crate::graphql::Transport;
use crate::wiki::{WikiClient, WikiError};

/// Run `wikijs list`.
///
/// # Errors
///
/// Returns `WikiError` on transport or server failure.
pub fn run<T: Transport>(
    args: &ListArgs,
    client: &WikiClient<T>,
    ctx: &OutputCtx,
) -> Result<(), WikiError> {
    let pages = client.list_pages(args.project.as_deref(), args.limit)?;
    write_page_list(&pages, ctx);
    Ok(())
}
