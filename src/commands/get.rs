/// `get` command: show a page by id.
use crate::cli::OutputCtx;
use crate::cli::args::GetArgs;
use crate::cli::output::write_page;
use crate::graphql::Transport;
use crate::wiki::{WikiClient, WikiError};

/// Run `wikijs get`. A missing page prints the not-found text and succeeds.
///
/// # Errors
///
/// Returns `WikiError` on transport or server failure.
pub fn run<T: Transport>(
    args: &GetArgs,
    client: &WikiClient<T>,
    ctx: &OutputCtx,
) -> Result<(), WikiError> {
    let page = client.get_page(args.id)?;
    write_page(page.as_ref(), ctx);
    Ok(())
}
