/// `get-by-path` command: show a page by path and locale.
use crate::cli::OutputCtx;
use crate::cli::args::GetByPathArgs;
use crate::cli::output::write_page;
use crate::graphql::Transport;
use crate::wiki::{WikiClient, WikiError};

/// Run `wikijs get-by-path`.
///
/// # Errors
///
/// Returns `WikiError` on transport or server failure.
pub fn run<T: Transport>(
    args: &GetByPathArgs,
    client: &WikiClient<T>,
    ctx: &OutputCtx,
) -> Result<(), WikiError> {
    let page = client.get_page_by_path(&args.path, &args.locale)?;
    write_page(page.as_ref(), ctx);
    Ok(())
}
