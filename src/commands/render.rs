/// `render` command: re-render a page's cached output.
use crate::cli::OutputCtx;
use crate::cli::args::RenderArgs;
use crate::cli::output::write_json;
use crate::graphql::Transport;
use crate::wiki::{WikiClient, WikiError};

/// Run `wikijs render`.
///
/// # Errors
///
/// Returns `WikiError` on transport or server failure.
pub fn run<T: Transport>(
    args: &RenderArgs,
    client: &WikiClient<T>,
    ctx: &OutputCtx,
) -> Result<(), WikiError> {
    let result = client.render_page(args.id)?;
    write_json(&result, ctx);
    Ok(())
}
