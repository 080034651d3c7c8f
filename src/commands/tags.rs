/// `tags` command: list all tags.
use crate::cli::OutputCtx;
use crate::cli::output::write_tags;
use crate::graphql::Transport;
use crate::wiki::{WikiClient, WikiError};

/// Run `wikijs tags`.
///
/// # Errors
///
/// Returns `WikiError` on transport or server failure.
pub fn run<T: Transport>(client: &WikiClient<T>, ctx: &OutputCtx) -> Result<(), WikiError> {
    let tags = client.list_tags()?;
    write_tags(&tags, ctx);
    Ok(())
}
