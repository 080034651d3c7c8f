/// `update` command: partially update an existing page.
use super::resolve_content;
use crate::cli::OutputCtx;
use crate::cli::args::UpdateArgs;
use crate::cli::output::write_json;
use crate::graphql::Transport;
use crate::wiki::{PageUpdate, WikiClient, WikiError};

/// Run `wikijs update`. Flags that are not given keep their current value.
///
/// # Errors
///
/// Returns `WikiError::NotFound` if the page does not exist, or any
/// file/transport/server error.
pub fn run<T: Transport>(
    args: &UpdateArgs,
    client: &WikiClient<T>,
    ctx: &OutputCtx,
) -> Result<(), WikiError> {
    let update = build_update(args)?;
    let outcome = client.update_page(args.id, &update)?;
    write_json(&outcome, ctx);
    Ok(())
}

fn build_update(args: &UpdateArgs) -> Result<PageUpdate, WikiError> {
    Ok(PageUpdate {
        content: resolve_content(args.content.as_deref(), args.file.as_deref())?,
        title: args.title.clone(),
        description: args.description.clone(),
        tags: args.tags.clone(),
    })
}
