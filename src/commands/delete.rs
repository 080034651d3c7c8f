/// `delete` command: delete a page, confirming first unless `--force`.
use crate::cli::args::DeleteArgs;
use crate::cli::output::write_json;
use crate::cli::{OutputCtx, Prompt};
use crate::graphql::Transport;
use crate::types::ResponseResult;
use crate::wiki::{WikiClient, WikiError};

/// Run `wikijs delete`. Declining the prompt prints `Cancelled.` and succeeds.
///
/// # Errors
///
/// Returns `WikiError` on prompt, transport, or server failure.
pub fn run<T: Transport>(
    args: &DeleteArgs,
    client: &WikiClient<T>,
    prompt: &dyn Prompt,
    ctx: &OutputCtx,
) -> Result<(), WikiError> {
    match confirm_and_delete(args, client, prompt)? {
        Some(result) => write_json(&result, ctx),
        None => println!("Cancelled."),
    }
    Ok(())
}

/// Delete the page; `None` when the user declined.
///
/// Without `--force`, the page is fetched so the prompt can show its title
/// and path. If it does not exist there is nothing to confirm and the delete
/// is sent as-is, letting the server report the failure.
fn confirm_and_delete<T: Transport>(
    args: &DeleteArgs,
    client: &WikiClient<T>,
    prompt: &dyn Prompt,
) -> Result<Option<ResponseResult>, WikiError> {
    if !args.force {
        if let Some(page) = client.get_page(args.id)? {
            let question = format!("Delete page '{}' ({})?", page.title, page.path);
            if !prompt.confirm(&question)? {
                return Ok(None);
            }
        }
    }
    client.delete_page(args.id).map(Some)
}
