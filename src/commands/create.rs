/// `create` command: create a page under a project.
use super::resolve_content;
use crate::cli::OutputCtx;
use crate::cli::args::CreateArgs;
use crate::cli::output::write_json;
use crate::graphql::Transport;
use crate::wiki::{NewPage, WikiClient, WikiError, project_path, project_tag};

/// Run `wikijs create`.
///
/// # Errors
///
/// Returns `WikiError::MissingContent` when neither `--content` nor `--file`
/// yields text, or any file/transport/server error.
pub fn run<T: Transport>(
    args: &CreateArgs,
    client: &WikiClient<T>,
    ctx: &OutputCtx,
) -> Result<(), WikiError> {
    let page = build_page(args)?;
    let outcome = client.create_page(&page)?;
    write_json(&outcome, ctx);
    Ok(())
}

fn build_page(args: &CreateArgs) -> Result<NewPage, WikiError> {
    let content = resolve_content(args.content.as_deref(), args.file.as_deref())?
        .filter(|c| !c.is_empty())
        .ok_or(WikiError::MissingContent)?;

    let mut tags = args.tags.clone();
    let tag = project_tag(&args.project);
    if !tags.contains(&tag) {
        tags.push(tag);
    }

    Ok(NewPage {
        description: args.description.clone(),
        editor: args.editor.clone(),
        locale: args.locale.clone(),
        tags,
        is_published: !args.unpublished,
        is_private: args.private,
        ..NewPage::new(project_path(&args.project, &args.path), args.title.as_str(), content)
    })
}
