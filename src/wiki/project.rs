/// Project namespacing: every project's pages live under `projects/<name>/`.
use crate::types::Page;

/// Root path of a project, e.g. `projects/atlas`.
#[must_use]
pub fn project_root(project: &str) -> String {
    format!("projects/{project}")
}

/// Full page path for a project-relative path.
#[must_use]
pub fn project_path(project: &str, relative: &str) -> String {
    format!("{}/{relative}", project_root(project))
}

/// Tag attached to pages created on behalf of a project.
#[must_use]
pub fn project_tag(project: &str) -> String {
    format!("project:{project}")
}

/// Keep only pages at the project root or below it.
///
/// A sibling project sharing a name prefix (`atlas2` vs `atlas`) is excluded.
#[must_use]
pub fn filter_by_project(pages: Vec<Page>, project: &str) -> Vec<Page> {
    let root = project_root(project);
    let prefix = format!("{root}/");
    pages
        .into_iter()
        .filter(|p| p.path == root || p.path.starts_with(&prefix))
        .collect()
}
