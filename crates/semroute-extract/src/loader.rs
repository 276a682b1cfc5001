//! Best-effort source file loading.

use std::path::{Component, Path, PathBuf};

/// Join `file_path` under `project_root`.
///
/// Root and prefix components of `file_path` are dropped so an absolute
/// path is still resolved inside the project, matching plain string joining.
#[must_use]
pub fn resolve_source_path(project_root: &Path, file_path: &Path) -> PathBuf {
    let relative: PathBuf = file_path
        .components()
        .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)))
        .collect();
    project_root.join(relative)
}

/// Read a project file as UTF-8 text.
///
/// Any failure (missing file, permissions, invalid UTF-8) yields `None`.
pub async fn load_source(project_root: &Path, file_path: &Path) -> Option<String> {
    let full_path = resolve_source_path(project_root, file_path);
    match tokio::fs::read_to_string(&full_path).await {
        Ok(text) => Some(text),
        Err(error) => {
            tracing::debug!(path = %full_path.display(), %error, "source file unreadable");
            None
        }
    }
}
