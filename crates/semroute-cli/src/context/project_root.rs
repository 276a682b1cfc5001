use std::path::{Path, PathBuf};

use anyhow::Context;
use semroute_config::PROJECT_DIR;

/// Project root for this invocation.
///
/// An explicit `--project` may name the root itself or its `.semroute`
/// directory and must exist. Without one, the nearest ancestor of the working
/// directory holding `.semroute` is used, else the working directory.
pub fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    let Some(given) = project_override else {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        return Ok(find_project_root(&cwd).unwrap_or(cwd));
    };

    let given = Path::new(given);
    let root = if given.ends_with(PROJECT_DIR) {
        given
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    } else {
        given
    };
    anyhow::ensure!(
        root.is_dir(),
        "--project '{}' is not an existing directory",
        given.display()
    );
    Ok(root.to_path_buf())
}

/// Walk upwards from `start` until a `.semroute` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(PROJECT_DIR).is_dir() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}
