//! Gitignore-aware discovery of source files to index.
//!
//! Uses the `ignore` crate walker:
//! - `.gitignore` is honored even when the project is not a git checkout
//! - hidden files and directories are skipped (this also keeps `.semroute/` out)
//! - `node_modules` is always skipped

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::IndexError;

const ALWAYS_SKIPPED_DIRS: &[&str] = &["node_modules"];

/// List files under `project_root` whose extension is one of `extensions`,
/// sorted by path.
///
/// Entries the walker cannot read are logged and skipped.
#[must_use]
pub fn scan_source_files(project_root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(project_root);
    builder.require_git(false);
    builder.filter_entry(|entry| {
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        !(is_dir && ALWAYS_SKIPPED_DIRS.contains(&&*entry.file_name().to_string_lossy()))
    });

    let mut files: Vec<PathBuf> = builder
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!(%error, "skipping unreadable walk entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(ignore::DirEntry::into_path)
        .filter(|path| has_extension(path, extensions))
        .collect();
    files.sort();
    files
}

/// [`scan_source_files`] on the blocking pool.
///
/// # Errors
///
/// Returns [`IndexError::Task`] if the blocking task fails to complete.
pub async fn scan_source_files_async(
    project_root: &Path,
    extensions: &[String],
) -> Result<Vec<PathBuf>, IndexError> {
    let root = project_root.to_path_buf();
    let extensions = extensions.to_vec();
    tokio::task::spawn_blocking(move || scan_source_files(&root, &extensions))
        .await
        .map_err(|e| IndexError::Task(e.to_string()))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

/// `root`-relative path with `/` separators, used as a stable index key.
#[must_use]
pub fn relative_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
