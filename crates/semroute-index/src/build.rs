//! Full and incremental skill index builds.
//!
//! Each indexed source file `dir/name.ext` gets a skill document at
//! `<out_dir>/domains/dir/name_api.md`. The meta store records the content
//! hash so `update` only rewrites documents for changed files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Utc;
use semroute_config::IndexConfig;
use semroute_core::IndexSummary;

use crate::meta::{Meta, MetaEntry, content_hash, load_meta, save_meta};
use crate::scan::{relative_key, scan_source_files_async};
use crate::summarize::summarize_file;
use crate::IndexError;

/// Location of the skill document for a `/`-separated relative source path.
#[must_use]
pub fn skill_doc_path(out_dir: &Path, relative: &str) -> PathBuf {
    let relative = Path::new(relative);
    let stem = relative
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut target = out_dir.join("domains");
    if let Some(parent) = relative.parent() {
        target.push(parent);
    }
    target.join(format!("{stem}_api.md"))
}

/// Index builder for one project.
#[derive(Debug, Clone)]
pub struct Indexer {
    project_root: PathBuf,
    out_dir: PathBuf,
    extensions: Vec<String>,
}

impl Indexer {
    /// Indexer scanning the default `[index]` extensions.
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            out_dir: out_dir.into(),
            extensions: IndexConfig::default().extensions,
        }
    }

    /// Indexer for an `[index]` section; a relative `out_dir` resolves
    /// against `project_root`.
    #[must_use]
    pub fn from_config(project_root: impl Into<PathBuf>, config: &IndexConfig) -> Self {
        let project_root = project_root.into();
        let out_dir = project_root.join(&config.out_dir);
        Self::new(project_root, out_dir).with_extensions(config.extensions.clone())
    }

    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Summarize every scanned file and replace the meta store.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if the scan fails or documents/meta cannot be written.
    pub async fn build(&self) -> Result<IndexSummary, IndexError> {
        self.run(Meta::new()).await
    }

    /// Re-summarize only files whose content hash changed since the last run
    /// and forget files that no longer exist.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if the meta store is corrupt, the scan fails, or
    /// documents/meta cannot be written.
    pub async fn update(&self) -> Result<IndexSummary, IndexError> {
        let meta = load_meta(&self.out_dir).await?;
        self.run(meta).await
    }

    async fn run(&self, mut meta: Meta) -> Result<IndexSummary, IndexError> {
        let files = scan_source_files_async(&self.project_root, &self.extensions).await?;
        let mut summary = IndexSummary::default();
        let mut seen = HashSet::with_capacity(files.len());

        for path in files {
            summary.scanned += 1;
            let key = relative_key(&self.project_root, &path);
            seen.insert(key.clone());

            let bytes = match tokio::fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "skipping unreadable source file");
                    continue;
                }
            };
            // Invalid UTF-8 is decoded lossily, never skipped.
            let code = String::from_utf8_lossy(&bytes);

            let hash = content_hash(&code);
            if meta.get(&key).is_some_and(|entry| entry.hash == hash) {
                summary.unchanged += 1;
                continue;
            }

            let skill_doc = summarize_file(&code, &key);
            self.write_doc(&key, &skill_doc).await?;
            meta.insert(
                key,
                MetaEntry {
                    hash,
                    skill_doc,
                    last_updated: Utc::now(),
                },
            );
            summary.written += 1;
        }

        let stale: Vec<String> = meta
            .keys()
            .filter(|key| !seen.contains(*key))
            .cloned()
            .collect();
        for key in stale {
            meta.remove(&key);
            let doc = skill_doc_path(&self.out_dir, &key);
            if let Err(error) = tokio::fs::remove_file(&doc).await {
                tracing::debug!(path = %doc.display(), %error, "stale skill doc not removed");
            }
            summary.removed += 1;
        }

        save_meta(&self.out_dir, &meta).await?;
        tracing::info!(
            scanned = summary.scanned,
            written = summary.written,
            unchanged = summary.unchanged,
            removed = summary.removed,
            out_dir = %self.out_dir.display(),
            "skill index updated"
        );
        Ok(summary)
    }

    async fn write_doc(&self, key: &str, skill_doc: &str) -> Result<(), IndexError> {
        let target = skill_doc_path(&self.out_dir, key);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| IndexError::io(parent, e))?;
        }
        tokio::fs::write(&target, skill_doc)
            .await
            .map_err(|e| IndexError::io(target, e))
    }
}

/// Build the index for `project_root` into `out_dir` with default extensions.
///
/// # Errors
///
/// See [`Indexer::build`].
pub async fn build_index(project_root: &Path, out_dir: &Path) -> Result<IndexSummary, IndexError> {
    Indexer::new(project_root, out_dir).build().await
}

/// Incrementally update the index for `project_root` in `out_dir`.
///
/// # Errors
///
/// See [`Indexer::update`].
pub async fn update_index(project_root: &Path, out_dir: &Path) -> Result<IndexSummary, IndexError> {
    Indexer::new(project_root, out_dir).update().await
}
