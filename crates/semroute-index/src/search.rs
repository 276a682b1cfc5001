//! Keyword search over the Markdown skill documents in an index root.
//!
//! Scoring per document:
//! - `+3` when the lowercased query occurs in the title
//! - `+1` per non-overlapping occurrence in the lowercased content
//!
//! Results are sorted by score, highest first; ties keep path order.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use semroute_core::SkillSearchResult;

use crate::scan::relative_key;
use crate::IndexError;

/// Characters of document text kept in each result's preview.
pub const PREVIEW_CHARS: usize = 240;

const TITLE_BONUS: u32 = 3;

/// Rank every skill document under `index_root` against `query`.
///
/// An empty query scores every document 0.
///
/// # Errors
///
/// Returns [`IndexError::Task`] if the directory walk fails to complete, or
/// [`IndexError::Io`] if a document cannot be read.
pub async fn search_skills(
    index_root: &Path,
    query: &str,
) -> Result<Vec<SkillSearchResult>, IndexError> {
    let docs = list_skill_docs(index_root).await?;
    let needle = query.to_lowercase();

    let mut results = Vec::with_capacity(docs.len());
    for path in docs {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| IndexError::io(&path, e))?;
        let relative = relative_key(index_root, &path);
        results.push(score_document(&relative, &content, &needle));
    }

    results.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(results)
}

/// Score one document; `needle` must already be lowercased.
#[must_use]
pub fn score_document(relative_path: &str, content: &str, needle: &str) -> SkillSearchResult {
    let first_line = content.split('\n').next().unwrap_or_default();
    let title = extract_title(first_line, relative_path);

    let mut score = 0;
    if !needle.is_empty() {
        if title.to_lowercase().contains(needle) {
            score += TITLE_BONUS;
        }
        let occurrences = content.to_lowercase().matches(needle).count();
        score += u32::try_from(occurrences).unwrap_or(u32::MAX);
    }

    SkillSearchResult {
        path: relative_path.to_string(),
        score,
        title,
        preview: content.chars().take(PREVIEW_CHARS).collect(),
    }
}

fn extract_title(first_line: &str, fallback: &str) -> String {
    first_line
        .trim()
        .strip_prefix("# ")
        .map_or_else(|| fallback.to_string(), |title| title.trim().to_string())
}

async fn list_skill_docs(index_root: &Path) -> Result<Vec<PathBuf>, IndexError> {
    let root = index_root.to_path_buf();
    tokio::task::spawn_blocking(move || {
        let mut builder = WalkBuilder::new(&root);
        builder.standard_filters(false).hidden(true);
        let mut docs: Vec<PathBuf> = builder
            .build()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .map(ignore::DirEntry::into_path)
            .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
            .collect();
        docs.sort();
        docs
    })
    .await
    .map_err(|e| IndexError::Task(e.to_string()))
}
