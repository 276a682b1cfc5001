//! Request and response records passed between semroute crates and emitted
//! as JSON by the `semroute` binary.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Locate a symbol's implementation inside one project file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImplementationRequest {
    /// Directory the file path is relative to.
    pub project_root: PathBuf,
    /// File containing the definition, relative to `project_root`.
    pub file_path: PathBuf,
    /// Declared signature of the symbol, e.g. `void Widget::draw() const`.
    pub signature: String,
}

/// Result of an implementation lookup.
///
/// `implementation` is `None` whenever no body could be extracted safely.
/// An empty body is `Some(String::new())`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImplementationResult {
    pub implementation: Option<String>,
}

/// A single ranked hit from the skill index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillSearchResult {
    /// Path of the skill document, relative to the index root.
    pub path: String,
    pub score: u32,
    pub title: String,
    /// Leading excerpt of the document.
    pub preview: String,
}

/// Response from `semroute search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillSearchResponse {
    pub query: String,
    pub results: Vec<SkillSearchResult>,
    pub total_results: u32,
}

/// Counters reported by an index build or incremental update.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexSummary {
    /// Source files found by the scan.
    pub scanned: u32,
    /// Skill documents (re)written.
    pub written: u32,
    /// Files skipped because their content hash did not change.
    pub unchanged: u32,
    /// Meta entries dropped for files that no longer exist.
    pub removed: u32,
}

/// Response from `semroute brief`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BriefResponse {
    pub module: String,
    pub signature: String,
    pub brief: String,
    /// Whether an implementation body was found and sent along.
    pub has_implementation: bool,
}
