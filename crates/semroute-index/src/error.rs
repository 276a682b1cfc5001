//! Index error types for semroute-index.

use std::path::PathBuf;

/// Errors from building, updating, or searching the skill index.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Filesystem failure on a specific path.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `.meta.json` exists but is not valid meta JSON.
    #[error("invalid meta file {}: {source}", path.display())]
    Meta {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A blocking directory walk panicked or was cancelled.
    #[error("walk task failed: {0}")]
    Task(String),
}

impl IndexError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
