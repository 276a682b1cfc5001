//! `.meta.json` change-detection store kept in the index root.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::IndexError;

pub const META_FILENAME: &str = ".meta.json";

/// Last indexed state of one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaEntry {
    /// SHA-256 of the file content at the time it was indexed.
    pub hash: String,
    pub skill_doc: String,
    pub last_updated: DateTime<Utc>,
}

/// Relative source path (`/`-separated) → entry.
pub type Meta = BTreeMap<String, MetaEntry>;

/// Lowercase hex SHA-256 of a file's text.
#[must_use]
pub fn content_hash(code: &str) -> String {
    format!("{:x}", Sha256::digest(code.as_bytes()))
}

/// Load the meta store; a missing file is an empty store.
///
/// # Errors
///
/// Returns [`IndexError::Io`] on read failure other than not-found, or
/// [`IndexError::Meta`] if the file is not valid meta JSON.
pub async fn load_meta(index_root: &Path) -> Result<Meta, IndexError> {
    let path = index_root.join(META_FILENAME);
    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Meta::new()),
        Err(e) => return Err(IndexError::io(path, e)),
    };
    serde_json::from_str(&content).map_err(|source| IndexError::Meta { path, source })
}

/// Write the meta store as pretty JSON, creating the index root if needed.
///
/// # Errors
///
/// Returns [`IndexError::Io`] if the directory or file cannot be written.
pub async fn save_meta(index_root: &Path, meta: &Meta) -> Result<(), IndexError> {
    tokio::fs::create_dir_all(index_root)
        .await
        .map_err(|e| IndexError::io(index_root, e))?;
    let path = index_root.join(META_FILENAME);
    let content = serde_json::to_string_pretty(meta)
        .map_err(|source| IndexError::Meta {
            path: path.clone(),
            source,
        })?;
    tokio::fs::write(&path, content)
        .await
        .map_err(|e| IndexError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(hash: &str) -> MetaEntry {
        MetaEntry {
            hash: hash.into(),
            skill_doc: "# Skill Block".into(),
            last_updated: DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[tokio::test]
    async fn missing_meta_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_meta(dir.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested/index");
        let mut meta = Meta::new();
        meta.insert("src/a.cpp".into(), entry("abc"));

        save_meta(&root, &meta).await.unwrap();
        assert_eq!(load_meta(&root).await.unwrap(), meta);
    }

    #[tokio::test]
    async fn uses_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut meta = Meta::new();
        meta.insert("a.h".into(), entry("h1"));
        save_meta(dir.path(), &meta).await.unwrap();

        let raw = std::fs::read_to_string(dir.path().join(META_FILENAME)).unwrap();
        assert!(raw.contains("\"skillDoc\""));
        assert!(raw.contains("\"lastUpdated\""));
    }

    #[tokio::test]
    async fn corrupt_meta_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(META_FILENAME), "{not json").unwrap();
        assert!(matches!(
            load_meta(dir.path()).await,
            Err(IndexError::Meta { .. })
        ));
    }

    #[test]
    fn content_hash_is_sha256_hex() {
        assert_eq!(
            content_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
