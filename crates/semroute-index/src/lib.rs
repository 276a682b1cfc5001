//! # semroute-index
//!
//! Skill index for a C/C++ project: one Markdown skill document per source
//! file, a `.meta.json` content-hash store for incremental updates, and a
//! keyword search over the generated documents.

pub mod build;
pub mod error;
pub mod meta;
pub mod scan;
pub mod search;
pub mod summarize;

pub use build::{Indexer, build_index, skill_doc_path, update_index};
pub use error::IndexError;
pub use meta::{META_FILENAME, Meta, MetaEntry, content_hash, load_meta, save_meta};
pub use scan::{relative_key, scan_source_files, scan_source_files_async};
pub use search::{PREVIEW_CHARS, score_document, search_skills};
pub use summarize::summarize_file;
