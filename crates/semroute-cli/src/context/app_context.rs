use std::path::PathBuf;

use anyhow::Context;
use semroute_config::SemrouteConfig;
use semroute_extract::{Extractor, truncate::TruncateLimits};
use semroute_index::Indexer;

/// Resolved project root and configuration shared by command handlers.
#[derive(Debug)]
pub struct AppContext {
    pub project_root: PathBuf,
    pub config: SemrouteConfig,
}

impl AppContext {
    /// Load `<project_root>/.env` if present, then the layered configuration.
    pub fn init(project_root: PathBuf) -> anyhow::Result<Self> {
        let config = SemrouteConfig::load_with_dotenv(&project_root)
            .context("failed to load semroute configuration")?;
        if !config.llm.is_configured() {
            tracing::debug!("LLM not configured; briefs use the fallback description");
        }
        Ok(Self {
            project_root,
            config,
        })
    }

    #[must_use]
    pub const fn extractor(&self) -> Extractor {
        Extractor::new(TruncateLimits {
            max_lines: self.config.extract.max_lines,
            max_chars: self.config.extract.max_chars,
        })
    }

    #[must_use]
    pub fn indexer(&self) -> Indexer {
        Indexer::from_config(&self.project_root, &self.config.index)
    }

    /// Directory the indexer writes to and search reads from.
    #[must_use]
    pub fn index_dir(&self) -> PathBuf {
        self.indexer().out_dir().to_path_buf()
    }
}
