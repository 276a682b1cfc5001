//! # semroute-config
//!
//! Layered configuration loading for semroute using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SEMROUTE_*` prefix, `__` as separator)
//! 2. Project-level `.semroute/config.toml`
//! 3. User-level `~/.config/semroute/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SEMROUTE_LLM__API_KEY` -> `llm.api_key`,
//! `SEMROUTE_EXTRACT__MAX_LINES` -> `extract.max_lines`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use semroute_config::SemrouteConfig;
//!
//! let config = SemrouteConfig::load_with_dotenv(std::path::Path::new(".")).expect("config");
//! if config.llm.is_configured() {
//!     println!("model: {}", config.llm.model);
//! }
//! ```

mod error;
mod extract;
mod index;
mod llm;

pub use error::ConfigError;
pub use extract::ExtractConfig;
pub use index::IndexConfig;
pub use llm::{DISABLED_PROVIDER, LlmConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project configuration directory.
pub const PROJECT_DIR: &str = ".semroute";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SemrouteConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub index: IndexConfig,
}

impl SemrouteConfig {
    /// Load `<project_root>/.env` into the process environment when present,
    /// then [`Self::load_for_project`].
    ///
    /// Variables already set in the environment are not overridden.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Dotenv`] if the `.env` file exists but cannot be
    /// parsed, or any error from [`Self::load_for_project`].
    pub fn load_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        let env_path = project_root.join(".env");
        if env_path.is_file() {
            dotenvy::from_path(&env_path).map_err(|source| ConfigError::Dotenv {
                path: env_path.clone(),
                source,
            })?;
        }
        Self::load_for_project(project_root)
    }

    /// Load configuration with `<project_root>/.semroute/config.toml` as the
    /// project-local layer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_for_project(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.extract.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SEMROUTE_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("semroute").join("config.toml"))
    }
}
