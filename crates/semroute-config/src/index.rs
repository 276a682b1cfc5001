//! Skill index configuration.

use serde::{Deserialize, Serialize};

fn default_out_dir() -> String {
    String::from(".semroute/index")
}

fn default_extensions() -> Vec<String> {
    ["h", "hpp", "cpp"].into_iter().map(String::from).collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexConfig {
    /// Output directory for skill documents, relative to the project root.
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Source file extensions picked up by the scanner (without the dot).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            extensions: default_extensions(),
        }
    }
}
