//! Output caps for extracted implementation bodies.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_max_lines() -> usize {
    80
}

const fn default_max_chars() -> usize {
    4000
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Lines kept before the body is cut.
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    /// Characters kept after the line cap is applied.
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_lines: default_max_lines(),
            max_chars: default_max_chars(),
        }
    }
}

impl ExtractConfig {
    /// Both caps must be non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_lines == 0 {
            return Err(ConfigError::InvalidValue {
                field: "extract.max_lines".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.max_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: "extract.max_chars".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
