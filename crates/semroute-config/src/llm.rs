//! Chat-completion provider configuration.

use serde::{Deserialize, Serialize};

/// Provider value that turns LLM calls off explicitly.
pub const DISABLED_PROVIDER: &str = "disable";

fn default_model() -> String {
    String::from("gpt-4o-mini")
}

const fn default_temperature() -> f32 {
    0.2
}

const fn default_max_tokens() -> u32 {
    64
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    /// Provider name (`openai`, `qwen`, `gemini`, `other`, `disable`).
    #[serde(default)]
    pub provider: String,

    /// Bearer token sent to the chat-completion endpoint.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Explicit OpenAI-compatible base URL. Empty means "derive from provider".
    #[serde(default)]
    pub base_url: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// HTTP request timeout for a single completion call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: String::new(),
            api_key: String::new(),
            model: default_model(),
            base_url: String::new(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LlmConfig {
    /// A provider is selected, not disabled, and an API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.provider.is_empty() && self.provider != DISABLED_PROVIDER && !self.api_key.is_empty()
    }
}
