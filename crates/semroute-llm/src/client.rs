//! OpenAI-compatible `/chat/completions` client.

use std::time::Duration;

use semroute_config::LlmConfig;
use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::http::check_response;

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const QWEN_BASE_URL: &str = "https://dashscope.aliyuncs.com/compatible-mode/v1";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// ── Types ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPayload {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage>,
}

// ── Base URL ───────────────────────────────────────────────────────

/// Pick the endpoint base URL: an explicit non-empty `base_url` wins,
/// otherwise a known default for `provider`, otherwise `None`.
#[must_use]
pub fn resolve_base_url(provider: &str, base_url: &str) -> Option<String> {
    if !base_url.is_empty() {
        return Some(base_url.to_string());
    }
    match provider {
        "openai" => Some(OPENAI_BASE_URL.to_string()),
        "qwen" => Some(QWEN_BASE_URL.to_string()),
        "gemini" => Some(GEMINI_BASE_URL.to_string()),
        _ => None,
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// Chat-completion client bound to one endpoint and API key.
pub struct ChatClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ChatClient {
    /// Create a client with the default 30 s request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_timeout(api_key, base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn with_timeout(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .user_agent("semroute/0.1")
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Build a client from `[llm]` configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingBaseUrl`] when no base URL resolves, or
    /// [`LlmError::Http`] if the HTTP client fails to build.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let base_url = resolve_base_url(&config.provider, &config.base_url).ok_or_else(|| {
            LlmError::MissingBaseUrl {
                provider: config.provider.clone(),
            }
        })?;
        Self::with_timeout(
            config.api_key.clone(),
            base_url,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Full completion URL (`<base>/chat/completions`, one trailing `/` dropped).
    #[must_use]
    pub fn endpoint(&self) -> String {
        let base = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        format!("{base}/chat/completions")
    }

    /// Send one completion request and return the first choice's content,
    /// trimmed.
    ///
    /// `Ok(None)` means the endpoint answered successfully but the body did
    /// not have the `choices[0].message.content` shape.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] on transport failure, [`LlmError::Api`] on a
    /// non-success status, or [`LlmError::Parse`] if the body is not JSON.
    pub async fn complete(&self, payload: &ChatPayload) -> Result<Option<String>, LlmError> {
        let url = self.endpoint();
        tracing::debug!(%url, model = %payload.model, "sending chat completion");

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let text = resp.text().await?;
        let data: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| LlmError::Parse(e.to_string()))?;
        Ok(first_choice_content(&data))
    }
}

fn first_choice_content(data: &serde_json::Value) -> Option<String> {
    data.pointer("/choices/0/message/content")
        .and_then(serde_json::Value::as_str)
        .map(|content| content.trim().to_string())
}
