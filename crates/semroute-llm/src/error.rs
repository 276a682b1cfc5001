//! Chat-completion error types.

use thiserror::Error;

/// Failures talking to the language-model endpoint.
///
/// These mean the request did not produce an answer at all and must not be
/// treated as "no content".
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport error (connect, timeout, TLS, client build).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("LLM request failed: {status} {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        message: String,
    },

    /// A success response whose body is not JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// No base URL was configured and none is known for the provider.
    #[error("no base URL configured for provider '{provider}'")]
    MissingBaseUrl { provider: String },
}
