//! Response status handling shared by chat-completion calls.

use crate::error::LlmError;

/// Pass success responses through; turn anything else into
/// [`LlmError::Api`] carrying the status and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    if !resp.status().is_success() {
        return Err(LlmError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
