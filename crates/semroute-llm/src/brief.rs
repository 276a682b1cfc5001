//! One-sentence symbol descriptions generated from signature + body.
//!
//! Brief generation never fails: when the LLM is not configured, no base URL
//! resolves, or the call errors, the caller gets a deterministic fallback.

use semroute_config::LlmConfig;

use crate::client::{ChatClient, ChatMessage, ChatPayload};

const SYSTEM_PROMPT: &str = "You are a code review assistant for a C++ project. \
Given a function signature and its implementation, write a single short sentence \
describing what it does. Requirements: at most 40 words, accurate, do not invent \
parameters or behavior that do not exist, mention key preconditions when relevant, \
no multiple lines, no bullet points.";

const NO_IMPLEMENTATION_NOTE: &str =
    "No implementation provided; infer from the signature as best you can.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BriefInput {
    pub module_name: String,
    pub signature: String,
    pub implementation: Option<String>,
    pub file_path: Option<String>,
}

impl BriefInput {
    /// An implementation containing only whitespace counts as absent.
    #[must_use]
    pub fn has_implementation(&self) -> bool {
        self.implementation
            .as_deref()
            .is_some_and(|body| !body.trim().is_empty())
    }
}

/// Deterministic description used whenever the LLM cannot answer.
#[must_use]
pub fn fallback_brief(signature: &str) -> String {
    format!("Auto-generated description: {signature}")
}

/// Build the chat request for one symbol.
#[must_use]
pub fn build_brief_payload(config: &LlmConfig, input: &BriefInput) -> ChatPayload {
    let implementation = if input.has_implementation() {
        input.implementation.as_deref().unwrap_or_default()
    } else {
        NO_IMPLEMENTATION_NOTE
    };

    let mut user = vec![
        format!("moduleName: {}", input.module_name),
        format!("signature: {}", input.signature),
    ];
    if let Some(file_path) = &input.file_path {
        user.push(format!("filePath: {file_path}"));
    }
    user.push(format!("implementation:\n```cpp\n{implementation}\n```"));

    ChatPayload {
        model: config.model.clone(),
        temperature: config.temperature,
        max_tokens: config.max_tokens,
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user.join("\n")),
        ],
    }
}

/// Ask the configured model for a one-sentence description of a symbol.
pub async fn generate_brief(config: &LlmConfig, input: &BriefInput) -> String {
    if !config.is_configured() {
        return fallback_brief(&input.signature);
    }

    let client = match ChatClient::from_config(config) {
        Ok(client) => client,
        Err(error) => {
            tracing::warn!(provider = %config.provider, %error, "cannot create LLM client");
            return fallback_brief(&input.signature);
        }
    };

    match client.complete(&build_brief_payload(config, input)).await {
        Ok(Some(text)) if !text.is_empty() => text,
        Ok(_) => fallback_brief(&input.signature),
        Err(error) => {
            tracing::warn!(
                provider = %config.provider,
                module = %input.module_name,
                signature = %input.signature,
                %error,
                "brief generation failed"
            );
            fallback_brief(&input.signature)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Role;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn input(implementation: Option<&str>) -> BriefInput {
        BriefInput {
            module_name: "render".into(),
            signature: "void Widget::draw() const".into(),
            implementation: implementation.map(String::from),
            file_path: None,
        }
    }

    fn configured(base_url: String) -> LlmConfig {
        LlmConfig {
            provider: "other".into(),
            api_key: "sk-test".into(),
            base_url,
            ..Default::default()
        }
    }

    #[test]
    fn payload_embeds_implementation() {
        let payload = build_brief_payload(&LlmConfig::default(), &input(Some("child.draw();")));
        assert_eq!(payload.model, "gpt-4o-mini");
        assert_eq!(payload.messages[0].role, Role::System);
        assert_eq!(
            payload.messages[1].content,
            "moduleName: render\nsignature: void Widget::draw() const\n\
             implementation:\n```cpp\nchild.draw();\n```"
        );
    }

    #[test]
    fn payload_notes_missing_implementation() {
        let payload = build_brief_payload(&LlmConfig::default(), &input(Some("   ")));
        assert!(payload.messages[1].content.contains(NO_IMPLEMENTATION_NOTE));
    }

    #[test]
    fn payload_includes_file_path_when_known() {
        let mut brief_input = input(None);
        brief_input.file_path = Some("src/ui/widget.cpp".into());
        let payload = build_brief_payload(&LlmConfig::default(), &brief_input);
        assert!(payload.messages[1].content.contains("filePath: src/ui/widget.cpp"));
    }

    #[tokio::test]
    async fn unconfigured_returns_fallback() {
        let brief = generate_brief(&LlmConfig::default(), &input(None)).await;
        assert_eq!(brief, "Auto-generated description: void Widget::draw() const");
    }

    #[tokio::test]
    async fn unresolvable_base_url_returns_fallback() {
        let brief = generate_brief(&configured(String::new()), &input(None)).await;
        assert_eq!(brief, fallback_brief("void Widget::draw() const"));
    }

    #[tokio::test]
    async fn returns_model_answer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "Draws every child widget."}}]
            })))
            .mount(&server)
            .await;

        let brief = generate_brief(&configured(server.uri()), &input(Some("child.draw();"))).await;
        assert_eq!(brief, "Draws every child widget.");
    }

    #[tokio::test]
    async fn api_failure_returns_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let brief = generate_brief(&configured(server.uri()), &input(None)).await;
        assert_eq!(brief, fallback_brief("void Widget::draw() const"));
    }

    #[tokio::test]
    async fn blank_answer_returns_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "   "}}]
            })))
            .mount(&server)
            .await;

        let brief = generate_brief(&configured(server.uri()), &input(None)).await;
        assert_eq!(brief, fallback_brief("void Widget::draw() const"));
    }
}
