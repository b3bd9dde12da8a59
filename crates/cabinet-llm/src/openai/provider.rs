//! `OpenAI` provider entry point.

use async_trait::async_trait;
use tracing::debug;

use crate::openai::message_converter::{from_chat_choice, to_chat_messages, to_chat_tools};
use crate::openai::types::{ApiErrorBody, ChatRequest, ChatResponse, OpenAIConfig};
use crate::provider::{Completion, CompletionRequest, LlmError, LlmProvider};

/// [`LlmProvider`] backed by the `OpenAI` Chat Completions API.
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: reqwest::Client,
}

impl OpenAIProvider {
    /// Create a provider from a config, with a fresh HTTP client.
    #[must_use]
    pub fn new(config: OpenAIConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// The configured model ID.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn build_body(&self, request: &CompletionRequest) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: to_chat_messages(&request.system, &request.messages),
            tools: if request.tools.is_empty() {
                None
            } else {
                Some(to_chat_tools(&request.tools))
            },
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError> {
        let url = format!("{}/chat/completions", self.config.base_url());
        let body = self.build_body(&request);
        debug!(
            model = %body.model,
            messages = body.messages.len(),
            tools = body.tools.as_ref().map_or(0, Vec::len),
            "sending completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&raw)
                .map_or(raw, |body| body.error.message);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            LlmError::MalformedResponse(format!("failed to decode response body: {e}"))
        })?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::MalformedResponse("response had no choices".to_owned()))?;
        from_chat_choice(choice)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
