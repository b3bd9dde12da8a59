//! `OpenAI` provider types and configuration.
//!
//! Covers the Chat Completions API (`POST /chat/completions`) with
//! function-calling tools.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::provider::LlmError;

/// Default base URL for the `OpenAI` API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// `OpenAI` provider configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAIConfig {
    /// Model ID.
    pub model: String,
    /// API key.
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Base URL override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Max completion tokens override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Temperature override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl OpenAIConfig {
    /// Build a config for `model`, reading the key from `OPENAI_API_KEY`.
    pub fn from_env(model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| LlmError::MissingCredentials(format!("{API_KEY_ENV} is not set")))?;
        Ok(Self {
            model: model.into(),
            api_key,
            base_url: None,
            max_tokens: None,
            temperature: None,
        })
    }

    /// Effective base URL, with the trailing slash stripped.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Request Types
// ─────────────────────────────────────────────────────────────────────────────

/// A message in the chat-completions request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system", "user", "assistant", or "tool".
    pub role: String,
    /// Text content. Omitted for assistant messages that only call tools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Tool calls (assistant messages only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ChatToolCall>>,
    /// Call ID this message answers (tool messages only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    /// A plain text message for `role`.
    #[must_use]
    pub fn text(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_owned(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }
}

/// A tool call in a request or response message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatToolCall {
    /// Call ID.
    pub id: String,
    /// Always "function".
    #[serde(rename = "type")]
    pub call_type: String,
    /// The invoked function.
    pub function: ChatFunctionCall,
}

/// The function half of a tool call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatFunctionCall {
    /// Function name.
    pub name: String,
    /// JSON-encoded argument object.
    pub arguments: String,
}

/// A tool definition in the request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatTool {
    /// Always "function".
    #[serde(rename = "type")]
    pub tool_type: String,
    /// The function definition.
    pub function: ChatFunctionDef,
}

/// Function definition for a [`ChatTool`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatFunctionDef {
    /// Function name.
    pub name: String,
    /// Function description.
    pub description: String,
    /// JSON Schema for the arguments.
    pub parameters: Value,
}

/// Request body for `POST /chat/completions`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model ID.
    pub model: String,
    /// Messages, system first.
    pub messages: Vec<ChatMessage>,
    /// Tool definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ChatTool>>,
    /// Max completion tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response Types
// ─────────────────────────────────────────────────────────────────────────────

/// Response body for `POST /chat/completions`.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatResponse {
    /// Completion choices; only the first is used.
    pub choices: Vec<ChatChoice>,
}

/// One completion choice.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatChoice {
    /// The assistant message.
    pub message: ChatResponseMessage,
    /// Finish reason ("stop", "length", "tool_calls", ...).
    pub finish_reason: Option<String>,
}

/// The assistant message in a response choice.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatResponseMessage {
    /// Text content, often null when tools are called.
    pub content: Option<String>,
    /// Requested tool calls.
    pub tool_calls: Option<Vec<ChatToolCall>>,
}

/// Error envelope returned on non-2xx statuses.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    /// The error payload.
    pub error: ApiErrorDetail,
}

/// Error payload inside [`ApiErrorBody`].
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorDetail {
    /// Human-readable message.
    pub message: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
