//! # Provider Boundary
//!
//! The [`LlmProvider`] trait is the seam between the agent runtime and any
//! concrete model backend. A provider receives a fully-assembled
//! [`CompletionRequest`] and returns a [`Completion`]; conversation state
//! and tool execution stay on the runtime side.

use async_trait::async_trait;
use thiserror::Error;

use cabinet_core::messages::{Message, ToolCall};
use cabinet_core::tools::Tool;

use crate::stop_reason::StopReason;

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Errors from a model backend.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport-level failure (connection, TLS, timeout).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body, or the raw body.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// No API key was available.
    #[error("missing credentials: {0}")]
    MissingCredentials(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Request / Completion
// ─────────────────────────────────────────────────────────────────────────────

/// A single completion request.
///
/// The runtime assembles this from the system prompt, the conversation
/// window, and the tool registry.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System prompt.
    pub system: String,
    /// Conversation messages, oldest first.
    pub messages: Vec<Message>,
    /// Tool definitions the model may call. Empty disables tool use.
    pub tools: Vec<Tool>,
}

impl CompletionRequest {
    /// Build a request with no tools (classifier-style calls).
    #[must_use]
    pub fn without_tools(system: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            system: system.into(),
            messages,
            tools: Vec::new(),
        }
    }
}

/// A single model completion.
#[derive(Debug, Clone, Default)]
pub struct Completion {
    /// Assistant text, possibly empty when the model only calls tools.
    pub text: String,
    /// Tool calls requested by the model, in order.
    pub tool_calls: Vec<ToolCall>,
    /// Why the completion ended.
    pub stop_reason: StopReason,
}

impl Completion {
    /// A plain text completion with no tool calls.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tool_calls: Vec::new(),
            stop_reason: StopReason::EndTurn,
        }
    }

    /// A completion that requests tool invocations.
    #[must_use]
    pub fn tool_use(text: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            text: text.into(),
            tool_calls,
            stop_reason: StopReason::ToolUse,
        }
    }

    /// Whether the model asked for any tools.
    #[must_use]
    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Trait
// ─────────────────────────────────────────────────────────────────────────────

/// A model backend capable of serving completion requests.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Run one completion.
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
