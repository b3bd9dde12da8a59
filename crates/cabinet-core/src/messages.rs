//! Conversation message types.
//!
//! A session's history is an ordered sequence of [`Message`] values. The
//! orchestrator appends a turn's messages only after the turn completes;
//! rejected turns never touch the history.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A tool invocation requested by the model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Provider-assigned call ID, echoed back with the result.
    pub id: String,
    /// Tool name (must match a registered tool).
    pub name: String,
    /// Arguments as a JSON object.
    pub arguments: Map<String, Value>,
}

impl ToolCall {
    /// Create a new tool call.
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }
}

/// A single message in a conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Message {
    /// An utterance from the requester.
    User {
        /// Message text.
        content: String,
    },
    /// A model response, possibly carrying tool invocations.
    Assistant {
        /// Final or intermediate text (may be empty when only calling tools).
        content: String,
        /// Tool invocations requested in this step.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        tool_calls: Vec<ToolCall>,
    },
    /// The outcome of one executed tool invocation, fed back to the model.
    ToolResult {
        /// ID of the call this result answers.
        tool_call_id: String,
        /// Name of the executed tool.
        tool_name: String,
        /// Human-readable result or diagnostic text.
        content: String,
        /// Whether the tool reported a failure.
        #[serde(default)]
        is_error: bool,
    },
}

impl Message {
    /// Build a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User {
            content: content.into(),
        }
    }

    /// Build an assistant message with no tool calls.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant {
            content: content.into(),
            tool_calls: Vec::new(),
        }
    }

    /// Build a tool result message.
    pub fn tool_result(
        tool_call_id: impl Into<String>,
        tool_name: impl Into<String>,
        content: impl Into<String>,
        is_error: bool,
    ) -> Self {
        Self::ToolResult {
            tool_call_id: tool_call_id.into(),
            tool_name: tool_name.into(),
            content: content.into(),
            is_error,
        }
    }
}
