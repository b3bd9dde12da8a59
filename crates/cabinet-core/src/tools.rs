//! Tool definitions and results.
//!
//! A [`Tool`] is the schema handed to the model; a [`ToolOutcome`] is what an
//! executed tool hands back. Outcomes are always structured — failures are
//! carried as `is_error` with a descriptive message, never raised, so the
//! orchestrator can relay them as conversational text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON Schema for a tool's parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolParameterSchema {
    /// Always `"object"` for the tools in this system.
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Per-parameter schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    /// Names of required parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// A tool definition exposed to the model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name (unique, fixed by the external contract).
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Parameter schema.
    pub parameters: ToolParameterSchema,
}

/// The outcome of one tool execution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolOutcome {
    /// Human-readable result or diagnostic text, fed back to the model.
    pub content: String,
    /// Optional structured payload (e.g. the `list_files` record array).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// `Some(true)` when the tool reports a failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl ToolOutcome {
    /// Whether this outcome carries an error.
    pub fn is_error(&self) -> bool {
        self.is_error.unwrap_or(false)
    }
}

/// Build a plain text outcome.
pub fn text_result(content: impl Into<String>, is_error: bool) -> ToolOutcome {
    ToolOutcome {
        content: content.into(),
        details: None,
        is_error: if is_error { Some(true) } else { None },
    }
}

/// Build an error outcome.
pub fn error_result(content: impl Into<String>) -> ToolOutcome {
    text_result(content, true)
}
