//! # Stop Reason Mapping
//!
//! Maps provider-specific finish reasons to unified [`StopReason`] values.

use serde::{Deserialize, Serialize};

/// Why a completion ended, independent of the provider's wire vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Normal completion.
    #[default]
    EndTurn,
    /// The model wants one or more tools invoked.
    ToolUse,
    /// The token budget was exhausted mid-response.
    MaxTokens,
}

/// Map an `OpenAI` chat-completions finish reason to a [`StopReason`].
///
/// `OpenAI` uses:
/// - `"stop"` -> normal completion
/// - `"length"` -> max tokens reached
/// - `"tool_calls"` -> model wants to call tools
/// - `"content_filter"` -> blocked by safety filter
/// - `null` -> default to `EndTurn`
#[must_use]
pub fn map_openai_stop_reason(reason: Option<&str>) -> StopReason {
    match reason {
        Some("length") => StopReason::MaxTokens,
        Some("tool_calls") => StopReason::ToolUse,
        _ => StopReason::EndTurn,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
