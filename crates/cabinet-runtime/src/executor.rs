//! Tool executor: lookup → cancellation check → execute → metrics.

use std::time::{Duration, Instant};

use metrics::{counter, histogram};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

use cabinet_core::messages::ToolCall;
use cabinet_core::tools::{error_result, ToolOutcome};
use cabinet_tools::registry::ToolRegistry;
use cabinet_tools::traits::ToolContext;

/// Result of executing one tool call.
#[derive(Debug, Clone)]
pub struct ToolExecutionResult {
    /// ID of the originating call.
    pub tool_call_id: String,
    /// The tool's outcome, or an error result for failed calls.
    pub outcome: ToolOutcome,
    /// Wall-clock duration.
    pub duration_ms: u64,
}

/// Convert a `Duration` to milliseconds, rounding up (ceiling).
///
/// `Duration::as_millis()` truncates sub-millisecond values to 0, which
/// makes fast tools (a stat, a small read) report "0ms". Any non-zero
/// duration reports at least 1ms.
#[allow(clippy::cast_possible_truncation)]
fn duration_ceil_ms(d: Duration) -> u64 {
    let micros = d.as_micros();
    if micros == 0 {
        return 0;
    }
    micros.div_ceil(1000) as u64
}

/// Execute a single tool call against the registry.
///
/// Never returns an `Err`: unknown tools, cancellation, and execution
/// failures all fold into an error-flagged [`ToolOutcome`] so the model
/// sees a diagnostic instead of the turn aborting.
#[instrument(skip_all, fields(tool_name = tool_call.name, session_id))]
pub async fn execute_tool(
    tool_call: &ToolCall,
    registry: &ToolRegistry,
    session_id: &str,
    cancel: &CancellationToken,
) -> ToolExecutionResult {
    let start = Instant::now();
    let tool_call_id = tool_call.id.clone();
    let tool_name = tool_call.name.clone();

    let Some(tool) = registry.get(&tool_name) else {
        error!(tool_name, "tool not found");
        return ToolExecutionResult {
            tool_call_id,
            outcome: error_result(format!("Tool not found: {tool_name}")),
            duration_ms: duration_ceil_ms(start.elapsed()),
        };
    };

    debug!(tool_name, tool_call_id, session_id, "tool execution started");

    let ctx = ToolContext {
        tool_call_id: tool_call_id.clone(),
        session_id: session_id.to_owned(),
        cancellation: cancel.clone(),
    };

    let outcome = if cancel.is_cancelled() {
        error_result("Operation cancelled")
    } else {
        match tool
            .execute(Value::Object(tool_call.arguments.clone()), &ctx)
            .await
        {
            Ok(r) => r,
            Err(e) => error_result(e.to_string()),
        }
    };

    let duration_ms = duration_ceil_ms(start.elapsed());

    counter!("tool_executions_total", "tool" => tool_name.clone()).increment(1);
    histogram!("tool_execution_duration_seconds", "tool" => tool_name.clone())
        .record(start.elapsed().as_secs_f64());
    info!(tool = %tool_name, duration_ms, is_error = outcome.is_error(), "tool executed");

    ToolExecutionResult {
        tool_call_id,
        outcome,
        duration_ms,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
