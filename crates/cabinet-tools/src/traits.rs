//! The tool trait and execution context.

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use cabinet_core::tools::{Tool, ToolOutcome};

use crate::errors::ToolError;

/// Per-invocation context handed to every tool.
#[derive(Clone, Debug)]
pub struct ToolContext {
    /// ID of the invocation being executed.
    pub tool_call_id: String,
    /// Session the invocation belongs to.
    pub session_id: String,
    /// Cancellation signal — checked by the executor before dispatch.
    pub cancellation: CancellationToken,
}

/// A tool the model can invoke.
///
/// Implementations must be thread-safe for use across async tasks. Expected
/// failure modes (missing file, denied access) are reported as error
/// [`ToolOutcome`]s; `Err` is reserved for validation failures that abort
/// the call itself.
#[async_trait]
pub trait CabinetTool: Send + Sync {
    /// Tool name — fixed by the external contract.
    fn name(&self) -> &str;

    /// Schema definition handed to the model.
    fn definition(&self) -> Tool;

    /// Execute the tool with the given JSON arguments.
    async fn execute(&self, params: Value, ctx: &ToolContext) -> Result<ToolOutcome, ToolError>;
}
