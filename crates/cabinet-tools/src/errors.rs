//! Tool-layer errors.

use thiserror::Error;

use crate::workspace::WorkspaceError;

/// Errors that abort a tool call outright.
///
/// Ordinary operation failures (missing file, denied access) are *not*
/// errors at this level — they come back as error-flagged
/// [`cabinet_core::tools::ToolOutcome`]s so the model can narrate them.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Path validation failed before any filesystem access.
    #[error("{0}")]
    Workspace(#[from] WorkspaceError),

    /// The tool could not run at all.
    #[error("tool execution failed: {0}")]
    Execution(String),
}
