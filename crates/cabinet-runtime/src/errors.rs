//! Runtime error types.

use thiserror::Error;

/// Errors surfaced by the agent loop.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The model backend failed.
    #[error(transparent)]
    Llm(#[from] cabinet_llm::LlmError),

    /// The tool loop hit its iteration ceiling without a final answer.
    #[error("tool loop exceeded {limit} iterations without completing")]
    ToolIterationLimit {
        /// The configured ceiling.
        limit: usize,
    },

    /// The workspace could not be opened.
    #[error(transparent)]
    Workspace(#[from] cabinet_tools::workspace::WorkspaceError),

    /// Transcript persistence failed.
    #[error("failed to save transcript: {0}")]
    Transcript(#[from] std::io::Error),
}
