//! Shared test utilities for tool implementations.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::store::FileStore;
use crate::traits::ToolContext;
use crate::workspace::Workspace;

/// Build a standard test [`ToolContext`].
pub fn make_ctx() -> ToolContext {
    ToolContext {
        tool_call_id: "call-1".into(),
        session_id: "sess-1".into(),
        cancellation: CancellationToken::new(),
    }
}

/// Create a temp-dir-backed [`FileStore`].
///
/// The returned `TempDir` must stay alive for the store to remain valid.
pub fn temp_store() -> (tempfile::TempDir, FileStore) {
    let dir = tempfile::tempdir().unwrap();
    let workspace = Arc::new(Workspace::open(dir.path()).unwrap());
    (dir, FileStore::new(workspace))
}
