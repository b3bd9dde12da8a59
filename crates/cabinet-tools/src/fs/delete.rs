//! `delete_file` tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use cabinet_core::tools::{Tool, ToolOutcome, text_result};

use crate::errors::ToolError;
use crate::store::FileStore;
use crate::traits::{CabinetTool, ToolContext};
use crate::utils::fs_errors::{FileOp, format_file_error};
use crate::utils::schema::ToolSchemaBuilder;
use crate::utils::validation::validate_required_string;

/// Deletes one regular file from the workspace. Never removes directories.
pub struct DeleteFileTool {
    store: Arc<FileStore>,
}

impl DeleteFileTool {
    /// Create the tool bound to a store.
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CabinetTool for DeleteFileTool {
    fn name(&self) -> &str {
        "delete_file"
    }

    fn definition(&self) -> Tool {
        ToolSchemaBuilder::new("delete_file", "Delete a file within the workspace.")
            .required_property(
                "filename",
                json!({"type": "string", "description": "Name of the file to delete"}),
            )
            .build()
    }

    async fn execute(&self, params: Value, _ctx: &ToolContext) -> Result<ToolOutcome, ToolError> {
        let filename = match validate_required_string(&params, "filename", "the file to delete") {
            Ok(f) => f,
            Err(e) => return Ok(e),
        };

        let path = self.store.workspace().resolve(&filename)?;
        match self.store.delete(&path).await {
            Ok(()) => Ok(text_result(
                format!("File '{filename}' deleted successfully."),
                false,
            )),
            Err(e) => Ok(text_result(
                format_file_error(FileOp::Delete, &filename, &e),
                true,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testutil::{make_ctx, temp_store};

    fn make_tool() -> (tempfile::TempDir, DeleteFileTool, Arc<FileStore>) {
        let (dir, store) = temp_store();
        let store = Arc::new(store);
        (dir, DeleteFileTool::new(store.clone()), store)
    }

    #[tokio::test]
    async fn deletes_existing_file() {
        let (_dir, tool, store) = make_tool();
        let path = store.workspace().root().join("a.txt");
        std::fs::write(&path, "x").unwrap();

        let result = tool
            .execute(json!({"filename": "a.txt"}), &make_ctx())
            .await
            .unwrap();
        assert_eq!(result.content, "File 'a.txt' deleted successfully.");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn missing_file_diagnostic() {
        let (_dir, tool, _store) = make_tool();
        let result = tool
            .execute(json!({"filename": "ghost.txt"}), &make_ctx())
            .await
            .unwrap();
        assert!(result.is_error());
        assert_eq!(result.content, "File 'ghost.txt' does not exist.");
    }

    #[tokio::test]
    async fn directory_never_removed() {
        let (_dir, tool, store) = make_tool();
        let path = store.workspace().root().join("sub");
        std::fs::create_dir(&path).unwrap();

        let result = tool
            .execute(json!({"filename": "sub"}), &make_ctx())
            .await
            .unwrap();
        assert_eq!(result.content, "'sub' is a directory, not a file.");
        assert!(path.is_dir());
    }
}
