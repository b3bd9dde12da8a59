//! `list_files` tool: workspace listing with file metadata.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use cabinet_core::tools::{Tool, ToolOutcome, error_result};

use crate::errors::ToolError;
use crate::store::FileStore;
use crate::traits::{CabinetTool, ToolContext};
use crate::utils::schema::ToolSchemaBuilder;

/// Lists every regular file in the workspace with size and modification
/// times, both human-readable and raw epoch seconds.
pub struct ListFilesTool {
    store: Arc<FileStore>,
}

impl ListFilesTool {
    /// Create the tool bound to a store.
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CabinetTool for ListFilesTool {
    fn name(&self) -> &str {
        "list_files"
    }

    fn definition(&self) -> Tool {
        ToolSchemaBuilder::new(
            "list_files",
            "List all files in the workspace with their modification times and sizes.",
        )
        .build()
    }

    async fn execute(&self, _params: Value, _ctx: &ToolContext) -> Result<ToolOutcome, ToolError> {
        match self.store.list().await {
            Ok(records) => {
                let details = serde_json::to_value(&records)
                    .map_err(|e| ToolError::Execution(e.to_string()))?;
                let content = serde_json::to_string_pretty(&records)
                    .map_err(|e| ToolError::Execution(e.to_string()))?;
                Ok(ToolOutcome {
                    content,
                    details: Some(details),
                    is_error: None,
                })
            }
            Err(e) => Ok(error_result(format!("Error listing files: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::testutil::{make_ctx, temp_store};

    #[tokio::test]
    async fn lists_files_with_metadata() {
        let (_dir, store) = temp_store();
        std::fs::write(store.workspace().root().join("a.txt"), "hello").unwrap();
        let tool = ListFilesTool::new(Arc::new(store));

        let result = tool.execute(json!({}), &make_ctx()).await.unwrap();
        assert!(!result.is_error());

        let details = result.details.unwrap();
        let records = details.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["filename"], "a.txt");
        assert_eq!(records[0]["size_bytes"], 5);
        assert!(records[0]["modified_time_raw"].as_f64().unwrap() > 0.0);
        assert!(
            records[0]["modified_time_human"]
                .as_str()
                .is_some_and(|s| !s.is_empty())
        );
    }

    #[tokio::test]
    async fn empty_workspace_yields_empty_array() {
        let (_dir, store) = temp_store();
        let tool = ListFilesTool::new(Arc::new(store));

        let result = tool.execute(json!({}), &make_ctx()).await.unwrap();
        assert_eq!(result.details.unwrap(), json!([]));
    }

    #[tokio::test]
    async fn directories_excluded() {
        let (_dir, store) = temp_store();
        std::fs::create_dir(store.workspace().root().join("sub")).unwrap();
        std::fs::write(store.workspace().root().join("a.txt"), "x").unwrap();
        let tool = ListFilesTool::new(Arc::new(store));

        let result = tool.execute(json!({}), &make_ctx()).await.unwrap();
        let details = result.details.unwrap();
        assert_eq!(details.as_array().unwrap().len(), 1);
    }
}
