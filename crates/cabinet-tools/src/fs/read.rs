//! `read_file` tool.

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

/// Reads one workspace file's content as text.
pub struct ReadFileTool {
    store: Arc<FileStore>,
}

impl ReadFileTool {
    /// Create the tool bound to a store.
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CabinetTool for ReadFileTool {
    fn name(&self) -> &str {
        "read_file"
    }

    fn definition(&self) -> Tool {
        ToolSchemaBuilder::new(
            "read_file",
            "Read the content of a file within the workspace.",
        )
        .required_property(
            "filename",
            json!({"type": "string", "description": "Name of the file to read"}),
        )
        .build()
    }

    async fn execute(&self, params: Value, _ctx: &ToolContext) -> Result<ToolOutcome, ToolError> {
        let filename = match validate_required_string(&params, "filename", "the file to read") {
            Ok(f) => f,
            Err(e) => return Ok(e),
        };

        let path = self.store.workspace().resolve(&filename)?;
        match self.store.read(&path).await {
            Ok(content) => Ok(text_result(content, false)),
            Err(e) => Ok(text_result(
                format_file_error(FileOp::Read, &filename, &e),
                true,
            )),
        }
    }
}
