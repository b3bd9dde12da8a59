//! `write_file` tool: create, overwrite, or append.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use cabinet_core::tools::{Tool, ToolOutcome, error_result, text_result};

use crate::errors::ToolError;
use crate::store::{FileStore, WriteMode};
use crate::traits::{CabinetTool, ToolContext};
use crate::utils::fs_errors::{FileOp, format_file_error};
use crate::utils::schema::ToolSchemaBuilder;
use crate::utils::validation::{
    get_optional_string, validate_present_string, validate_required_string,
};

/// Writes or appends content to a workspace file.
///
/// Mode `"w"` overwrites (the default), `"a"` appends with the fixed
/// separator inserted before the new content.
pub struct WriteFileTool {
    store: Arc<FileStore>,
}

impl WriteFileTool {
    /// Create the tool bound to a store.
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CabinetTool for WriteFileTool {
    fn name(&self) -> &str {
        "write_file"
    }

    fn definition(&self) -> Tool {
        ToolSchemaBuilder::new(
            "write_file",
            "Write or append content to a file within the workspace.",
        )
        .required_property(
            "filename",
            json!({"type": "string", "description": "Name of the file to write"}),
        )
        .required_property(
            "content",
            json!({"type": "string", "description": "Content to write"}),
        )
        .property(
            "mode",
            json!({
                "type": "string",
                "enum": ["w", "a"],
                "description": "'w' to overwrite (default), 'a' to append"
            }),
        )
        .build()
    }

    async fn execute(&self, params: Value, _ctx: &ToolContext) -> Result<ToolOutcome, ToolError> {
        let filename = match validate_required_string(&params, "filename", "the file to write") {
            Ok(f) => f,
            Err(e) => return Ok(e),
        };
        let content = match validate_present_string(&params, "content", "the content to write") {
            Ok(c) => c,
            Err(e) => return Ok(e),
        };
        let mode_str = get_optional_string(&params, "mode").unwrap_or_else(|| "w".to_owned());
        let Some(mode) = WriteMode::parse(&mode_str) else {
            return Ok(error_result(
                "Invalid mode. Use 'w' to overwrite or 'a' to append.",
            ));
        };

        let path = self.store.workspace().resolve(&filename)?;
        match self.store.write(&path, &content, mode).await {
            Ok(()) => {
                let action = match mode {
                    WriteMode::Append => "Appended to",
                    WriteMode::Overwrite => "Wrote to",
                };
                Ok(text_result(
                    format!("{action} file '{filename}' successfully."),
                    false,
                ))
            }
            Err(e) => Ok(text_result(
                format_file_error(FileOp::Write, &filename, &e),
                true,
            )),
        }
    }
}
