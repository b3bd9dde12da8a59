//! `answer_question_about_files` tool: cross-file question answering.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use cabinet_core::tools::{Tool, ToolOutcome, text_result};

use crate::digest::build_digest;
use crate::errors::ToolError;
use crate::store::FileStore;
use crate::traits::{CabinetTool, ToolContext};
use crate::utils::schema::ToolSchemaBuilder;
use crate::utils::validation::validate_required_string;

/// Compiles the whole-workspace digest so the model can answer a question
/// that spans multiple files.
pub struct AnswerQuestionTool {
    store: Arc<FileStore>,
}

impl AnswerQuestionTool {
    /// Create the tool bound to a store.
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CabinetTool for AnswerQuestionTool {
    fn name(&self) -> &str {
        "answer_question_about_files"
    }

    fn definition(&self) -> Tool {
        ToolSchemaBuilder::new(
            "answer_question_about_files",
            "Answer questions about files by analyzing their contents.",
        )
        .required_property(
            "query",
            json!({"type": "string", "description": "The question to answer"}),
        )
        .build()
    }

    async fn execute(&self, params: Value, _ctx: &ToolContext) -> Result<ToolOutcome, ToolError> {
        let query = match validate_required_string(&params, "query", "the question to answer") {
            Ok(q) => q,
            Err(e) => return Ok(e),
        };

        match build_digest(&self.store, &query).await {
            Ok(digest) => Ok(text_result(digest, false)),
            Err(e) => Ok(text_result(format!("Error analyzing files: {e}"), true)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testutil::{make_ctx, temp_store};

    #[tokio::test]
    async fn digest_includes_files_and_query() {
        let (_dir, store) = temp_store();
        std::fs::write(
            store.workspace().root().join("project.txt"),
            "Reviewed by Alice",
        )
        .unwrap();
        let tool = AnswerQuestionTool::new(Arc::new(store));

        let result = tool
            .execute(json!({"query": "Who reviewed project.txt?"}), &make_ctx())
            .await
            .unwrap();
        assert!(!result.is_error());
        assert!(result.content.contains("--- FILE: project.txt ---"));
        assert!(result.content.contains("Reviewed by Alice"));
        assert!(result.content.ends_with("'Who reviewed project.txt?'"));
    }

    #[tokio::test]
    async fn empty_workspace_message() {
        let (_dir, store) = temp_store();
        let tool = AnswerQuestionTool::new(Arc::new(store));

        let result = tool
            .execute(json!({"query": "anything"}), &make_ctx())
            .await
            .unwrap();
        assert_eq!(result.content, "Workspace contains no files.");
    }

    #[tokio::test]
    async fn missing_query_param() {
        let (_dir, store) = temp_store();
        let tool = AnswerQuestionTool::new(Arc::new(store));

        let result = tool.execute(json!({}), &make_ctx()).await.unwrap();
        assert!(result.is_error());
    }
}
