//! The file-management tools exposed to the model.
//!
//! Five tools, names and signatures fixed by the external contract:
//! `list_files`, `read_file`, `write_file`, `delete_file`,
//! `answer_question_about_files`.

mod delete;
mod list;
mod question;
mod read;
mod write;

pub use delete::DeleteFileTool;
pub use list::ListFilesTool;
pub use question::AnswerQuestionTool;
pub use read::ReadFileTool;
pub use write::WriteFileTool;

use std::sync::Arc;

use crate::registry::ToolRegistry;
use crate::store::FileStore;

/// Build the standard registry with all five file tools bound to `store`.
pub fn file_tool_registry(store: Arc<FileStore>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(ListFilesTool::new(store.clone())));
    registry.register(Arc::new(ReadFileTool::new(store.clone())));
    registry.register(Arc::new(WriteFileTool::new(store.clone())));
    registry.register(Arc::new(DeleteFileTool::new(store.clone())));
    registry.register(Arc::new(AnswerQuestionTool::new(store)));
    registry
}
