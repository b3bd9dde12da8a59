//! Cabinet MCP Server
//!
//! Exposes the file agent as a single conversational MCP tool plus a
//! resource listing of the workspace. Each tool call is stateless: it runs
//! one gated turn against a fresh conversation window.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    model::*,
    schemars::{self, JsonSchema},
    service::{RequestContext, RoleServer},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use cabinet_llm::LlmProvider;
use cabinet_runtime::gate::IntentGate;
use cabinet_runtime::{FileAgent, RuntimeConfig};
use cabinet_tools::fs::file_tool_registry;
use cabinet_tools::store::FileStore;
use cabinet_tools::workspace::{Workspace, WorkspaceError};

/// Refusal shown for out-of-scope requests over MCP.
pub const MCP_REFUSAL: &str = "I only assist with file-related tasks.";

/// Parameters for the conversational tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChatParams {
    /// Your message or request.
    pub message: String,
}

/// MCP server wrapping the Cabinet file agent.
#[derive(Clone)]
pub struct CabinetServer {
    config: RuntimeConfig,
    provider: Arc<dyn LlmProvider>,
    gate: Arc<dyn IntentGate>,
    store: Arc<FileStore>,
    workspace_root: PathBuf,
}

impl std::fmt::Debug for CabinetServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CabinetServer")
            .field("workspace_root", &self.workspace_root)
            .finish_non_exhaustive()
    }
}

impl CabinetServer {
    /// Open the configured workspace and build the server.
    pub fn new(
        config: RuntimeConfig,
        provider: Arc<dyn LlmProvider>,
        gate: Arc<dyn IntentGate>,
    ) -> Result<Self, WorkspaceError> {
        let workspace = Arc::new(Workspace::open(&config.workspace_dir)?);
        let workspace_root = workspace.root().to_path_buf();
        let store = Arc::new(FileStore::new(workspace));
        Ok(Self {
            config,
            provider,
            gate,
            store,
            workspace_root,
        })
    }

    /// Run one stateless agent turn.
    async fn chat(&self, params: ChatParams) -> Result<CallToolResult, McpError> {
        let message = params.message.trim();
        if message.is_empty() {
            return Ok(CallToolResult::success(vec![Content::text(
                "Please provide a message",
            )]));
        }

        let mut agent = FileAgent::new(
            self.provider.clone(),
            self.gate.clone(),
            file_tool_registry(self.store.clone()),
            &self.config,
        );
        match agent.run_turn(message).await {
            Ok(reply) if reply.rejected => {
                Ok(CallToolResult::success(vec![Content::text(MCP_REFUSAL)]))
            }
            Ok(reply) => Ok(CallToolResult::success(vec![Content::text(reply.text)])),
            Err(e) => {
                error!(error = %e, "agent turn failed");
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error: {e}"
                ))]))
            }
        }
    }

    fn chat_tool(&self) -> Tool {
        let schema = schemars::schema_for!(ChatParams);
        let schema_json = serde_json::to_value(schema).unwrap_or_default();
        let input_schema = match schema_json {
            serde_json::Value::Object(map) => Arc::new(map),
            _ => Arc::new(serde_json::Map::new()),
        };

        Tool {
            name: "chat_with_file_agent".into(),
            title: Some("Chat with the File Agent".into()),
            description: Some(
                "Chat with the file agent to manage files, read content, search, or ask \
                questions. The agent operates only on files inside its workspace directory."
                    .into(),
            ),
            input_schema,
            output_schema: None,
            annotations: None,
            icons: None,
            meta: None,
        }
    }
}

impl ServerHandler for CabinetServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Cabinet is a sandboxed file-management agent. Use the \
                'chat_with_file_agent' tool with a natural-language request to list, read, \
                write, delete, or ask about files in its workspace. Requests that are not \
                about files are refused."
                    .into(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: vec![self.chat_tool()],
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = %request.name, "tool called");
        match request.name.as_ref() {
            "chat_with_file_agent" => {
                let params: ChatParams = match &request.arguments {
                    Some(args) => serde_json::from_value(serde_json::Value::Object(args.clone()))
                        .map_err(|e| {
                            McpError::invalid_params(format!("Invalid parameters: {e}"), None)
                        })?,
                    None => {
                        return Err(McpError::invalid_params(
                            "Missing 'message' parameter",
                            None,
                        ));
                    }
                };
                self.chat(params).await
            }
            _ => Err(McpError::invalid_params(
                format!("Unknown tool: {}", request.name),
                None,
            )),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let records = self.store.list().await.map_err(|e| {
            McpError::internal_error(format!("Error listing resources: {e}"), None)
        })?;

        let resources = records
            .into_iter()
            .map(|record| {
                let uri = format!(
                    "file://{}",
                    self.workspace_root.join(&record.filename).display()
                );
                let mut resource = RawResource::new(uri, record.filename.clone());
                resource.description = Some(format!("File in workspace: {}", record.filename));
                resource.no_annotation()
            })
            .collect();

        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }
}
