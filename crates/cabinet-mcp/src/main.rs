//! Cabinet MCP server binary.
//!
//! Runs the file agent as an MCP server over stdio. Logging goes to stderr
//! so stdout stays clean for the protocol.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use rmcp::ServiceExt;

use cabinet_llm::openai::{OpenAIConfig, OpenAIProvider};
use cabinet_mcp::CabinetServer;
use cabinet_runtime::gate::ModelGate;
use cabinet_runtime::RuntimeConfig;

#[derive(Debug, Parser)]
#[command(name = "cabinet-mcp", about = "MCP server for the Cabinet file agent")]
struct Args {
    /// Workspace directory the agent is sandboxed to.
    #[arg(long)]
    workspace: Option<PathBuf>,

    /// Model ID.
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cabinet_core::logging::init("info");

    let args = Args::parse();
    let mut config = RuntimeConfig::from_env();
    if let Some(workspace) = args.workspace {
        config.workspace_dir = workspace;
    }
    if let Some(model) = args.model {
        config.model = model;
    }

    tracing::info!(workspace = %config.workspace_dir.display(), "starting Cabinet MCP server");

    let provider = Arc::new(OpenAIProvider::new(OpenAIConfig::from_env(
        config.model.clone(),
    )?));
    let gate = Arc::new(ModelGate::new(provider.clone()));
    let server = CabinetServer::new(config, provider, gate)?;

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("failed to start MCP service: {e}");
        })?;

    service.waiting().await?;

    tracing::info!("Cabinet MCP server shutting down");
    Ok(())
}
