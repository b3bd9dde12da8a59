//! Command-line chat for the Cabinet file agent.
//!
//! Interactive by default; `--script FILE` replays one prompt per line and
//! exits. `exit` or `quit` (any casing) ends an interactive session.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use cabinet_llm::openai::{OpenAIConfig, OpenAIProvider};
use cabinet_runtime::gate::{IntentGate, ModelGate, RuleGate};
use cabinet_runtime::transcript::TranscriptRecorder;
use cabinet_runtime::{FileAgent, RuntimeConfig};
use cabinet_tools::fs::file_tool_registry;
use cabinet_tools::store::FileStore;
use cabinet_tools::workspace::Workspace;

#[derive(Debug, Parser)]
#[command(name = "cabinet", about = "Chat with a sandboxed file-management agent")]
struct Args {
    /// Workspace directory the agent is sandboxed to.
    #[arg(long)]
    workspace: Option<PathBuf>,

    /// Model ID.
    #[arg(long)]
    model: Option<String>,

    /// Replay prompts from this file (one per line) instead of reading stdin.
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Save the conversation transcript when the session ends.
    #[arg(long)]
    save_transcript: bool,

    /// Directory for saved transcripts.
    #[arg(long)]
    transcript_dir: Option<PathBuf>,

    /// Screen requests with the offline keyword gate instead of the model.
    #[arg(long)]
    rule_gate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cabinet_core::logging::init("warn");

    let args = Args::parse();
    let mut config = RuntimeConfig::from_env();
    if let Some(workspace) = args.workspace {
        config.workspace_dir = workspace;
    }
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(dir) = args.transcript_dir {
        config.transcript_dir = dir;
    }

    let provider = Arc::new(OpenAIProvider::new(
        OpenAIConfig::from_env(config.model.clone())
            .context("an OpenAI API key is required; set OPENAI_API_KEY")?,
    ));
    let gate: Arc<dyn IntentGate> = if args.rule_gate {
        Arc::new(RuleGate)
    } else {
        Arc::new(ModelGate::new(provider.clone()))
    };

    let workspace = Arc::new(Workspace::open(&config.workspace_dir)?);
    let store = Arc::new(FileStore::new(workspace));
    let mut agent = FileAgent::new(provider, gate, file_tool_registry(store), &config);

    let mut transcript = TranscriptRecorder::new();
    let source = args
        .script
        .as_deref()
        .and_then(|p| p.file_stem())
        .map_or_else(|| "cli".to_owned(), |s| s.to_string_lossy().into_owned());

    match &args.script {
        Some(path) => {
            let body = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read script {}", path.display()))?;
            for line in body.lines() {
                let prompt = line.trim();
                if prompt.is_empty() {
                    continue;
                }
                println!("You: {prompt}");
                run_one(&mut agent, prompt, &mut transcript).await?;
            }
        }
        None => {
            let mut stdout = tokio::io::stdout();
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                stdout.write_all(b"You: ").await?;
                stdout.flush().await?;
                let Some(line) = lines.next_line().await? else {
                    break;
                };
                let prompt = line.trim();
                if prompt.is_empty() {
                    continue;
                }
                if prompt.eq_ignore_ascii_case("exit") || prompt.eq_ignore_ascii_case("quit") {
                    break;
                }
                run_one(&mut agent, prompt, &mut transcript).await?;
            }
        }
    }

    if args.save_transcript {
        if let Some(path) = transcript.save(&config.transcript_dir, &source).await? {
            println!("\nConversation saved to {}", path.display());
        }
    }

    Ok(())
}

/// Run one turn, print the reply, and record it. Refused turns are recorded
/// with an empty response.
async fn run_one(
    agent: &mut FileAgent,
    prompt: &str,
    transcript: &mut TranscriptRecorder,
) -> anyhow::Result<()> {
    match agent.run_turn(prompt).await {
        Ok(reply) => {
            println!("Agent: {}", reply.text);
            if reply.rejected {
                transcript.record(prompt, "");
            } else {
                transcript.record(prompt, reply.text);
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "turn failed");
            println!("Agent: Error: {e}");
        }
    }
    Ok(())
}
