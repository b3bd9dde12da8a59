//! End-to-end agent runs over a real workspace with a scripted model.

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Map};
use tempfile::TempDir;

use cabinet_core::messages::ToolCall;
use cabinet_llm::scripted::ScriptedProvider;
use cabinet_llm::Completion;
use cabinet_runtime::agent::REFUSAL_MESSAGE;
use cabinet_runtime::gate::RuleGate;
use cabinet_runtime::{FileAgent, RuntimeConfig};
use cabinet_tools::fs::file_tool_registry;
use cabinet_tools::store::FileStore;
use cabinet_tools::workspace::Workspace;

fn call(id: &str, name: &str, args: &[(&str, &str)]) -> ToolCall {
    let mut map = Map::new();
    for (k, v) in args {
        let _ = map.insert((*k).to_owned(), json!(v));
    }
    ToolCall::new(id, name, map)
}

fn agent(root: &Path, script: Vec<Completion>) -> FileAgent {
    let workspace = Arc::new(Workspace::open(root).unwrap());
    let store = Arc::new(FileStore::new(workspace));
    FileAgent::new(
        Arc::new(ScriptedProvider::new(script)),
        Arc::new(RuleGate),
        file_tool_registry(store),
        &RuntimeConfig::default(),
    )
}

#[tokio::test]
async fn multi_step_turn_reads_a_file_it_listed() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.txt"), "alpha").unwrap();
    std::fs::write(dir.path().join("b.txt"), "bravo").unwrap();

    let script = vec![
        Completion::tool_use("", vec![call("c1", "list_files", &[])]),
        Completion::tool_use("", vec![call("c2", "read_file", &[("filename", "b.txt")])]),
        Completion::text("b.txt contains: bravo"),
    ];
    let mut agent = agent(dir.path(), script);

    let reply = agent.run_turn("read the file b.txt").await.unwrap();
    assert_eq!(reply.text, "b.txt contains: bravo");
    // user, assistant+list, list result, assistant+read, read result, final
    assert_eq!(agent.history().len(), 6);
}

#[tokio::test]
async fn traversal_attempt_fails_the_call_and_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let script = vec![
        Completion::tool_use(
            "",
            vec![call(
                "c1",
                "write_file",
                &[("filename", "../escape.txt"), ("content", "pwned")],
            )],
        ),
        Completion::text("I can't write outside the workspace."),
    ];
    let mut agent = agent(dir.path(), script);

    let reply = agent.run_turn("write a file one level up").await.unwrap();
    assert_eq!(reply.text, "I can't write outside the workspace.");
    assert!(!dir.path().parent().unwrap().join("escape.txt").exists());
}

#[tokio::test]
async fn rejected_turn_never_touches_the_workspace() {
    let dir = TempDir::new().unwrap();
    // Even with a scripted write ready, the gate short-circuits first.
    let script = vec![
        Completion::tool_use(
            "",
            vec![call(
                "c1",
                "write_file",
                &[("filename", "x.txt"), ("content", "x")],
            )],
        ),
        Completion::text("done"),
    ];
    let mut agent = agent(dir.path(), script);

    let reply = agent.run_turn("what is 2 + 2?").await.unwrap();
    assert!(reply.rejected);
    assert_eq!(reply.text, REFUSAL_MESSAGE);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    assert!(agent.history().is_empty());
}

#[tokio::test]
async fn diagnostics_flow_back_as_tool_results() {
    let dir = TempDir::new().unwrap();
    let script = vec![
        Completion::tool_use(
            "",
            vec![call("c1", "read_file", &[("filename", "missing.txt")])],
        ),
        Completion::text("There is no missing.txt in the workspace."),
    ];
    let mut agent = agent(dir.path(), script);

    let reply = agent.run_turn("read missing.txt").await.unwrap();
    assert_eq!(reply.text, "There is no missing.txt in the workspace.");

    let history = agent.history().messages();
    let diagnostic = history
        .iter()
        .find_map(|m| match m {
            cabinet_core::messages::Message::ToolResult {
                content, is_error, ..
            } => Some((content.clone(), *is_error)),
            _ => None,
        })
        .unwrap();
    assert_eq!(diagnostic.0, "File 'missing.txt' does not exist.");
    assert!(diagnostic.1);
}
