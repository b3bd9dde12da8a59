//! Runtime configuration with environment overrides.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::gate::AmbiguousPolicy;

fn default_workspace_dir() -> PathBuf {
    PathBuf::from("./workspace")
}

fn default_transcript_dir() -> PathBuf {
    PathBuf::from("transcripts")
}

fn default_model() -> String {
    cabinet_llm::openai::types::DEFAULT_MODEL.to_owned()
}

fn default_max_tool_iterations() -> usize {
    16
}

fn default_history_capacity() -> usize {
    200
}

/// Runtime configuration for an agent session.
///
/// Every field has a default; `CABINET_*` environment variables override
/// individual fields via [`RuntimeConfig::from_env`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuntimeConfig {
    /// Directory the agent is sandboxed to.
    pub workspace_dir: PathBuf,
    /// Directory where conversation transcripts are saved.
    pub transcript_dir: PathBuf,
    /// Model ID passed to the provider.
    pub model: String,
    /// Upper bound on tool-invocation rounds within one turn.
    pub max_tool_iterations: usize,
    /// Maximum messages retained in the conversation window.
    pub history_capacity: usize,
    /// How the gate treats unparseable classifier output.
    pub ambiguous_policy: AmbiguousPolicy,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            workspace_dir: default_workspace_dir(),
            transcript_dir: default_transcript_dir(),
            model: default_model(),
            max_tool_iterations: default_max_tool_iterations(),
            history_capacity: default_history_capacity(),
            ambiguous_policy: AmbiguousPolicy::default(),
        }
    }
}

impl RuntimeConfig {
    /// Defaults overridden by any `CABINET_*` environment variables.
    ///
    /// Unparseable numeric values are logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("CABINET_WORKSPACE_DIR") {
            config.workspace_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("CABINET_TRANSCRIPT_DIR") {
            config.transcript_dir = PathBuf::from(dir);
        }
        if let Ok(model) = std::env::var("CABINET_MODEL") {
            config.model = model;
        }
        if let Ok(raw) = std::env::var("CABINET_MAX_TOOL_ITERATIONS") {
            match raw.parse() {
                Ok(n) => config.max_tool_iterations = n,
                Err(_) => warn!(value = %raw, "ignoring invalid CABINET_MAX_TOOL_ITERATIONS"),
            }
        }
        if let Ok(raw) = std::env::var("CABINET_HISTORY_CAPACITY") {
            match raw.parse() {
                Ok(n) => config.history_capacity = n,
                Err(_) => warn!(value = %raw, "ignoring invalid CABINET_HISTORY_CAPACITY"),
            }
        }
        if let Ok(raw) = std::env::var("CABINET_AMBIGUOUS_POLICY") {
            match raw.to_lowercase().as_str() {
                "fail_open" | "failopen" => config.ambiguous_policy = AmbiguousPolicy::FailOpen,
                "fail_closed" | "failclosed" => {
                    config.ambiguous_policy = AmbiguousPolicy::FailClosed;
                }
                _ => warn!(value = %raw, "ignoring invalid CABINET_AMBIGUOUS_POLICY"),
            }
        }
        config
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RuntimeConfig::default();
        assert_eq!(config.workspace_dir, PathBuf::from("./workspace"));
        assert_eq!(config.transcript_dir, PathBuf::from("transcripts"));
        assert_eq!(config.max_tool_iterations, 16);
        assert_eq!(config.history_capacity, 200);
        assert_eq!(config.ambiguous_policy, AmbiguousPolicy::FailClosed);
    }

    #[test]
    fn deserializes_with_partial_fields() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"model":"gpt-4o-mini","maxToolIterations":4}"#).unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tool_iterations, 4);
        assert_eq!(config.history_capacity, 200);
    }
}
