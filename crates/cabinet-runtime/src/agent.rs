//! The file agent: gate, tool loop, and conversation state for one session.

use std::sync::Arc;

use metrics::counter;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

use cabinet_core::messages::Message;
use cabinet_llm::{CompletionRequest, LlmProvider};
use cabinet_tools::registry::ToolRegistry;

use crate::config::RuntimeConfig;
use crate::errors::AgentError;
use crate::executor::execute_tool;
use crate::gate::{AmbiguousPolicy, IntentGate};
use crate::history::History;
use crate::prompts::FILE_AGENT_PROMPT;

/// Refusal shown for out-of-scope requests.
pub const REFUSAL_MESSAGE: &str = "I am designed to assist with file-related tasks only.";

/// Fallback reply when the model produces no text at all.
pub const NO_OUTPUT_REPLY: &str = "Agent returned no output.";

/// The result of one user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReply {
    /// Text to show the user.
    pub text: String,
    /// Whether the gate refused the request.
    pub rejected: bool,
}

impl TurnReply {
    fn rejected() -> Self {
        Self {
            text: REFUSAL_MESSAGE.to_owned(),
            rejected: true,
        }
    }

    fn reply(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rejected: false,
        }
    }
}

/// A conversational file-management agent bound to one workspace session.
///
/// Each turn runs the gate first; accepted turns drive the model/tool loop
/// until the model stops calling tools. The conversation window only gains
/// a turn's messages once that turn completes, so refusals and failed
/// turns leave no residue.
pub struct FileAgent {
    provider: Arc<dyn LlmProvider>,
    gate: Arc<dyn IntentGate>,
    registry: ToolRegistry,
    history: History,
    session_id: String,
    max_tool_iterations: usize,
    ambiguous_policy: AmbiguousPolicy,
    cancel: CancellationToken,
}

impl FileAgent {
    /// Build an agent with a fresh session ID and empty history.
    #[must_use]
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        gate: Arc<dyn IntentGate>,
        registry: ToolRegistry,
        config: &RuntimeConfig,
    ) -> Self {
        Self {
            provider,
            gate,
            registry,
            history: History::new(config.history_capacity),
            session_id: Uuid::now_v7().to_string(),
            max_tool_iterations: config.max_tool_iterations,
            ambiguous_policy: config.ambiguous_policy,
            cancel: CancellationToken::new(),
        }
    }

    /// This session's ID.
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// The retained conversation window.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Token that cancels in-flight tool executions when triggered.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run one user turn end to end.
    pub async fn run_turn(&mut self, utterance: &str) -> Result<TurnReply, AgentError> {
        counter!("agent_turns_total").increment(1);

        let decision = self.gate.screen(utterance).await?;
        if !self.ambiguous_policy.allows(decision) {
            counter!("agent_turns_rejected_total").increment(1);
            info!(session_id = %self.session_id, ?decision, "request refused by gate");
            return Ok(TurnReply::rejected());
        }

        // Buffered until the turn completes; partial turns never reach history.
        let mut turn = vec![Message::user(utterance)];
        let mut final_text = None;

        for _ in 0..self.max_tool_iterations {
            let mut messages = self.history.messages();
            messages.extend(turn.iter().cloned());
            let request = CompletionRequest {
                system: FILE_AGENT_PROMPT.to_owned(),
                messages,
                tools: self.registry.definitions(),
            };
            let completion = self.provider.complete(request).await?;

            if !completion.has_tool_calls() {
                final_text = Some(completion.text);
                break;
            }

            turn.push(Message::Assistant {
                content: completion.text,
                tool_calls: completion.tool_calls.clone(),
            });
            for call in &completion.tool_calls {
                let result =
                    execute_tool(call, &self.registry, &self.session_id, &self.cancel).await;
                let is_error = result.outcome.is_error();
                turn.push(Message::tool_result(
                    result.tool_call_id,
                    &call.name,
                    result.outcome.content,
                    is_error,
                ));
            }
        }

        let Some(text) = final_text else {
            counter!("agent_turns_overrun_total").increment(1);
            return Err(AgentError::ToolIterationLimit {
                limit: self.max_tool_iterations,
            });
        };

        if text.trim().is_empty() {
            warn!(session_id = %self.session_id, "model returned no output");
            return Ok(TurnReply::reply(NO_OUTPUT_REPLY));
        }

        turn.push(Message::assistant(text.clone()));
        self.history.extend(turn);
        Ok(TurnReply::reply(text))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
