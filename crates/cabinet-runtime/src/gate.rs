//! Intent gate: classifies each utterance before the agent may act.
//!
//! Every user turn is screened first. Only an explicit accept reaches the
//! tool loop; a reject gets the canned refusal and leaves the conversation
//! window untouched. Classifier output that parses to neither token is
//! [`IntentDecision::Ambiguous`] and resolved by the configured
//! [`AmbiguousPolicy`].

use async_trait::async_trait;
use regex::Regex;
use std::sync::Arc;
use std::sync::LazyLock;
use tracing::{debug, warn};

use cabinet_core::messages::Message;
use cabinet_llm::{CompletionRequest, LlmError, LlmProvider};

use crate::prompts::FILTER_PROMPT;

/// Outcome of screening one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentDecision {
    /// The request is file-related; proceed to the tool loop.
    Accept,
    /// The request is out of scope; refuse without acting.
    Reject,
    /// The classifier output could not be parsed.
    Ambiguous,
}

/// How [`IntentDecision::Ambiguous`] resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguousPolicy {
    /// Treat ambiguous output as an accept.
    FailOpen,
    /// Treat ambiguous output as a reject.
    #[default]
    FailClosed,
}

impl AmbiguousPolicy {
    /// Whether `decision` permits the turn to proceed under this policy.
    #[must_use]
    pub fn allows(self, decision: IntentDecision) -> bool {
        match decision {
            IntentDecision::Accept => true,
            IntentDecision::Reject => false,
            IntentDecision::Ambiguous => matches!(self, Self::FailOpen),
        }
    }
}

/// A screening strategy for incoming utterances.
#[async_trait]
pub trait IntentGate: Send + Sync {
    /// Classify one utterance.
    async fn screen(&self, utterance: &str) -> Result<IntentDecision, LlmError>;
}

/// Parse raw classifier output into a decision.
///
/// Tolerates surrounding whitespace, code fences, and casing; anything
/// that is not exactly `accept` or `reject` after normalization is
/// [`IntentDecision::Ambiguous`].
#[must_use]
pub fn parse_decision(raw: &str) -> IntentDecision {
    let normalized = raw.trim().trim_matches('`').trim().to_lowercase();
    match normalized.as_str() {
        "accept" => IntentDecision::Accept,
        "reject" => IntentDecision::Reject,
        _ => IntentDecision::Ambiguous,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Model-backed gate
// ─────────────────────────────────────────────────────────────────────────────

/// Gate that asks the model to classify the utterance.
///
/// Sends only the current utterance, never the conversation history, so
/// the classification cannot be steered by earlier turns.
pub struct ModelGate {
    provider: Arc<dyn LlmProvider>,
}

impl ModelGate {
    /// Build a gate over `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl IntentGate for ModelGate {
    async fn screen(&self, utterance: &str) -> Result<IntentDecision, LlmError> {
        let request =
            CompletionRequest::without_tools(FILTER_PROMPT, vec![Message::user(utterance)]);
        let completion = self.provider.complete(request).await?;
        let decision = parse_decision(&completion.text);
        if decision == IntentDecision::Ambiguous {
            warn!(raw = %completion.text, "unparseable intent classification");
        } else {
            debug!(?decision, "intent screened");
        }
        Ok(decision)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rule-based gate
// ─────────────────────────────────────────────────────────────────────────────

static FILE_INTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(files?|folders?|workspace|documents?|notes?|read|write|create|append|delete|remove|list|show|open|save|contents?|summar)",
    )
    .unwrap_or_else(|e| panic!("invalid file-intent pattern: {e}"))
});

/// Offline gate matching file-vocabulary keywords.
///
/// Useful for scripted runs and tests where no model is available. Never
/// returns [`IntentDecision::Ambiguous`].
#[derive(Debug, Default)]
pub struct RuleGate;

#[async_trait]
impl IntentGate for RuleGate {
    async fn screen(&self, utterance: &str) -> Result<IntentDecision, LlmError> {
        if FILE_INTENT.is_match(utterance) {
            Ok(IntentDecision::Accept)
        } else {
            Ok(IntentDecision::Reject)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
