//! Canned provider for offline tests and scripted demos.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::provider::{Completion, CompletionRequest, LlmError, LlmProvider};

/// A provider that replays a fixed queue of completions.
///
/// Each `complete` call pops the next scripted completion. Once the queue
/// is exhausted every call returns an empty completion, which the runtime
/// surfaces as a no-output response.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    queue: Mutex<VecDeque<Completion>>,
}

impl ScriptedProvider {
    /// Build a provider that will serve `completions` in order.
    #[must_use]
    pub fn new(completions: Vec<Completion>) -> Self {
        Self {
            queue: Mutex::new(completions.into()),
        }
    }

    /// Append another completion to the end of the script.
    pub fn push(&self, completion: Completion) {
        self.queue
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push_back(completion);
    }

    /// Number of unserved completions remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, _request: CompletionRequest) -> Result<Completion, LlmError> {
        let next = self
            .queue
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front();
        Ok(next.unwrap_or_default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
