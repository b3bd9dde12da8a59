//! Model-provider abstraction for the Cabinet file agent.
//!
//! The runtime talks to a model through the [`LlmProvider`] trait and never
//! sees wire formats. The OpenAI chat-completions backend lives in
//! [`openai`]; [`scripted`] provides a canned provider for offline tests.

#![deny(unsafe_code)]

pub mod openai;
pub mod provider;
pub mod scripted;
pub mod stop_reason;

pub use provider::{Completion, CompletionRequest, LlmError, LlmProvider};
pub use stop_reason::StopReason;
