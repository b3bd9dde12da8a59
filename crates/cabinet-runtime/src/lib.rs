//! Orchestration layer for the Cabinet file agent.
//!
//! Wires the pieces together: every user turn passes through the intent
//! gate, then (if accepted) drives the model/tool loop in [`agent`] until
//! the model produces a final answer. Conversation state lives in a bounded
//! [`history::History`]; [`transcript`] persists finished sessions.

#![deny(unsafe_code)]

pub mod agent;
pub mod config;
pub mod errors;
pub mod executor;
pub mod gate;
pub mod history;
pub mod prompts;
pub mod transcript;

pub use agent::FileAgent;
pub use config::RuntimeConfig;
pub use errors::AgentError;
