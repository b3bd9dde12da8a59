//! `OpenAI` chat-completions backend.
//!
//! Follows the composition pattern: `provider` (entry point),
//! `message_converter`, `types`.

pub mod message_converter;
pub mod provider;
pub mod types;

pub use provider::OpenAIProvider;
pub use types::OpenAIConfig;
