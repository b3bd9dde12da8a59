//! Shared helpers for tool implementations.

pub mod fs_errors;
pub mod schema;
pub mod validation;
