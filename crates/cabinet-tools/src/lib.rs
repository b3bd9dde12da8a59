//! # cabinet-tools
//!
//! The sandboxed file-operation layer of the Cabinet agent.
//!
//! Everything here is confined to a single [`workspace::Workspace`] root:
//!
//! - [`workspace::Workspace`] — path resolution with unconditional
//!   containment checking (the security boundary of the whole system)
//! - [`store::FileStore`] — list/read/write/delete with structured,
//!   non-fatal diagnostics
//! - [`digest`] — whole-workspace content digest for cross-file questions
//! - [`fs`] — the five tool implementations exposed to the model
//! - [`traits::CabinetTool`] / [`registry::ToolRegistry`] — the tool seam
//!   the runtime executes against
//!
//! ## Crate Position
//!
//! Depends on `cabinet-core`. Depended on by `cabinet-runtime`.

#![deny(unsafe_code)]

pub mod digest;
pub mod errors;
pub mod fs;
pub mod registry;
pub mod store;
pub mod traits;
pub mod utils;
pub mod workspace;

#[cfg(test)]
pub mod testutil;
