//! # cabinet-core
//!
//! Foundation types and shared vocabulary for the Cabinet file agent.
//!
//! This crate provides what every other Cabinet crate depends on:
//!
//! - **Messages**: [`messages::Message`] enum with `User`, `Assistant`,
//!   `ToolResult` variants, plus [`messages::ToolCall`]
//! - **Tool vocabulary**: [`tools::Tool`] definitions and
//!   [`tools::ToolOutcome`] results with content, details, and error flag
//! - **Logging**: [`logging::init`] for tracing setup (stderr writer so
//!   stdio transports stay clean)
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other cabinet crates.

#![deny(unsafe_code)]

pub mod logging;
pub mod messages;
pub mod tools;
