//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the resolution engine to editors and AI coding agents over stdio.
//! Each project root gets its own long-lived engine, so a "document saved"
//! event maps to a `reload_file` call instead of a full reload.
//!
//! ## Module Structure
//!
//! - `helpers`: JSON result and pagination helpers
//! - `server`: Tool router and server entry point
//! - `types`: Tool parameter and result types

mod helpers;
mod server;
pub mod types;

pub use server::{FineI18nMcpServer, run_server};
