//! fine-i18n - inline translation hints for JS/TS projects
//!
//! fine-i18n finds calls like `t("home.title")` in JavaScript and TypeScript
//! sources and resolves each key against the project's `.properties` and
//! `.json` dictionary files, so an editor can show the translated text next
//! to the call and offer dictionary keys as completions.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Resolution engine (dictionary loading, source scanning, binding)
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
