//! Utility functions and helpers for the resolution engine.
//!
//! - `line_index`: byte offset → editor position conversion

pub mod line_index;

pub use line_index::{LineIndex, Position};
