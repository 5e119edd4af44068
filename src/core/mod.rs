//! Core resolution engine.
//!
//! Dictionary files are discovered, parsed and merged into a shared store.
//! Source documents are scanned for translation calls, and each call's key is
//! bound to its decoded dictionary value.
//!
//! ## Module Structure
//!
//! - `codec`: Decoding of escaped dictionary values
//! - `dictionary`: Merge-only dictionary store and read snapshots
//! - `discovery`: Dictionary file enumeration by suffix
//! - `engine`: `I18nEngine`, the entry point used by hosts
//! - `loader`: Parallel reading and parsing of dictionary files
//! - `parsers`: `.properties`, `.json` and JS/TS source parsers
//! - `resolve`: Hint and completion binding
//! - `scanner`: Translation call extraction from source documents
//! - `utils`: Offset to line/column conversion

pub mod codec;
pub mod dictionary;
pub mod discovery;
pub mod engine;
pub mod loader;
pub mod parsers;
pub mod resolve;
pub mod scanner;
pub mod utils;

pub use codec::decode;
pub use dictionary::{Dictionary, DictionaryStore, Entries};
pub use discovery::{DiscoveryResult, discover, is_discoverable};
pub use engine::{I18nEngine, PatchOutcome, ReloadSummary};
pub use loader::{FileLoadWarning, LoadResult, load_file, load_files};
pub use parsers::source::SourceLanguage;
pub use resolve::{
    CompletionCandidate, ResolvedHint, is_completion_trigger, list_completions, resolve_hints,
};
pub use scanner::{CallSite, scan, scan_with_language};
