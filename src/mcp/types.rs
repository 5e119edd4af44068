use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    core::{CompletionCandidate, ReloadSummary, ResolvedHint},
};

// ============================================================
// Parameters
// ============================================================

/// Parameters for tools that only need the project
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

/// Parameters for get_config
pub type GetConfigParams = ProjectParams;

/// Parameters for reload_dictionary
pub type ReloadDictionaryParams = ProjectParams;

/// Parameters for reload_file
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReloadFileParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Saved file, absolute or relative to the project root
    pub file_path: String,
}

/// Parameters for configure. Omitted fields keep their current value.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Comma-separated dictionary file suffixes, e.g. ".properties,.json"
    pub i18n_file_suffix: Option<String>,
    /// Translation function name, e.g. "t"
    pub i18n_func_name: Option<String>,
    /// Language identifiers to resolve hints for
    pub selectors: Option<Vec<String>>,
}

/// Parameters for resolve_hints. Give `text`, `filePath`, or both.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveHintsParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Document text; read from `filePath` when omitted
    pub text: Option<String>,
    /// Document path, absolute or relative to the project root
    pub file_path: Option<String>,
    /// Language identifier (typescript, typescriptreact, javascript, javascriptreact)
    pub language_id: Option<String>,
}

/// Parameters for list_completions
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCompletionsParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Line text up to the cursor. When given, candidates are only listed
    /// right after a translation call opening like `t("`
    pub line_prefix: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

// ============================================================
// Config Types (get_config, configure)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if a config file exists for the project
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub selectors: Vec<String>,
    pub i18n_file_suffix: String,
    /// `i18nFileSuffix` split into its items
    pub file_suffixes: Vec<String>,
    pub i18n_func_name: String,
    pub ignores: Vec<String>,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        Self {
            file_suffixes: c.file_suffixes(),
            selectors: c.selectors,
            i18n_file_suffix: c.i18n_file_suffix,
            i18n_func_name: c.i18n_func_name,
            ignores: c.ignores,
        }
    }
}

/// Result of configure
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureResult {
    pub config: ConfigValues,
    pub reload: ReloadSummary,
}

// ============================================================
// Hints Types (resolve_hints)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HintsResult {
    pub language_id: String,
    pub hints: Vec<ResolvedHint>,
}

// ============================================================
// Completion Types (list_completions)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionsResult {
    /// False when `linePrefix` was given but does not open a translation call
    pub triggered: bool,
    pub total_count: usize,
    pub items: Vec<CompletionItem>,
    pub pagination: Pagination,
}

/// A completion entry ready for an editor list
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    pub key: String,
    pub text: String,
    /// `key(text)`
    pub label: String,
    /// `key: text`
    pub detail: String,
    pub insert_text: String,
}

impl From<CompletionCandidate> for CompletionItem {
    fn from(c: CompletionCandidate) -> Self {
        Self {
            label: c.label(),
            detail: c.detail(),
            insert_text: c.insert_text().to_string(),
            key: c.key,
            text: c.text,
        }
    }
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
