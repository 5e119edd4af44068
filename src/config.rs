use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::parsers::source::SourceLanguage;

pub const CONFIG_FILE_NAME: &str = ".finei18nrc.json";

/// Directories holding third-party dependencies, never scanned for dictionaries.
pub const DEPENDENCY_DIR_PATTERNS: &[&str] = &["**/node_modules/**"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Editor language identifiers whose documents are scanned.
    #[serde(default = "default_selectors")]
    pub selectors: Vec<String>,
    /// Comma-separated dictionary file suffixes, e.g. `.properties,.i18n.json`.
    #[serde(default = "default_i18n_file_suffix")]
    pub i18n_file_suffix: String,
    /// Name of the translation function, e.g. `t` for `t("key")`.
    #[serde(default = "default_i18n_func_name")]
    pub i18n_func_name: String,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
}

fn default_selectors() -> Vec<String> {
    SourceLanguage::ALL
        .iter()
        .map(|lang| lang.id().to_string())
        .collect()
}

fn default_i18n_file_suffix() -> String {
    ".properties".to_string()
}

fn default_i18n_func_name() -> String {
    "t".to_string()
}

fn default_ignores() -> Vec<String> {
    DEPENDENCY_DIR_PATTERNS.iter().map(|p| p.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selectors: default_selectors(),
            i18n_file_suffix: default_i18n_file_suffix(),
            i18n_func_name: default_i18n_func_name(),
            ignores: default_ignores(),
        }
    }
}

/// Partial configuration update. `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPatch {
    pub selectors: Option<Vec<String>>,
    pub i18n_file_suffix: Option<String>,
    pub i18n_func_name: Option<String>,
    pub ignores: Option<Vec<String>>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Config {
    /// Dictionary file suffixes, in merge order.
    ///
    /// Items are trimmed and empty items dropped: `".properties, ,.json"`
    /// gives `[".properties", ".json"]`.
    pub fn file_suffixes(&self) -> Vec<String> {
        self.i18n_file_suffix
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    /// Languages whose documents are scanned. Unknown identifiers are ignored.
    pub fn languages(&self) -> Vec<SourceLanguage> {
        self.selectors
            .iter()
            .filter_map(|id| SourceLanguage::from_id(id))
            .collect()
    }

    /// Return a copy with the patch applied.
    pub fn merged(&self, patch: &ConfigPatch) -> Self {
        Self {
            selectors: patch
                .selectors
                .clone()
                .unwrap_or_else(|| self.selectors.clone()),
            i18n_file_suffix: patch
                .i18n_file_suffix
                .clone()
                .unwrap_or_else(|| self.i18n_file_suffix.clone()),
            i18n_func_name: patch
                .i18n_func_name
                .clone()
                .unwrap_or_else(|| self.i18n_func_name.clone()),
            ignores: patch.ignores.clone().unwrap_or_else(|| self.ignores.clone()),
        }
    }

    /// Validate configuration values.
    ///
    /// Returns an error if the function name is empty, a selector is unknown,
    /// or an ignore pattern is not a valid glob.
    pub fn validate(&self) -> Result<()> {
        if self.i18n_func_name.trim().is_empty() {
            bail!("'i18nFuncName' must not be empty");
        }

        for id in &self.selectors {
            if SourceLanguage::from_id(id).is_none() {
                bail!(
                    "Unknown language in 'selectors': \"{}\" (expected one of: {})",
                    id,
                    SourceLanguage::ALL.map(SourceLanguage::id).join(", ")
                );
            }
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
