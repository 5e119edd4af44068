use std::{
    collections::{HashMap, hash_map::Entry},
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{
    config::{ConfigPatch, find_config_file},
    core::{I18nEngine, PatchOutcome, ReloadSummary, SourceLanguage},
};

use super::helpers::{json_result, paginate, resolve_path, run_blocking};
use super::types::{
    CompletionItem, CompletionsResult, ConfigDto, ConfigValues, ConfigureParams, ConfigureResult,
    GetConfigParams, HintsResult, ListCompletionsParams, ReloadDictionaryParams, ReloadFileParams,
    ResolveHintsParams,
};

/// One engine per project root, kept for the lifetime of the server.
type EngineMap = HashMap<PathBuf, Arc<I18nEngine>>;

#[derive(Clone)]
pub struct FineI18nMcpServer {
    engines: Arc<Mutex<EngineMap>>,
    tool_router: ToolRouter<Self>,
}

impl Default for FineI18nMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl FineI18nMcpServer {
    pub fn new() -> Self {
        Self {
            engines: Arc::new(Mutex::new(HashMap::new())),
            tool_router: Self::tool_router(),
        }
    }

    /// Get the engine for a project, creating and loading it on first use.
    ///
    /// Returns the load summary when the engine was just created. The map is
    /// not locked while a new engine loads, so other projects stay usable.
    async fn engine(
        &self,
        project_root_path: &str,
    ) -> Result<(Arc<I18nEngine>, Option<ReloadSummary>), McpError> {
        let root = PathBuf::from(project_root_path);
        if let Some(engine) = self.cached_engine(&root) {
            return Ok((engine, None));
        }

        let load_root = root.clone();
        let (engine, summary) = run_blocking("dictionary load", move || {
            let engine = I18nEngine::from_root(&load_root, &ConfigPatch::default()).map_err(|e| {
                McpError::invalid_params(format!("Failed to load config: {:#}", e), None)
            })?;
            let summary = engine.full_reload();
            Ok::<_, McpError>((engine, summary))
        })
        .await??;

        let mut engines = self.engines.lock().unwrap_or_else(PoisonError::into_inner);
        match engines.entry(root) {
            // Loaded concurrently by another call; keep the first
            Entry::Occupied(existing) => Ok((Arc::clone(existing.get()), None)),
            Entry::Vacant(slot) => {
                log_load_warnings(&summary);
                let engine = Arc::new(engine);
                slot.insert(Arc::clone(&engine));
                Ok((engine, Some(summary)))
            }
        }
    }

    fn cached_engine(&self, root: &Path) -> Option<Arc<I18nEngine>> {
        let engines = self.engines.lock().unwrap_or_else(PoisonError::into_inner);
        engines.get(root).map(Arc::clone)
    }

    /// Get the effective configuration of a project
    #[tool(
        description = "Get the effective fine-i18n configuration of a project: dictionary file suffixes, translation function name, language selectors and ignore patterns."
    )]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let (engine, _) = self.engine(&params.0.project_root_path).await?;

        let root = engine.root_dir().to_path_buf();
        let from_file =
            run_blocking("config lookup", move || find_config_file(&root).is_some()).await?;
        let config_dto = ConfigDto {
            from_file,
            config: ConfigValues::from(engine.config()),
        };

        json_result(&config_dto)
    }

    /// Rebuild the dictionary from all dictionary files
    #[tool(
        description = "Rebuild the project's dictionary from scratch by re-reading every dictionary file. Use after files were added, deleted or renamed."
    )]
    pub async fn reload_dictionary(
        &self,
        params: Parameters<ReloadDictionaryParams>,
    ) -> Result<CallToolResult, McpError> {
        let (engine, initial) = self.engine(&params.0.project_root_path).await?;

        let summary = match initial {
            Some(summary) => summary,
            None => {
                let summary =
                    run_blocking("dictionary reload", move || engine.full_reload()).await?;
                log_load_warnings(&summary);
                summary
            }
        };

        json_result(&summary)
    }

    /// Merge a saved dictionary file
    #[tool(
        description = "Merge a saved dictionary file into the dictionary. Files that a full reload would not load (other suffixes, ignored paths) are ignored. Keys removed from the file stay until reload_dictionary."
    )]
    pub async fn reload_file(
        &self,
        params: Parameters<ReloadFileParams>,
    ) -> Result<CallToolResult, McpError> {
        let (engine, _) = self.engine(&params.0.project_root_path).await?;

        let path = resolve_path(engine.root_dir(), &params.0.file_path);
        let outcome = run_blocking("file reload", move || engine.reload_file(&path)).await?;
        if let PatchOutcome::Failed(warning) = &outcome {
            tracing::warn!(file = %warning.file_path, error = %warning.error, "dictionary file not loaded");
        }

        json_result(&outcome)
    }

    /// Update configuration and rebuild the dictionary
    #[tool(
        description = "Change the dictionary file suffixes, translation function name or language selectors of a project, then rebuild its dictionary. Omitted fields are kept."
    )]
    pub async fn configure(
        &self,
        params: Parameters<ConfigureParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let (engine, _) = self.engine(&params.project_root_path).await?;

        let patch = ConfigPatch {
            selectors: params.selectors,
            i18n_file_suffix: params.i18n_file_suffix,
            i18n_func_name: params.i18n_func_name,
            ignores: None,
        };
        let reconfigured = Arc::clone(&engine);
        let reload = run_blocking("reconfigure", move || reconfigured.reconfigure(&patch))
            .await?
            .map_err(|e| {
                McpError::invalid_params(format!("Invalid configuration: {:#}", e), None)
            })?;
        log_load_warnings(&reload);

        json_result(&ConfigureResult {
            config: ConfigValues::from(engine.config()),
            reload,
        })
    }

    /// Resolve translation calls in a document to dictionary text
    #[tool(
        description = "Find translation calls like t(\"key\") in a JS/TS document and return the dictionary text for each, positioned just after the key literal (0-based line, UTF-16 character). Missing keys are omitted."
    )]
    pub async fn resolve_hints(
        &self,
        params: Parameters<ResolveHintsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let (engine, _) = self.engine(&params.project_root_path).await?;

        if params.text.is_none() && params.file_path.is_none() {
            return Err(McpError::invalid_params(
                "Either text or filePath is required",
                None,
            ));
        }
        let language = match &params.language_id {
            Some(id) => Some(SourceLanguage::from_id(id).ok_or_else(|| {
                McpError::invalid_params(format!("Unknown languageId: {}", id), None)
            })?),
            None => None,
        };
        let path = params
            .file_path
            .as_deref()
            .map(|p| resolve_path(engine.root_dir(), p));

        let result = run_blocking("hint resolution", move || {
            let text = match (params.text, &path) {
                (Some(text), _) => text,
                (None, Some(path)) => read_document(path)?,
                (None, None) => String::new(),
            };
            Ok::<_, McpError>(resolve_document(&engine, &text, language, path.as_deref()))
        })
        .await??;

        json_result(&result)
    }

    /// List dictionary keys as completion candidates
    #[tool(
        description = "List dictionary keys with their decoded text as completion candidates (paginated). With linePrefix, candidates are only returned when it ends in a translation call opening such as t(\"."
    )]
    pub async fn list_completions(
        &self,
        params: Parameters<ListCompletionsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params.limit.map(|v| v as usize).unwrap_or(50).min(200);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);
        let (engine, _) = self.engine(&params.project_root_path).await?;

        let (triggered, candidates) = match &params.line_prefix {
            Some(prefix) => match engine.completions_at(prefix) {
                Some(candidates) => (true, candidates),
                None => (false, Vec::new()),
            },
            None => (true, engine.completions()),
        };

        let total_count = candidates.len();
        let items: Vec<CompletionItem> = candidates.into_iter().map(CompletionItem::from).collect();
        let (items, pagination) = paginate(items, offset, limit);

        json_result(&CompletionsResult {
            triggered,
            total_count,
            items,
            pagination,
        })
    }
}

/// Hints for a document. An explicit language wins over the path's extension.
fn resolve_document(
    engine: &I18nEngine,
    text: &str,
    language: Option<SourceLanguage>,
    path: Option<&Path>,
) -> HintsResult {
    match (language, path) {
        (Some(language), _) => HintsResult {
            language_id: language.id().to_string(),
            hints: engine.hints_with_language(text, language),
        },
        (None, Some(path)) => HintsResult {
            language_id: SourceLanguage::from_path(path)
                .map(|language| language.id().to_string())
                .unwrap_or_default(),
            hints: engine.hints(text, Some(path)),
        },
        (None, None) => HintsResult {
            language_id: SourceLanguage::default().id().to_string(),
            hints: engine.hints(text, None),
        },
    }
}

fn read_document(path: &Path) -> Result<String, McpError> {
    fs::read_to_string(path).map_err(|e| {
        McpError::invalid_params(format!("Failed to read {}: {}", path.display(), e), None)
    })
}

fn log_load_warnings(summary: &ReloadSummary) {
    for warning in &summary.warnings {
        tracing::warn!(file = %warning.file_path, error = %warning.error, "dictionary file not loaded");
    }
}

#[tool_handler]
impl ServerHandler for FineI18nMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "fine-i18n resolves translation calls like t(\"home.title\") in JS/TS code \
                 against a project's .properties/.json dictionary files.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. reload_dictionary - Rebuild the dictionary from all dictionary files\n\
                 3. reload_file - Merge one saved dictionary file\n\
                 4. configure - Change suffixes, function name or selectors\n\
                 5. resolve_hints - Get the translated text for each call in a document\n\
                 6. list_completions - List dictionary keys with their text (paginated)\n\n\
                 Every tool takes projectRootPath. The dictionary is loaded on first use; \
                 call reload_file after saving a dictionary file."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            tracing::info!("starting MCP server on stdio");
            let service = FineI18nMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
