use std::path::{Path, PathBuf};

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use super::types::Pagination;

/// Serialize a tool result as pretty JSON text content.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Run file I/O or parsing on the blocking pool so the request loop stays free.
pub async fn run_blocking<T, F>(task: &str, f: F) -> Result<T, McpError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| McpError::internal_error(format!("{} join failed: {}", task, e), None))
}

/// Resolve a tool path argument against the project root.
pub fn resolve_path(root: &Path, path: &str) -> PathBuf {
    root.join(path)
}

/// Take one page of `items`.
pub fn paginate<T>(items: Vec<T>, offset: usize, limit: usize) -> (Vec<T>, Pagination) {
    let total_count = items.len();
    let page: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
    let has_more = offset + page.len() < total_count;
    (
        page,
        Pagination {
            offset,
            limit,
            has_more,
        },
    )
}
