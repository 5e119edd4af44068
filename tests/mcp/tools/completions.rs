use fine_i18n::mcp::{FineI18nMcpServer, types::ListCompletionsParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, assert_pagination, extract_tool_result_json, fixture_with_dictionary};

fn params(
    fixture: &McpTestFixture,
    line_prefix: Option<&str>,
    offset: Option<u32>,
    limit: Option<u32>,
) -> Parameters<ListCompletionsParams> {
    Parameters(ListCompletionsParams {
        project_root_path: fixture.root(),
        line_prefix: line_prefix.map(String::from),
        offset,
        limit,
    })
}

#[tokio::test]
async fn test_list_completions_all() {
    let fixture = fixture_with_dictionary().unwrap();
    let server = FineI18nMcpServer::new();

    let result = server
        .list_completions(params(&fixture, None, None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["triggered"], true);
    assert_eq!(json_result["totalCount"], 3);
    assert_pagination(&json_result, 0, 50, false);

    let items = json_result["items"].as_array().unwrap();
    let keys: Vec<_> = items.iter().map(|i| i["key"].as_str().unwrap()).collect();
    assert_eq!(keys, vec!["home.blank", "home.subtitle", "home.title"]);
    assert_eq!(
        items[2],
        json!({
            "key": "home.title",
            "text": "首页",
            "label": "home.title(首页)",
            "detail": "home.title: 首页",
            "insertText": "home.title"
        })
    );
}

#[tokio::test]
async fn test_list_completions_pagination() {
    let fixture = fixture_with_dictionary().unwrap();
    let server = FineI18nMcpServer::new();

    let result = server
        .list_completions(params(&fixture, None, Some(1), Some(1)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    assert_pagination(&json_result, 1, 1, true);
    assert_eq!(json_result["items"][0]["key"], "home.subtitle");
}

#[tokio::test]
async fn test_list_completions_after_trigger() {
    let fixture = fixture_with_dictionary().unwrap();
    let server = FineI18nMcpServer::new();

    let result = server
        .list_completions(params(&fixture, Some("<h1>{t('"), None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["triggered"], true);
    assert_eq!(json_result["totalCount"], 3);
}

#[tokio::test]
async fn test_list_completions_without_trigger() {
    let fixture = fixture_with_dictionary().unwrap();
    let server = FineI18nMcpServer::new();

    let result = server
        .list_completions(params(&fixture, Some("const x = t("), None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["triggered"], false);
    assert_eq!(json_result["totalCount"], 0);
    assert_eq!(json_result["items"], json!([]));
}

#[tokio::test]
async fn test_list_completions_limit_is_capped() {
    let fixture = fixture_with_dictionary().unwrap();
    let server = FineI18nMcpServer::new();

    let result = server
        .list_completions(params(&fixture, None, None, Some(10_000)))
        .await
        .unwrap();

    assert_pagination(&extract_tool_result_json(&result), 0, 200, false);
}
