use fine_i18n::mcp::{
    FineI18nMcpServer,
    types::{ConfigureParams, GetConfigParams, ResolveHintsParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json, fixture_with_dictionary};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = FineI18nMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["i18nFileSuffix"], ".properties");
    assert_eq!(json_result["config"]["fileSuffixes"], json!([".properties"]));
    assert_eq!(json_result["config"]["i18nFuncName"], "t");
    assert_eq!(
        json_result["config"]["selectors"],
        json!([
            "typescript",
            "typescriptreact",
            "javascript",
            "javascriptreact"
        ])
    );
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "i18nFileSuffix": ".properties, .json",
            "i18nFuncName": "$t"
        }))
        .unwrap();
    let server = FineI18nMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(
        json_result["config"]["fileSuffixes"],
        json!([".properties", ".json"])
    );
    assert_eq!(json_result["config"]["i18nFuncName"], "$t");
}

#[tokio::test]
async fn test_get_config_invalid_file_is_an_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "selectors": ["python"] }))
        .unwrap();
    let server = FineI18nMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}

// ============================================================================
// configure tests
// ============================================================================

#[tokio::test]
async fn test_configure_changes_function_name() {
    let fixture = fixture_with_dictionary().unwrap();
    let server = FineI18nMcpServer::new();

    let result = server
        .configure(Parameters(ConfigureParams {
            project_root_path: fixture.root(),
            i18n_file_suffix: None,
            i18n_func_name: Some("translate".to_string()),
            selectors: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["i18nFuncName"], "translate");
    assert_eq!(json_result["config"]["i18nFileSuffix"], ".properties");
    assert_eq!(json_result["reload"]["filesLoaded"], 1);
    assert_eq!(json_result["reload"]["keyCount"], 3);

    let hints = server
        .resolve_hints(Parameters(ResolveHintsParams {
            project_root_path: fixture.root(),
            text: Some(r#"t("home.subtitle"); translate("home.subtitle");"#.to_string()),
            file_path: None,
            language_id: None,
        }))
        .await
        .unwrap();
    let hints = extract_tool_result_json(&hints);
    assert_eq!(hints["hints"].as_array().unwrap().len(), 1);
    assert_eq!(hints["hints"][0]["offset"], 45);
}

#[tokio::test]
async fn test_configure_switches_suffix() {
    let fixture = McpTestFixture::with_files(&[
        ("i18n/en.properties", "a=props"),
        ("i18n/en.i18n.json", r#"{"a":"json","b":"B"}"#),
    ])
    .unwrap();
    let server = FineI18nMcpServer::new();

    let result = server
        .configure(Parameters(ConfigureParams {
            project_root_path: fixture.root(),
            i18n_file_suffix: Some(".i18n.json".to_string()),
            i18n_func_name: None,
            selectors: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["reload"]["filesLoaded"], 1);
    assert_eq!(json_result["reload"]["keyCount"], 2);
}

#[tokio::test]
async fn test_configure_rejects_invalid_values() {
    let fixture = fixture_with_dictionary().unwrap();
    let server = FineI18nMcpServer::new();

    let result = server
        .configure(Parameters(ConfigureParams {
            project_root_path: fixture.root(),
            i18n_file_suffix: None,
            i18n_func_name: None,
            selectors: Some(vec!["cobol".to_string()]),
        }))
        .await;
    assert!(result.is_err());

    // Previous configuration is kept
    let config = server
        .get_config(Parameters(GetConfigParams {
            project_root_path: fixture.root(),
        }))
        .await
        .unwrap();
    let config = extract_tool_result_json(&config);
    assert_eq!(config["config"]["selectors"].as_array().unwrap().len(), 4);
}
