use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tsglot::{
    mcp::{
        TsglotMcpServer,
        types::{ScanIssuesParams, ScanOverviewParams},
    },
    rules::CheckRule,
};

use crate::{McpTestFixture, assert_pagination, extract_tool_result_json};

const MISMATCH_CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ja">
<context>
    <name>TaskPadParameters</name>
    <message>
        <source>Offset %1 from %2</source>
        <translation>%2 からのオフセット</translation>
    </message>
    <message>
        <source>&amp;Reversed</source>
        <translation>反転</translation>
    </message>
</context>
</TS>
"#;

fn scan_params(fixture: &McpTestFixture) -> ScanIssuesParams {
    ScanIssuesParams {
        project_root_path: fixture.root(),
        rules: None,
        offset: None,
        limit: None,
    }
}

// ============================================================================
// scan_overview tests
// ============================================================================

#[tokio::test]
async fn test_scan_overview_part_design() {
    let fixture = McpTestFixture::with_part_design().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 64);
    assert_eq!(json_result["errorCount"], 0);
    assert_eq!(json_result["warningCount"], 64);

    let rules = json_result["rules"].as_array().unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0]["rule"], "unfinished");
    assert_eq!(rules[0]["severity"], "warning");
    assert_eq!(rules[0]["totalCount"], 29);
    assert_eq!(rules[1]["rule"], "untranslated");
    assert_eq!(rules[1]["totalCount"], 35);

    let affected = rules[0]["affectedCatalogs"].as_array().unwrap();
    assert_eq!(affected.len(), 1);
}

#[tokio::test]
async fn test_scan_overview_clean_project() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });

    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
    assert_eq!(json_result["rules"], json!([]));
}

// ============================================================================
// scan_issues tests
// ============================================================================

#[tokio::test]
async fn test_scan_issues_placeholder_and_accelerator() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_catalog("PartDesign_ja.ts", MISMATCH_CATALOG)
        .unwrap();
    let server = TsglotMcpServer::new();

    let result = server
        .scan_issues(Parameters(scan_params(&fixture)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    let items = json_result["items"].as_array().unwrap();

    let placeholder = items
        .iter()
        .find(|i| i["rule"] == "placeholder-mismatch")
        .unwrap();
    assert_eq!(placeholder["severity"], "error");
    assert_eq!(placeholder["context"], "TaskPadParameters");
    assert_eq!(placeholder["source"], "Offset %1 from %2");
    assert_eq!(placeholder["translation"], "%2 からのオフセット");
    assert_eq!(placeholder["line"], 6);
    assert_eq!(placeholder["details"], "missing %1");

    let accelerator = items
        .iter()
        .find(|i| i["rule"] == "accelerator-mismatch")
        .unwrap();
    assert_eq!(accelerator["severity"], "warning");
    assert_eq!(accelerator["source"], "&Reversed");
}

#[tokio::test]
async fn test_scan_issues_filtered_by_rule() {
    let fixture = McpTestFixture::with_part_design().unwrap();
    let server = TsglotMcpServer::new();

    let mut params = scan_params(&fixture);
    params.rules = Some(vec![CheckRule::Untranslated]);

    let result = server.scan_issues(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 35);
    let items = json_result["items"].as_array().unwrap();
    assert_eq!(items.len(), 20);
    assert!(items.iter().all(|i| i["rule"] == "untranslated"));
    assert_pagination(&json_result, 0, 20, true);
}

#[tokio::test]
async fn test_scan_issues_pagination() {
    let fixture = McpTestFixture::with_part_design().unwrap();
    let server = TsglotMcpServer::new();

    let mut params = scan_params(&fixture);
    params.offset = Some(60);
    params.limit = Some(500);

    let result = server.scan_issues(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 64);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 4);
    assert_pagination(&json_result, 60, 100, false);
}

#[tokio::test]
async fn test_scan_issues_respects_ignore_texts() {
    let fixture = McpTestFixture::with_part_design().unwrap();
    fixture
        .write_config(&json!({ "ignoreTexts": ["OK", "Body"] }))
        .unwrap();
    let server = TsglotMcpServer::new();

    let mut params = scan_params(&fixture);
    params.rules = Some(vec![CheckRule::Untranslated]);

    let result = server.scan_issues(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 33);
}

#[tokio::test]
async fn test_scan_issues_missing_translations_root() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "translationsRoot": "./i18n" }))
        .unwrap();
    let server = TsglotMcpServer::new();

    let result = server.scan_issues(Parameters(scan_params(&fixture))).await;

    assert!(result.is_err());
}
