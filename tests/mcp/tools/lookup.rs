use rmcp::handler::server::wrapper::Parameters;
use tsglot::mcp::{TsglotMcpServer, types::LookupParams};

use crate::{McpTestFixture, extract_tool_result_json};

fn lookup_params(fixture: &McpTestFixture, context: &str, source: &str) -> LookupParams {
    LookupParams {
        project_root_path: fixture.root(),
        context: context.to_string(),
        source: source.to_string(),
        comment: None,
        count: None,
        language: None,
    }
}

#[tokio::test]
async fn test_lookup_finished() {
    let fixture = McpTestFixture::with_part_design().unwrap();
    let server = TsglotMcpServer::new();

    let params = lookup_params(&fixture, "Workbench", "&Part Design");
    let result = server.lookup(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["translation"], "パートデザイン(&P)");
    assert_eq!(json_result["status"], "finished");
    assert_eq!(json_result["language"], "ja");
    assert_eq!(json_result["fallback"], false);
}

#[tokio::test]
async fn test_lookup_unfinished_falls_back() {
    let fixture = McpTestFixture::with_part_design().unwrap();
    let server = TsglotMcpServer::new();

    let params = lookup_params(&fixture, "TaskHoleParameters", "Drill angle");
    let result = server.lookup(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["translation"], "Drill angle");
    assert_eq!(json_result["status"], "unfinished");
    assert_eq!(json_result["fallback"], true);
}

#[tokio::test]
async fn test_lookup_unknown_key() {
    let fixture = McpTestFixture::with_part_design().unwrap();
    let server = TsglotMcpServer::new();

    let mut params = lookup_params(&fixture, "Workbench", "&Sketch");
    params.comment = Some("toolbar".to_string());
    let result = server.lookup(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    // Falls back to the comment-less message.
    assert_eq!(json_result["translation"], "スケッチ(&S)");
    assert_eq!(json_result["comment"], "toolbar");

    let params = lookup_params(&fixture, "Workbench", "&Assembly");
    let result = server.lookup(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["translation"], "&Assembly");
    assert!(json_result["status"].is_null());
    assert_eq!(json_result["fallback"], true);
}

#[tokio::test]
async fn test_lookup_wrong_language() {
    let fixture = McpTestFixture::with_part_design().unwrap();
    let server = TsglotMcpServer::new();

    let mut params = lookup_params(&fixture, "Workbench", "&Sketch");
    params.language = Some("fr".to_string());

    assert!(server.lookup(Parameters(params)).await.is_err());
}
