use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tsglot::mcp::{
    TsglotMcpServer,
    types::{GetCatalogsParams, GetConfigParams},
};

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["translationsRoot"], "./");
    assert_eq!(json_result["config"]["checkAccelerators"], true);
    assert!(json_result["config"]["ignoreContexts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "translationsRoot": "./translations",
            "ignoreTexts": ["OK"],
            "checkAccelerators": false
        }))
        .unwrap();

    let server = TsglotMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["translationsRoot"], "./translations");
    assert_eq!(json_result["config"]["ignoreTexts"], json!(["OK"]));
    assert_eq!(json_result["config"]["checkAccelerators"], false);
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    std::fs::write(fixture.root_path().join(".tsglotrc.json"), "{ nope").unwrap();

    let server = TsglotMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}

// ============================================================================
// get_catalogs tests
// ============================================================================

#[tokio::test]
async fn test_get_catalogs_part_design() {
    let fixture = McpTestFixture::with_part_design().unwrap();
    let server = TsglotMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let catalogs = json_result["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 1);

    let catalog = &catalogs[0];
    assert!(
        catalog["filePath"]
            .as_str()
            .unwrap()
            .ends_with("translations/PartDesign_ja.ts")
    );
    assert_eq!(catalog["language"], "ja");
    assert_eq!(catalog["contextCount"], 110);
    assert_eq!(catalog["messageCount"], 995);
    assert_eq!(catalog["finishedCount"], 966);
    assert_eq!(catalog["unfinishedCount"], 29);
    assert_eq!(catalog["obsoleteCount"], 0);
    assert_eq!(catalog["completion"], 97.1);
}

#[tokio::test]
async fn test_get_catalogs_reports_skipped_and_unreadable() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_catalog("app.ts", "export const answer = 42;\n")
        .unwrap();
    fixture
        .write_catalog(
            "broken_ja.ts",
            "<?xml version=\"1.0\"?>\n<TS version=\"2.1\">\n<context>\n</TS>\n",
        )
        .unwrap();

    let server = TsglotMcpServer::new();
    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert!(json_result["catalogs"].as_array().unwrap().is_empty());

    let skipped = json_result["skippedFiles"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert!(skipped[0].as_str().unwrap().ends_with("app.ts"));

    let unreadable = json_result["unreadableFiles"].as_array().unwrap();
    assert_eq!(unreadable.len(), 1);
    assert!(unreadable[0].as_str().unwrap().ends_with("broken_ja.ts"));
}
