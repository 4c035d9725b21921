use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::issues::{Issue, Report};
use crate::rules::CheckRule;

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCatalogsParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanIssuesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Only report these rules (default: all)
    pub rules: Option<Vec<CheckRule>>,
    /// Number of items to skip (default: 0)
    pub offset: Option<u32>,
    /// Maximum number of items to return (default: 20, max: 100)
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Context name, usually the class name
    pub context: String,
    /// Source text as written in the code
    pub source: String,
    /// Disambiguation comment
    pub comment: Option<String>,
    /// Count for plural (numerus) messages
    pub count: Option<u64>,
    /// Target language; required when several are present
    pub language: Option<String>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub translations_root: String,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_texts: Vec<String>,
    pub ignore_contexts: Vec<String>,
    pub check_accelerators: bool,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            translations_root: c.translations_root,
            includes: c.includes,
            ignores: c.ignores,
            ignore_texts: c.ignore_texts,
            ignore_contexts: c.ignore_contexts,
            check_accelerators: c.check_accelerators,
        }
    }
}

// ============================================================
// Catalog Types (get_catalogs)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogsResult {
    pub translations_dir: String,
    pub catalogs: Vec<CatalogInfo>,
    /// `.ts` files that are TypeScript sources, not catalogs
    pub skipped_files: Vec<String>,
    /// Catalogs that could not be parsed
    pub unreadable_files: Vec<String>,
}

/// One parsed catalog file.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub file_path: String,
    pub language: Option<String>,
    pub source_language: Option<String>,
    pub context_count: usize,
    pub message_count: usize,
    pub finished_count: usize,
    pub unfinished_count: usize,
    pub obsolete_count: usize,
    /// Finished share of active messages, in percent
    pub completion: f64,
}

// ============================================================
// Scan Types (scan_overview, scan_issues)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub total_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    /// Rules with at least one issue, in rule order
    pub rules: Vec<RuleStats>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleStats {
    pub rule: String,
    pub severity: String,
    pub total_count: usize,
    pub affected_catalogs: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuesScanResult {
    pub total_count: usize,
    pub items: Vec<IssueItem>,
    pub pagination: Pagination,
}

/// One issue, flattened for JSON.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<usize>,
    /// Context name, for issues about a message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        let location = issue.location();
        let position = location.position();
        let message_ctx = issue.message_context();
        Self {
            rule: issue.rule().to_string(),
            severity: issue.severity().to_string(),
            file_path: location.file_path().to_string(),
            line: position.map(|(line, _)| line),
            col: position.map(|(_, col)| col),
            context: message_ctx.map(|c| c.key.context.clone()),
            source: message_ctx.map(|c| c.key.source.clone()),
            translation: message_ctx.map(|c| c.translation.clone()),
            message: issue.message(),
            details: issue.details(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

// ============================================================
// Lookup Types (lookup)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub context: String,
    pub source: String,
    pub comment: String,
    pub language: Option<String>,
    /// Text the application would display
    pub translation: String,
    /// Catalog status of the message; absent when the key is unknown
    pub status: Option<String>,
    /// True when the source is shown because no finished translation exists
    pub fallback: bool,
}
