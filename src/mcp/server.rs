use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    cli::{args::CommonArgs, commands::lookup::resolve},
    config::load_config,
    core::{CatalogStats, CheckContext, MessageKey},
    issues::{Issue, Report, Rule, Severity},
    rules::run_checks,
};

use super::types::{
    CatalogInfo, CatalogsResult, ConfigDto, ConfigValues, GetCatalogsParams, GetConfigParams,
    IssueItem, IssuesScanResult, LookupParams, LookupResult, Pagination, RuleStats,
    ScanIssuesParams, ScanOverviewParams, ScanOverviewResult,
};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

#[derive(Clone)]
pub struct TsglotMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TsglotMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TsglotMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current tsglot configuration
    #[tool(description = "Get the current tsglot configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// List translation catalogs with their completion
    #[tool(
        description = "List the Qt translation catalogs (.ts files) of the project with language and message counts."
    )]
    pub async fn get_catalogs(
        &self,
        params: Parameters<GetCatalogsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;
        let loaded = ctx.catalogs();

        let catalogs = loaded
            .files
            .iter()
            .map(|file| {
                let stats = CatalogStats::of(file);
                CatalogInfo {
                    file_path: file.file_path.clone(),
                    language: file.language.clone(),
                    source_language: file.source_language.clone(),
                    context_count: stats.contexts,
                    message_count: stats.messages,
                    finished_count: stats.finished,
                    unfinished_count: stats.unfinished,
                    obsolete_count: stats.obsolete,
                    completion: (stats.completion() * 10.0).round() / 10.0,
                }
            })
            .collect();

        json_result(&CatalogsResult {
            translations_dir: ctx.translations_dir.to_string_lossy().to_string(),
            catalogs,
            skipped_files: loaded.skipped.clone(),
            unreadable_files: loaded
                .parse_errors
                .iter()
                .map(|e| e.file_path.clone())
                .collect(),
        })
    }

    /// Get overview statistics of all catalog issues
    #[tool(
        description = "Get issue counts per rule without detailed items. Use this first to understand the overall state before diving into details."
    )]
    pub async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;
        let issues = run_checks(&ctx, &[]);

        let mut per_rule: BTreeMap<Rule, (Severity, usize, BTreeSet<String>)> = BTreeMap::new();
        for issue in &issues {
            let entry = per_rule
                .entry(issue.rule())
                .or_insert_with(|| (issue.severity(), 0, BTreeSet::new()));
            entry.1 += 1;
            entry.2.insert(issue_file(issue));
        }

        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();

        json_result(&ScanOverviewResult {
            total_count: issues.len(),
            error_count,
            warning_count: issues.len() - error_count,
            rules: per_rule
                .into_iter()
                .map(|(rule, (severity, total_count, files))| RuleStats {
                    rule: rule.to_string(),
                    severity: severity.to_string(),
                    total_count,
                    affected_catalogs: files.into_iter().collect(),
                })
                .collect(),
        })
    }

    /// Scan for catalog issues
    #[tool(
        description = "List catalog issues (placeholder mismatches, unfinished, untranslated, duplicates, ...). Optionally filter by rule ids. Returns paginated list."
    )]
    pub async fn scan_issues(
        &self,
        params: Parameters<ScanIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let ctx = load_context(&params.project_root_path)?;
        let rules = params.rules.unwrap_or_default();
        let issues = run_checks(&ctx, &rules);

        let total_count = issues.len();
        let items: Vec<IssueItem> = issues
            .iter()
            .skip(offset)
            .take(limit)
            .map(IssueItem::from)
            .collect();
        let has_more = offset + items.len() < total_count;

        json_result(&IssuesScanResult {
            total_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Look up a translation
    #[tool(
        description = "Translate a (context, source) pair the way the application would at runtime. Falls back to the source text when no finished translation exists."
    )]
    pub async fn lookup(
        &self,
        params: Parameters<LookupParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_context(&params.project_root_path)?;

        let key = MessageKey::new(
            params.context,
            params.source,
            params.comment.unwrap_or_default(),
        );
        let summary = resolve(&ctx, key, params.count, params.language.as_deref())
            .map_err(|e| McpError::internal_error(format!("Lookup failed: {}", e), None))?;

        json_result(&LookupResult {
            context: summary.key.context,
            source: summary.key.source,
            comment: summary.key.comment,
            language: summary.language,
            translation: summary.translation,
            status: summary.status.map(|s| s.to_string()),
            fallback: summary.fallback,
        })
    }
}

fn load_context(project_root_path: &str) -> Result<CheckContext, McpError> {
    let common = CommonArgs {
        path: PathBuf::from(project_root_path),
        translations_root: None,
        verbose: false,
    };
    CheckContext::new(&common)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))
}

fn issue_file(issue: &Issue) -> String {
    issue.location().file_path().to_string()
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for TsglotMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "tsglot MCP helps AI agents review and complete Qt translation catalogs (.ts files).\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_catalogs - List catalogs with language and completion\n\
                 3. scan_overview - Issue counts per rule\n\
                 4. scan_issues - Detailed issue list (paginated, filter by rule)\n\
                 5. lookup - Translate a (context, source) pair with the runtime fallback\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the overall state\n\
                 2. Fix errors first: parse-error, schema, duplicate-message, placeholder-mismatch\n\
                 3. Then work through unfinished and untranslated messages\n\
                 4. Use lookup to confirm what users will see"
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
            let service = TsglotMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
