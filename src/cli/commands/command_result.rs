use crate::core::{CatalogStats, MessageKey, TranslationStatus};
use crate::issues::{Issue, ObsoleteIssue};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Lookup(LookupSummary),
    Stats(StatsSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct LookupSummary {
    pub key: MessageKey,
    pub language: Option<String>,
    /// Text the application would display.
    pub translation: String,
    /// Status of the catalog entry; `None` when the key is unknown.
    pub status: Option<TranslationStatus>,
    /// True when the source text is shown because no finished
    /// translation exists.
    pub fallback: bool,
}

#[derive(Debug)]
pub struct CatalogRow {
    pub file_path: String,
    pub language: String,
    pub stats: CatalogStats,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub rows: Vec<CatalogRow>,
}

#[derive(Debug)]
pub struct CleanSummary {
    pub removed: Vec<ObsoleteIssue>,
    pub file_count: usize,
    /// Catalogs with obsolete entries left alone because of schema errors.
    pub skipped: Vec<String>,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running tsglot commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Files that failed to parse and are not listed in `issues`.
    pub parse_error_count: usize,
    /// Number of catalogs that were read.
    pub catalogs_checked: usize,
    /// Number of messages in those catalogs.
    pub messages_checked: usize,
}

impl CommandResult {
    /// Result of a command that reports no issues.
    pub fn quiet(summary: CommandSummary) -> Self {
        Self {
            summary,
            error_count: 0,
            warning_count: 0,
            exit_on_errors: true,
            issues: Vec::new(),
            parse_error_count: 0,
            catalogs_checked: 0,
            messages_checked: 0,
        }
    }
}
