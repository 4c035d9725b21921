use super::{CommandResult, CommandSummary};
use crate::core::CheckContext;
use crate::issues::{Issue, Severity};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    ctx: &CheckContext,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort();

    let parse_errors_reported = issues.iter().any(|i| matches!(i, Issue::ParseError(_)));
    let parse_error_count = if parse_errors_reported {
        0
    } else {
        ctx.parse_errors().len()
    };

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    let catalogs_checked = ctx.ts_files().len();
    let messages_checked = ctx.ts_files().iter().map(|f| f.message_count()).sum();

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        parse_error_count,
        catalogs_checked,
        messages_checked,
    }
}
