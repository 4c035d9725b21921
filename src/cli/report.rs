//! Report formatting and printing utilities.
//!
//! Issues are shown in cargo-style format. Separate from core logic to
//! allow tsglot to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CleanSummary, CommandResult, CommandSummary, InitSummary, LookupSummary, StatsSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, Severity};
use crate::utils::{MAX_DISPLAY_WIDTH, one_line};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(catalogs: usize, messages: usize) {
    print_success_to(catalogs, messages, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(catalogs: usize, messages: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} {}, {} {} - no issues found",
        catalogs,
        if catalogs == 1 { "catalog" } else { "catalogs" },
        messages,
        if messages == 1 { "message" } else { "messages" }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (run {} for details)",
            "warning:".bold().yellow(),
            count,
            "check parse-error".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();

    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    match loc.position() {
        Some((line, col)) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                loc.file_path(),
                line,
                col
            );
        }
        None => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), loc.file_path());
        }
    }

    // Key and translation of the message, when there is one.
    if let Some(ctx) = issue.message_context()
        && !ctx.translation.is_empty()
    {
        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            ctx.line().to_string().blue(),
            "|".blue(),
            one_line(&ctx.translation, MAX_DISPLAY_WIDTH),
            width = max_line_width
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 {
                "problem"
            } else {
                "problems"
            },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| i.location().position().map(|(line, _)| line))
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult, verbose: bool) {
    let mut out = io::stdout().lock();
    print_to(result, &mut out);

    if result.issues.is_empty() && matches!(result.summary, CommandSummary::Check) {
        print_success_to(result.catalogs_checked, result.messages_checked, &mut out);
    }

    if verbose
        && let CommandSummary::Lookup(summary) = &result.summary
        && summary.fallback
    {
        eprintln!(
            "{} no finished translation for {}, showing the source text",
            "note:".bold(),
            summary.key
        );
    }

    print_parse_warning(result.parse_error_count, verbose);
}

fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check => report_to(&result.issues, writer),
        CommandSummary::Lookup(summary) => print_lookup_to(summary, writer),
        CommandSummary::Stats(summary) => {
            print_stats_to(summary, writer);
            report_to(&result.issues, writer);
        }
        CommandSummary::Clean(summary) => {
            print_clean_to(summary, writer);
            report_to(&result.issues, writer);
        }
        CommandSummary::Init(summary) => print_init_to(summary, writer),
    }
}

/// The translation alone on stdout, so scripts can capture it.
fn print_lookup_to<W: Write>(summary: &LookupSummary, writer: &mut W) {
    let _ = writeln!(writer, "{}", summary.translation);
}

fn print_stats_to<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.rows.is_empty() {
        let _ = writeln!(writer, "No translation catalogs found.");
        return;
    }

    let header = [
        "catalog",
        "language",
        "contexts",
        "messages",
        "finished",
        "unfinished",
        "obsolete",
        "done",
    ];
    let rows: Vec<[String; 8]> = summary
        .rows
        .iter()
        .map(|row| {
            [
                row.file_path.clone(),
                row.language.clone(),
                row.stats.contexts.to_string(),
                row.stats.messages.to_string(),
                row.stats.finished.to_string(),
                row.stats.unfinished.to_string(),
                row.stats.obsolete.to_string(),
                format!("{:.1}%", row.stats.completion()),
            ]
        })
        .collect();

    let mut widths = header.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let format_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                let pad = width - UnicodeWidthStr::width(*cell);
                // Text columns align left, numbers right.
                if i < 2 {
                    format!("{}{}", cell, " ".repeat(pad))
                } else {
                    format!("{}{}", " ".repeat(pad), cell)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let _ = writeln!(writer, "{}", format_row(header.to_vec()).bold());
    for row in &rows {
        let _ = writeln!(
            writer,
            "{}",
            format_row(row.iter().map(String::as_str).collect())
        );
    }
}

fn print_clean_to<W: Write>(summary: &CleanSummary, writer: &mut W) {
    for file_path in &summary.skipped {
        let _ = writeln!(
            writer,
            "{} {}: left unchanged because of schema errors (run `tsglot check schema`)",
            FAILURE_MARK.red(),
            file_path
        );
    }

    if summary.removed.is_empty() {
        if summary.skipped.is_empty() {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                "No obsolete messages found".green()
            );
        }
        return;
    }

    if !summary.is_apply {
        for issue in &summary.removed {
            let _ = writeln!(
                writer,
                "{}:{}:{}: {} \"{}\" ({})",
                issue.context.file_path(),
                issue.context.line(),
                issue.context.col(),
                issue.context.key.context,
                issue.message(),
                issue.status
            );
        }
        let _ = writeln!(writer);
    }

    let total = summary.removed.len();
    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} message(s) in {} file(s).",
            "Removed".green().bold(),
            total,
            summary.file_count
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} message(s) in {} file(s).",
            "Would remove".yellow().bold(),
            total,
            summary.file_count
        );
        let _ = writeln!(writer, "Run with {} to remove them.", "--apply".cyan());
    }
}

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
