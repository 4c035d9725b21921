use std::{collections::HashSet, path::Path};

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::super::args::CleanCommand;
use super::helper::finish;
use super::{CleanSummary, CommandResult, CommandSummary};
use crate::{
    core::{CheckContext, writer::write_ts_file},
    issues::{Issue, ObsoleteIssue},
    rules::{obsolete::check_obsolete, schema::check_schema},
};

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let apply = cmd.apply;

    // Every obsolete entry goes, ignored contexts included.
    let no_ignores = HashSet::new();
    let mut removed: Vec<ObsoleteIssue> = Vec::new();
    let mut skipped: Vec<String> = Vec::new();
    let mut file_count = 0;
    let mut issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    for file in ctx.ts_files() {
        let found = check_obsolete(file, &no_ignores);
        if found.is_empty() {
            continue;
        }

        // Rewriting would drop what the parser could not read.
        if !file.violations.is_empty() {
            warn!(
                file = %file.file_path,
                violations = file.violations.len(),
                "not cleaning catalog with schema errors"
            );
            skipped.push(file.file_path.clone());
            issues.extend(check_schema(file).into_iter().map(Issue::Schema));
            continue;
        }
        file_count += 1;

        if apply {
            let mut cleaned = file.clone();
            let purged = cleaned.purge_obsolete();
            write_ts_file(&cleaned, Path::new(&file.file_path))
                .with_context(|| format!("Failed to clean {}", file.file_path))?;
            info!(file = %file.file_path, removed = purged.len(), "removed obsolete messages");
        }
        removed.extend(found);
    }

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            removed,
            file_count,
            skipped,
            is_apply: apply,
        }),
        issues,
        &ctx,
        true,
    ))
}
