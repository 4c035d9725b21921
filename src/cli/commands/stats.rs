use anyhow::Result;

use super::super::args::StatsCommand;
use super::{CatalogRow, CommandResult, CommandSummary, StatsSummary, helper::finish};

use crate::{
    core::{CatalogStats, CheckContext},
    issues::Issue,
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let rows = ctx
        .ts_files()
        .iter()
        .map(|file| CatalogRow {
            file_path: file.file_path.clone(),
            language: file.language_or_unknown().to_string(),
            stats: CatalogStats::of(file),
        })
        .collect();

    // Unreadable catalogs still surface, as parse errors.
    let issues = ctx
        .parse_errors()
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary { rows }),
        issues,
        &ctx,
        true,
    ))
}
