use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};

use crate::{core::CheckContext, rules::run_checks};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let issues = run_checks(&ctx, &cmd.rules);

    Ok(finish(CommandSummary::Check, issues, &ctx, true))
}
