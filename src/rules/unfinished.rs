//! Messages still waiting for a translator.

use std::collections::HashSet;

use crate::{
    core::{CheckContext, MessageContext, TranslationStatus, TsFile},
    issues::UnfinishedIssue,
    rules::helpers::messages_with_status,
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    ctx.ts_files()
        .iter()
        .flat_map(|file| check_unfinished(file, &ctx.ignore_contexts))
        .collect()
}

pub fn check_unfinished(file: &TsFile, ignore_contexts: &HashSet<String>) -> Vec<UnfinishedIssue> {
    messages_with_status(file, ignore_contexts, |status| {
        status == TranslationStatus::Unfinished
    })
    .map(|(context, message)| UnfinishedIssue {
        context: MessageContext::from_message(context, message),
    })
    .collect()
}
