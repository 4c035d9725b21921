//! Obsolete and vanished messages left in a catalog.
//!
//! lupdate keeps them for reference after the source string disappears;
//! `tsglot clean` removes them.

use std::collections::HashSet;

use crate::{
    core::{CheckContext, MessageContext, TranslationStatus, TsFile},
    issues::ObsoleteIssue,
    rules::helpers::messages_with_status,
};

pub fn check_obsolete_issues(ctx: &CheckContext) -> Vec<ObsoleteIssue> {
    ctx.ts_files()
        .iter()
        .flat_map(|file| check_obsolete(file, &ctx.ignore_contexts))
        .collect()
}

pub fn check_obsolete(file: &TsFile, ignore_contexts: &HashSet<String>) -> Vec<ObsoleteIssue> {
    messages_with_status(file, ignore_contexts, |status| {
        matches!(status, TranslationStatus::Obsolete | TranslationStatus::Vanished)
    })
    .map(|(context, message)| ObsoleteIssue {
        context: MessageContext::from_message(context, message),
        status: message.translation.status,
    })
    .collect()
}
