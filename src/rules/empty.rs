//! Finished translations without text.
//!
//! Qt falls back to the source for an empty translation, but a finished
//! mark on it hides the message from the translator's to-do list.

use std::collections::HashSet;

use crate::{
    core::{CheckContext, MessageContext, TsFile},
    issues::EmptyTranslationIssue,
    rules::helpers::{finished_messages, forms},
};

pub fn check_empty_issues(ctx: &CheckContext) -> Vec<EmptyTranslationIssue> {
    ctx.ts_files()
        .iter()
        .flat_map(|file| check_empty(file, &ctx.ignore_contexts))
        .collect()
}

pub fn check_empty(file: &TsFile, ignore_contexts: &HashSet<String>) -> Vec<EmptyTranslationIssue> {
    finished_messages(file, ignore_contexts)
        .filter(|(_, message)| {
            !message.source.is_empty() && forms(message).iter().any(|(_, text)| text.is_empty())
        })
        .map(|(context, message)| EmptyTranslationIssue {
            context: MessageContext::from_message(context, message),
        })
        .collect()
}
