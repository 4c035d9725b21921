//! Placeholder preservation in finished translations.
//!
//! `QString::arg` and friends substitute by placeholder, so a translation
//! that drops `%1` silently loses data and one that adds `%2` prints it
//! raw. Order does not matter. Every plural form is checked against the
//! source.

use std::collections::HashSet;

use crate::{
    core::{CheckContext, MessageContext, TsFile, placeholders::compare_placeholders},
    issues::PlaceholderMismatchIssue,
    rules::helpers::{finished_messages, forms},
};

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderMismatchIssue> {
    ctx.ts_files()
        .iter()
        .flat_map(|file| check_placeholders(file, &ctx.ignore_contexts))
        .collect()
}

pub fn check_placeholders(
    file: &TsFile,
    ignore_contexts: &HashSet<String>,
) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for (context, message) in finished_messages(file, ignore_contexts) {
        for (form, text) in forms(message) {
            // Empty translations fall back to the source at runtime.
            if text.is_empty() {
                continue;
            }
            let diff = compare_placeholders(&message.source, text);
            if diff.is_empty() {
                continue;
            }
            let mut msg_ctx = MessageContext::from_message(context, message);
            msg_ctx.translation = text.to_string();
            issues.push(PlaceholderMismatchIssue {
                context: msg_ctx,
                missing: diff.missing,
                unexpected: diff.unexpected,
                form,
            });
        }
    }

    issues
}
