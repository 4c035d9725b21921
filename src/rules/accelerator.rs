//! Keyboard accelerator consistency.
//!
//! Menu entries like `&Sketch` carry a mnemonic. Translations must keep
//! one (`スケッチ(&S)`), though the letter may differ, and must not invent
//! one for plain text. `&&` is a literal ampersand.

use std::collections::HashSet;

use crate::{
    core::{CheckContext, MessageContext, TsFile, placeholders::accelerator},
    issues::AcceleratorMismatchIssue,
    rules::helpers::{finished_messages, forms},
};

pub fn check_accelerator_issues(ctx: &CheckContext) -> Vec<AcceleratorMismatchIssue> {
    if !ctx.config.check_accelerators {
        return Vec::new();
    }
    ctx.ts_files()
        .iter()
        .flat_map(|file| check_accelerators(file, &ctx.ignore_contexts))
        .collect()
}

pub fn check_accelerators(
    file: &TsFile,
    ignore_contexts: &HashSet<String>,
) -> Vec<AcceleratorMismatchIssue> {
    let mut issues = Vec::new();

    for (context, message) in finished_messages(file, ignore_contexts) {
        let source_accelerator = accelerator(&message.source);
        let mismatch = forms(message).into_iter().find_map(|(_, text)| {
            if text.is_empty() {
                return None;
            }
            let translation_accelerator = accelerator(text);
            (source_accelerator.is_some() != translation_accelerator.is_some())
                .then_some((text, translation_accelerator))
        });

        if let Some((text, translation_accelerator)) = mismatch {
            let mut msg_ctx = MessageContext::from_message(context, message);
            msg_ctx.translation = text.to_string();
            issues.push(AcceleratorMismatchIssue {
                context: msg_ctx,
                source_accelerator,
                translation_accelerator,
            });
        }
    }

    issues
}
