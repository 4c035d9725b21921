//! Untranslated text detection.
//!
//! Detects finished translations identical to their source, which usually
//! means the text was copied over rather than translated. Strings without
//! letters (numbers, symbols, placeholders) and `ignoreTexts` entries are
//! exempt, as are catalogs whose language is the source language.

use std::collections::HashSet;

use crate::{
    core::{CheckContext, MessageContext, TsFile},
    issues::UntranslatedIssue,
    rules::helpers::{finished_messages, forms},
    utils::contains_alphabetic,
};

pub fn check_untranslated_issues(ctx: &CheckContext) -> Vec<UntranslatedIssue> {
    ctx.ts_files()
        .iter()
        .flat_map(|file| check_untranslated(file, &ctx.ignore_texts, &ctx.ignore_contexts))
        .collect()
}

pub fn check_untranslated(
    file: &TsFile,
    ignore_texts: &HashSet<String>,
    ignore_contexts: &HashSet<String>,
) -> Vec<UntranslatedIssue> {
    if file.language.is_some() && file.language == file.source_language {
        return Vec::new();
    }
    let language = file.language_or_unknown();

    finished_messages(file, ignore_contexts)
        .filter(|(_, message)| {
            contains_alphabetic(&message.source)
                && !ignore_texts.contains(&message.source)
                && forms(message)
                    .iter()
                    .any(|(_, text)| *text == message.source)
        })
        .map(|(context, message)| UntranslatedIssue {
            context: MessageContext::from_message(context, message),
            language: language.to_string(),
        })
        .collect()
}
