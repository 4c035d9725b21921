//! Helpers shared by the message rules.

use std::collections::HashSet;

use crate::core::{Message, TranslationStatus, TsFile};

/// Finished messages of `file` outside the ignored contexts.
///
/// Content rules only judge translations users actually see.
pub fn finished_messages<'a>(
    file: &'a TsFile,
    ignore_contexts: &'a HashSet<String>,
) -> impl Iterator<Item = (&'a str, &'a Message)> {
    messages_with_status(file, ignore_contexts, |status| {
        status == TranslationStatus::Finished
    })
}

/// Messages of `file` outside the ignored contexts whose status matches.
pub fn messages_with_status<'a>(
    file: &'a TsFile,
    ignore_contexts: &'a HashSet<String>,
    wanted: impl Fn(TranslationStatus) -> bool + 'a,
) -> impl Iterator<Item = (&'a str, &'a Message)> {
    file.messages().filter(move |(context, message)| {
        !ignore_contexts.contains(*context) && wanted(message.translation.status)
    })
}

/// Translated strings paired with their plural form index.
///
/// The index is `None` for ordinary messages.
pub fn forms(message: &Message) -> Vec<(Option<usize>, &str)> {
    let texts = message.translated_texts();
    if message.numerus && !message.translation.numerus_forms.is_empty() {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, t)| (Some(i), t))
            .collect()
    } else {
        texts.into_iter().map(|t| (None, t)).collect()
    }
}
