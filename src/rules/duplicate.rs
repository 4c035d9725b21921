//! Duplicate message detection.
//!
//! A `(context, source, comment)` key must be unique among the active
//! messages of a catalog. Lookups only ever see the first definition, so
//! every later one is dead text a translator may still be editing.

use std::collections::HashMap;

use crate::{
    core::{CatalogLocation, CheckContext, MessageContext, MessageKey, TsFile},
    issues::DuplicateMessageIssue,
};

pub fn check_duplicate_issues(ctx: &CheckContext) -> Vec<DuplicateMessageIssue> {
    ctx.ts_files().iter().flat_map(check_duplicates).collect()
}

pub fn check_duplicates(file: &TsFile) -> Vec<DuplicateMessageIssue> {
    let mut first_seen: HashMap<MessageKey, CatalogLocation> = HashMap::new();
    let mut issues = Vec::new();

    for (context, message) in file.active_messages() {
        let key = message.key(context);
        match first_seen.get(&key) {
            Some(first) => issues.push(DuplicateMessageIssue {
                context: MessageContext::from_message(context, message),
                first: first.clone(),
            }),
            None => {
                first_seen.insert(key, message.location.clone());
            }
        }
    }

    issues
}
