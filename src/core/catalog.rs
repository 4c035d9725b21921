//! Runtime lookup over parsed catalogs.
//!
//! [`Catalog`] answers `(context, source)` queries the way `QTranslator`
//! does: a finished translation when one exists, the source string
//! otherwise. The table is built once and never mutated by lookups, so a
//! catalog can be shared freely between threads.

use std::collections::HashMap;

use crate::core::{Message, MessageKey, NumerusRule, TsFile};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    language: Option<String>,
    messages: HashMap<MessageKey, Message>,
}

impl Catalog {
    pub fn from_file(file: &TsFile) -> Self {
        let mut catalog = Self {
            language: file.language.clone(),
            messages: HashMap::with_capacity(file.message_count()),
        };
        catalog.extend(file);
        catalog
    }

    /// Merge another catalog file; keys already present are kept.
    ///
    /// Obsolete and vanished messages never enter the table.
    pub fn extend(&mut self, file: &TsFile) {
        if self.language.is_none() {
            self.language = file.language.clone();
        }
        for (context, message) in file.active_messages() {
            self.messages
                .entry(message.key(context))
                .or_insert_with(|| message.clone());
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn lookup(&self, key: &MessageKey) -> Option<&Message> {
        self.messages.get(key)
    }

    /// Translate `source` in `context`, falling back to `source` itself.
    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.translate_with_comment(context, source, "")
    }

    /// Like [`Catalog::translate`] with a disambiguation comment.
    ///
    /// When no message has exactly this comment, the comment-less message is
    /// tried before falling back to `source`.
    pub fn translate_with_comment<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        comment: &str,
    ) -> &'a str {
        self.find(context, source, comment)
            .and_then(|m| m.translation.effective_text())
            .unwrap_or(source)
    }

    /// Plural-aware lookup: picks the form for `n` by the catalog language
    /// and substitutes `%n` / `%Ln` with `n`.
    pub fn translate_n(&self, context: &str, source: &str, comment: &str, n: u64) -> String {
        let text = self.text_n(context, source, comment, n).unwrap_or(source);
        substitute_count(text, n)
    }

    /// Translated text [`Catalog::translate_n`] picks for `n`, before `%n`
    /// substitution; `None` when the source would be shown.
    pub fn text_n(&self, context: &str, source: &str, comment: &str, n: u64) -> Option<&str> {
        let rule = NumerusRule::for_language(self.language.as_deref().unwrap_or(""));

        self.find(context, source, comment).and_then(|message| {
            if message.numerus {
                message.translation.effective_form(rule.form_index(n))
            } else {
                message.translation.effective_text()
            }
        })
    }

    /// Message answering `(context, source, comment)`, with the same
    /// comment fallback as the translate functions.
    pub fn find(&self, context: &str, source: &str, comment: &str) -> Option<&Message> {
        let key = MessageKey::new(context, source, comment);
        self.messages.get(&key).or_else(|| {
            if comment.is_empty() {
                return None;
            }
            self.messages.get(&MessageKey::new(context, source, ""))
        })
    }
}

fn substitute_count(text: &str, n: u64) -> String {
    let n = n.to_string();
    text.replace("%Ln", &n).replace("%n", &n)
}
