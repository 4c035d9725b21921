use std::fmt;

use super::{CatalogLocation, Message, MessageKey, TranslationStatus};

/// Default indentation unit, as written by lupdate.
pub const DEFAULT_INDENT: &str = "    ";

/// A structural problem found while reading a catalog.
///
/// These do not stop parsing: the file is still usable, the violation is
/// reported by the `schema` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaViolationKind {
    /// `<message>` without `<source>`; the message is dropped.
    MissingSource,
    /// `<message>` without `<translation>`; treated as unfinished.
    MissingTranslation,
    DuplicateSource,
    DuplicateTranslation,
    MissingContextName,
    /// `type` attribute of `<translation>` with an unknown value.
    UnknownTranslationType(String),
    /// `line` attribute of `<location>` that is not a number.
    InvalidLocationLine(String),
    /// `numerus="yes"` message whose translation has no `<numerusform>`.
    NumerusWithoutForms,
    /// Element inside text content that is not `<byte>` or `<numerusform>`;
    /// its text is lost.
    UnsupportedElement(String),
}

impl fmt::Display for SchemaViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSource => write!(f, "message has no <source>"),
            Self::MissingTranslation => write!(f, "message has no <translation>"),
            Self::DuplicateSource => write!(f, "message has more than one <source>"),
            Self::DuplicateTranslation => write!(f, "message has more than one <translation>"),
            Self::MissingContextName => write!(f, "context has no <name>"),
            Self::UnknownTranslationType(value) => {
                write!(f, "unknown translation type \"{}\"", value)
            }
            Self::InvalidLocationLine(value) => {
                write!(f, "location line \"{}\" is not a number", value)
            }
            Self::NumerusWithoutForms => {
                write!(f, "numerus message has no <numerusform>")
            }
            Self::UnsupportedElement(name) => {
                write!(f, "unsupported <{}> element inside text", name)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub kind: SchemaViolationKind,
    pub location: CatalogLocation,
    /// Context the element belongs to, when known.
    pub context: Option<String>,
}

/// A `<context>` block: a namespace of messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub messages: Vec<Message>,
    pub location: CatalogLocation,
    /// Unmodelled child elements, kept verbatim.
    pub extras: Vec<String>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn active_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.is_active())
    }
}

/// A parsed Qt Translation Source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsFile {
    pub file_path: String,
    pub version: Option<String>,
    /// Target language (e.g., "ja", "pt_BR").
    pub language: Option<String>,
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
    /// Whitespace before each `<context>` line (empty for lupdate output).
    pub context_indent: String,
    /// Indentation unit below `<context>`, reused when writing the file back.
    pub indent: String,
    /// Structural problems found while parsing.
    pub violations: Vec<SchemaViolation>,
    /// Unmodelled top-level elements (e.g. `<dependencies>`), kept verbatim.
    pub extras: Vec<String>,
}

impl Default for TsFile {
    fn default() -> Self {
        Self {
            file_path: String::new(),
            version: Some("2.1".to_string()),
            language: None,
            source_language: None,
            contexts: Vec::new(),
            context_indent: String::new(),
            indent: DEFAULT_INDENT.to_string(),
            violations: Vec::new(),
            extras: Vec::new(),
        }
    }
}

impl TsFile {
    pub fn new(file_path: impl Into<String>, language: Option<String>) -> Self {
        Self {
            file_path: file_path.into(),
            language,
            ..Default::default()
        }
    }

    /// Language label for display ("?" when the attribute is absent).
    pub fn language_or_unknown(&self) -> &str {
        self.language.as_deref().unwrap_or("?")
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Iterate over every message with its context name.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.contexts
            .iter()
            .flat_map(|c| c.messages.iter().map(move |m| (c.name.as_str(), m)))
    }

    /// Iterate over messages that are not obsolete or vanished.
    pub fn active_messages(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.messages().filter(|(_, m)| m.is_active())
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Find the first message with the given key, active or not.
    pub fn find(&self, key: &MessageKey) -> Option<&Message> {
        self.context(&key.context)?
            .messages
            .iter()
            .find(|m| m.source == key.source && m.comment_or_empty() == key.comment)
    }

    /// Insert a message, creating its context when needed.
    pub fn insert(&mut self, context: &str, message: Message) {
        match self.contexts.iter_mut().find(|c| c.name == context) {
            Some(ctx) => ctx.messages.push(message),
            None => {
                let mut ctx = Context::new(context);
                ctx.messages.push(message);
                self.contexts.push(ctx);
            }
        }
    }

    /// Remove obsolete and vanished messages, then contexts left empty.
    ///
    /// Returns the removed messages with their context names.
    pub fn purge_obsolete(&mut self) -> Vec<(String, Message)> {
        let mut removed = Vec::new();
        for ctx in &mut self.contexts {
            let (keep, drop): (Vec<_>, Vec<_>) =
                ctx.messages.drain(..).partition(|m| m.is_active());
            ctx.messages = keep;
            removed.extend(drop.into_iter().map(|m| (ctx.name.clone(), m)));
        }
        self.contexts.retain(|c| !c.messages.is_empty());
        removed
    }
}

/// Completion statistics of one catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub obsolete: usize,
}

impl CatalogStats {
    pub fn of(file: &TsFile) -> Self {
        let mut stats = Self {
            contexts: file.contexts.len(),
            ..Default::default()
        };
        for (_, message) in file.messages() {
            stats.messages += 1;
            match message.translation.status {
                TranslationStatus::Finished => stats.finished += 1,
                TranslationStatus::Unfinished => stats.unfinished += 1,
                TranslationStatus::Obsolete | TranslationStatus::Vanished => {
                    stats.obsolete += 1
                }
            }
        }
        stats
    }

    /// Messages that are still extracted from source code.
    pub fn active(&self) -> usize {
        self.finished + self.unfinished
    }

    /// Finished share of active messages, in percent.
    pub fn completion(&self) -> f64 {
        if self.active() == 0 {
            return 100.0;
        }
        self.finished as f64 * 100.0 / self.active() as f64
    }
}
