use std::fmt;

use super::CatalogLocation;

/// Translation status, taken from the `type` attribute of `<translation>`.
///
/// Qt Linguist distinguishes four states:
///
/// 1. **Finished**: no `type` attribute, the translation is approved
/// 2. **Unfinished**: `type="unfinished"`, needs translator attention
/// 3. **Obsolete**: `type="obsolete"`, source string no longer exists (legacy)
/// 4. **Vanished**: `type="vanished"`, source string no longer exists
///
/// Only finished translations are ever shown to end users; everything else
/// falls back to the source string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TranslationStatus {
    #[default]
    Finished,
    Unfinished,
    Obsolete,
    Vanished,
}

impl TranslationStatus {
    /// Parse the value of the `type` attribute.
    pub fn from_type_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(Self::Unfinished),
            "obsolete" => Some(Self::Obsolete),
            "vanished" => Some(Self::Vanished),
            _ => None,
        }
    }

    /// Value written back to the `type` attribute (`None` for finished).
    pub fn type_attr(&self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Obsolete => Some("obsolete"),
            Self::Vanished => Some("vanished"),
        }
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_attr().unwrap_or("finished"))
    }
}

/// The `<translation>` element of a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub status: TranslationStatus,
    /// Translated text for ordinary messages.
    pub text: String,
    /// Plural forms for `numerus="yes"` messages, in the language's form order.
    pub numerus_forms: Vec<String>,
}

impl Translation {
    pub fn finished(text: impl Into<String>) -> Self {
        Self {
            status: TranslationStatus::Finished,
            text: text.into(),
            numerus_forms: Vec::new(),
        }
    }

    pub fn unfinished(text: impl Into<String>) -> Self {
        Self {
            status: TranslationStatus::Unfinished,
            text: text.into(),
            numerus_forms: Vec::new(),
        }
    }

    /// False for obsolete and vanished entries, which are kept in the file
    /// but are no longer extracted from source code.
    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            TranslationStatus::Finished | TranslationStatus::Unfinished
        )
    }

    pub fn is_finished(&self) -> bool {
        self.status == TranslationStatus::Finished
    }

    /// Text a consumer may display, or `None` when the source must be used.
    pub fn effective_text(&self) -> Option<&str> {
        if !self.is_finished() || self.text.is_empty() {
            return None;
        }
        Some(&self.text)
    }

    /// Plural form a consumer may display, or `None` when the source must be used.
    pub fn effective_form(&self, index: usize) -> Option<&str> {
        if !self.is_finished() {
            return None;
        }
        self.numerus_forms
            .get(index)
            .map(String::as_str)
            .filter(|form| !form.is_empty())
    }
}

/// A `<location>` back-reference to the call site of the source string.
///
/// Purely informational: translators use it to find the string in code,
/// the runtime never looks at it. With relative locations lupdate omits the
/// filename when it repeats and writes lines as offsets (`line="+3"`), so
/// both are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceReference {
    pub filename: Option<String>,
    pub line: Option<String>,
}

impl SourceReference {
    pub fn new(filename: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            filename: Some(filename.into()),
            line: line.map(|l| l.to_string()),
        }
    }

    /// Line number, or the offset for relative locations.
    pub fn line_number(&self) -> Option<u32> {
        self.line.as_deref().and_then(|l| l.parse().ok())
    }

    /// True for `line="+3"` / `line="-1"` style offsets.
    pub fn is_relative(&self) -> bool {
        self.line
            .as_deref()
            .is_some_and(|l| l.starts_with('+') || l.starts_with('-'))
    }
}

/// Lookup key of a message: `(context, source, comment)`.
///
/// The disambiguation comment is part of the key; an absent comment is the
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageKey {
    pub context: String,
    pub source: String,
    pub comment: String,
}

impl MessageKey {
    pub fn new(
        context: impl Into<String>,
        source: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            comment: comment.into(),
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.comment.is_empty() {
            write!(f, "{}::\"{}\"", self.context, self.source)
        } else {
            write!(
                f,
                "{}::\"{}\" ({})",
                self.context, self.source, self.comment
            )
        }
    }
}

/// A single `<message>` entry of a context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Optional `id` attribute (id-based translations).
    pub id: Option<String>,
    /// True for `numerus="yes"` messages.
    pub numerus: bool,
    pub locations: Vec<SourceReference>,
    /// Original string; the lookup key within its context.
    pub source: String,
    /// Previous source text kept by lupdate for fuzzy matches.
    pub oldsource: Option<String>,
    /// Disambiguation comment, part of the lookup key.
    pub comment: Option<String>,
    pub oldcomment: Option<String>,
    /// Developer note for translators (`//:` comments in code).
    pub extracomment: Option<String>,
    pub translatorcomment: Option<String>,
    pub translation: Translation,
    /// Where the `<message>` start tag is in the catalog.
    pub location: CatalogLocation,
    /// Unmodelled child elements (`<extra-*>` and the like), kept verbatim.
    pub extras: Vec<String>,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: Translation) -> Self {
        Self {
            source: source.into(),
            translation,
            ..Default::default()
        }
    }

    pub fn comment_or_empty(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }

    pub fn key(&self, context: &str) -> MessageKey {
        MessageKey::new(context, self.source.as_str(), self.comment_or_empty())
    }

    pub fn is_active(&self) -> bool {
        self.translation.is_active()
    }

    /// All translated strings of this message: the plural forms for numerus
    /// messages, the text otherwise.
    pub fn translated_texts(&self) -> Vec<&str> {
        if self.numerus && !self.translation.numerus_forms.is_empty() {
            self.translation
                .numerus_forms
                .iter()
                .map(String::as_str)
                .collect()
        } else {
            vec![self.translation.text.as_str()]
        }
    }
}

/// A message as seen by the rules: where it is, its key and its text.
///
/// Self-contained so issues carry everything the reporters need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: CatalogLocation,
    pub key: MessageKey,
    /// Translated text (first plural form for numerus messages).
    pub translation: String,
}

impl MessageContext {
    pub fn new(location: CatalogLocation, key: MessageKey, translation: impl Into<String>) -> Self {
        Self {
            location,
            key,
            translation: translation.into(),
        }
    }

    pub fn from_message(context: &str, message: &Message) -> Self {
        let translation = message
            .translated_texts()
            .first()
            .map(|t| t.to_string())
            .unwrap_or_default();
        Self::new(message.location.clone(), message.key(context), translation)
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}
