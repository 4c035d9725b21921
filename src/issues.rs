//! Issue types for catalog checks.
//!
//! Each issue is self-contained with everything the reporters (CLI report,
//! MCP JSON) need: location, key and the offending text.

use enum_dispatch::enum_dispatch;

use crate::core::{CatalogLocation, MessageContext, SchemaViolation, TranslationStatus};
use crate::utils::{MAX_DISPLAY_WIDTH, one_line};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    ParseError,
    Schema,
    DuplicateMessage,
    PlaceholderMismatch,
    Unfinished,
    EmptyTranslation,
    Untranslated,
    AcceleratorMismatch,
    Obsolete,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::ParseError => write!(f, "parse-error"),
            Rule::Schema => write!(f, "schema"),
            Rule::DuplicateMessage => write!(f, "duplicate-message"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::AcceleratorMismatch => write!(f, "accelerator-mismatch"),
            Rule::Obsolete => write!(f, "obsolete"),
        }
    }
}

// ============================================================
// Issue Types - File level
// ============================================================

/// File could not be read or is not well-formed TS XML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
    /// Position of the XML error, when the parser reported one.
    pub location: Option<CatalogLocation>,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

/// Structural problem inside an otherwise readable catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    pub violation: SchemaViolation,
}

impl SchemaIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Schema
    }
}

// ============================================================
// Issue Types - Messages (MessageContext)
// ============================================================

/// Same `(context, source, comment)` defined more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMessageIssue {
    /// The later definition, which lookups never see.
    pub context: MessageContext,
    /// Where the key was first defined.
    pub first: CatalogLocation,
}

impl DuplicateMessageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateMessage
    }
}

/// Finished translation that drops or invents placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: MessageContext,
    /// In the source but not in the translation.
    pub missing: Vec<String>,
    /// In the translation but not in the source.
    pub unexpected: Vec<String>,
    /// Plural form index for numerus messages.
    pub form: Option<usize>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: MessageContext,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Finished translation with no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub context: MessageContext,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::EmptyTranslation
    }
}

/// Finished translation identical to its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub context: MessageContext,
    /// Target language of the catalog.
    pub language: String,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

/// Keyboard accelerator present on one side only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceleratorMismatchIssue {
    pub context: MessageContext,
    pub source_accelerator: Option<char>,
    pub translation_accelerator: Option<char>,
}

impl AcceleratorMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::AcceleratorMismatch
    }
}

/// Obsolete or vanished message left in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsoleteIssue {
    pub context: MessageContext,
    pub status: TranslationStatus,
}

impl ObsoleteIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Obsolete
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in a translation catalog.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    ParseError(ParseErrorIssue),
    Schema(SchemaIssue),
    DuplicateMessage(DuplicateMessageIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    Unfinished(UnfinishedIssue),
    EmptyTranslation(EmptyTranslationIssue),
    Untranslated(UntranslatedIssue),
    AcceleratorMismatch(AcceleratorMismatchIssue),
    Obsolete(ObsoleteIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::ParseError(_) => ParseErrorIssue::severity(),
            Issue::Schema(_) => SchemaIssue::severity(),
            Issue::DuplicateMessage(_) => DuplicateMessageIssue::severity(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::severity(),
            Issue::Unfinished(_) => UnfinishedIssue::severity(),
            Issue::EmptyTranslation(_) => EmptyTranslationIssue::severity(),
            Issue::Untranslated(_) => UntranslatedIssue::severity(),
            Issue::AcceleratorMismatch(_) => AcceleratorMismatchIssue::severity(),
            Issue::Obsolete(_) => ObsoleteIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::ParseError(_) => ParseErrorIssue::rule(),
            Issue::Schema(_) => SchemaIssue::rule(),
            Issue::DuplicateMessage(_) => DuplicateMessageIssue::rule(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::rule(),
            Issue::Unfinished(_) => UnfinishedIssue::rule(),
            Issue::EmptyTranslation(_) => EmptyTranslationIssue::rule(),
            Issue::Untranslated(_) => UntranslatedIssue::rule(),
            Issue::AcceleratorMismatch(_) => AcceleratorMismatchIssue::rule(),
            Issue::Obsolete(_) => ObsoleteIssue::rule(),
        }
    }

    /// Context name of the message, for issues tied to one.
    pub fn message_context(&self) -> Option<&MessageContext> {
        match self.location() {
            ReportLocation::Message(ctx) => Some(ctx),
            _ => None,
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message in a catalog (has context and source).
    Message(&'a MessageContext),
    /// A position in a catalog without a message (schema, XML errors).
    Catalog(&'a CatalogLocation),
    /// File-level only.
    File { path: &'a str },
}

impl ReportLocation<'_> {
    pub fn file_path(&self) -> &str {
        match self {
            ReportLocation::Message(ctx) => ctx.file_path(),
            ReportLocation::Catalog(loc) => &loc.file_path,
            ReportLocation::File { path } => path,
        }
    }

    /// `(line, col)` when the location points inside the file.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ReportLocation::Message(ctx) => Some((ctx.line(), ctx.col())),
            ReportLocation::Catalog(loc) => Some((loc.line, loc.col)),
            ReportLocation::File { .. } => None,
        }
    }
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards the calls on
/// the `Issue` enum without dynamic dispatch.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source text, error, etc.).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

fn display_text(text: &str) -> String {
    one_line(text, MAX_DISPLAY_WIDTH)
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        match &self.location {
            Some(loc) => ReportLocation::Catalog(loc),
            None => ReportLocation::File {
                path: &self.file_path,
            },
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for SchemaIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Catalog(&self.violation.location)
    }

    fn message(&self) -> String {
        self.violation.kind.to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        self.violation
            .context
            .as_ref()
            .map(|name| format!("in context {}", name))
    }
}

impl Report for DuplicateMessageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        display_text(&self.context.key.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("only the first definition is used; remove or disambiguate the others")
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in context {}, first defined at {}",
            self.context.key.context, self.first
        ))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        display_text(&self.context.key.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(" ")));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected {}", self.unexpected.join(" ")));
        }
        if let Some(form) = self.form {
            parts.push(format!("in plural form {}", form));
        }
        Some(parts.join(", "))
    }
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        display_text(&self.context.key.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.context.translation.is_empty() {
            Some(format!("in context {}", self.context.key.context))
        } else {
            Some(format!(
                "in context {} (draft \"{}\")",
                self.context.key.context,
                display_text(&self.context.translation)
            ))
        }
    }
}

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        display_text(&self.context.key.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("an empty finished translation hides the source text")
    }

    fn details(&self) -> Option<String> {
        Some(format!("in context {}", self.context.key.context))
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        display_text(&self.context.key.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in context {}, identical in {}",
            self.context.key.context, self.language
        ))
    }
}

impl Report for AcceleratorMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        display_text(&self.context.key.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let show = |c: Option<char>| c.map_or("none".to_string(), |c| format!("&{}", c));
        Some(format!(
            "source has {}, translation \"{}\" has {}",
            show(self.source_accelerator),
            display_text(&self.context.translation),
            show(self.translation_accelerator)
        ))
    }
}

impl Report for ObsoleteIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        display_text(&self.context.key.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("run `tsglot clean --apply` to remove it")
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} in context {}",
            self.status, self.context.key.context
        ))
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col (file-level first), rule, message
        let (a, b) = (self.location(), other.location());
        a.file_path()
            .cmp(b.file_path())
            .then_with(|| a.position().cmp(&b.position()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
