//! Qt Translation Source (`.ts`) reader.
//!
//! Pull-parses the XML with quick-xml and builds a [`TsFile`]. Malformed XML
//! is a hard error; structural problems (a message without `<source>`, an
//! unknown translation type, ...) are recorded as [`SchemaViolation`]s so
//! the rest of the catalog stays usable.

use std::{fs, path::Path};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use thiserror::Error;
use tracing::debug;

use crate::core::{
    CatalogLocation, Context, DEFAULT_INDENT, LineIndex, Message, SchemaViolation,
    SchemaViolationKind, SourceReference, Translation, TranslationStatus, TsFile,
};

#[derive(Debug, Error)]
pub enum TsParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}:{line}:{col}: malformed XML: {message}")]
    Xml {
        path: String,
        line: usize,
        col: usize,
        message: String,
    },
    #[error("{path}: root element is <{found}>, expected <TS>")]
    UnexpectedRoot { path: String, found: String },
    #[error("{path}: no <TS> element found")]
    MissingRoot { path: String },
}

impl TsParseError {
    pub fn file_path(&self) -> &str {
        match self {
            Self::Io { path, .. }
            | Self::Xml { path, .. }
            | Self::UnexpectedRoot { path, .. }
            | Self::MissingRoot { path } => path,
        }
    }

    /// 1-based (line, col) of the error, when it points into the document.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::Xml { line, col, .. } => Some((*line, *col)),
            _ => None,
        }
    }

    /// Error description without the file path.
    pub fn reason(&self) -> String {
        match self {
            Self::Io { source, .. } => format!("failed to read file: {}", source),
            Self::Xml { message, .. } => format!("malformed XML: {}", message),
            Self::UnexpectedRoot { found, .. } => {
                format!("root element is <{}>, expected <TS>", found)
            }
            Self::MissingRoot { .. } => "no <TS> element found".to_string(),
        }
    }
}

/// Returns true when `content` looks like a TS document rather than, say,
/// a TypeScript source that happens to share the `.ts` extension.
pub fn looks_like_ts(content: &str) -> bool {
    let head = content.trim_start_matches('\u{feff}').trim_start();
    head.starts_with("<?xml") || head.starts_with("<!DOCTYPE TS") || head.starts_with("<TS")
}

pub fn parse_ts_file(path: &Path) -> Result<TsFile, TsParseError> {
    let file_path = path.to_string_lossy().to_string();
    let content = fs::read_to_string(path).map_err(|source| TsParseError::Io {
        path: file_path.clone(),
        source,
    })?;
    parse_ts_str(&content, &file_path)
}

pub fn parse_ts_str(content: &str, file_path: &str) -> Result<TsFile, TsParseError> {
    TsReader::new(content, file_path).read()
}

/// Element whose character data is currently being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextTarget {
    ContextName,
    Source,
    OldSource,
    Comment,
    OldComment,
    ExtraComment,
    TranslatorComment,
    Translation,
    NumerusForm,
    /// Duplicate element: text is read and dropped.
    Discard,
}

#[derive(Debug, Default)]
struct MessageBuilder {
    message: Message,
    source: Option<String>,
    translation_seen: bool,
}

struct TsReader<'a> {
    content: &'a str,
    file_path: &'a str,
    line_index: LineIndex,
    file: TsFile,
    root_seen: bool,
    context: Option<Context>,
    context_name_seen: bool,
    message: Option<MessageBuilder>,
    target: Option<TextTarget>,
    text: String,
    /// Depth inside elements we do not model.
    skip_depth: usize,
    /// Start offset of the unmodelled element being skipped, if it is kept.
    raw_start: Option<usize>,
}

impl<'a> TsReader<'a> {
    fn new(content: &'a str, file_path: &'a str) -> Self {
        let (context_indent, indent) = detect_indent(content);
        let mut file = TsFile::new(file_path, None);
        file.version = None;
        file.context_indent = context_indent;
        file.indent = indent;

        Self {
            content,
            file_path,
            line_index: LineIndex::new(content),
            file,
            root_seen: false,
            context: None,
            context_name_seen: false,
            message: None,
            target: None,
            text: String::new(),
            skip_depth: 0,
            raw_start: None,
        }
    }

    fn read(mut self) -> Result<TsFile, TsParseError> {
        let mut reader = Reader::from_str(self.content);

        loop {
            let event = match reader.read_event() {
                Ok(event) => event,
                Err(e) => {
                    let offset = reader.buffer_position() as usize;
                    return Err(self.xml_error(offset, e.to_string()));
                }
            };
            let offset = reader.buffer_position() as usize;

            match event {
                // The tag is `<` + content + `>`; step back to its `<`.
                Event::Start(e) => self.start(&e, offset.saturating_sub(e.len() + 2))?,
                Event::Empty(e) => {
                    self.start(&e, offset.saturating_sub(e.len() + 3))?;
                    self.end(e.name().as_ref(), offset);
                }
                Event::End(e) => self.end(e.name().as_ref(), offset),
                Event::Text(e) => {
                    if self.skip_depth == 0 && self.target.is_some() {
                        let text = e
                            .unescape()
                            .map_err(|err| self.xml_error(offset, err.to_string()))?;
                        self.text.push_str(&text);
                    }
                }
                Event::CData(e) => {
                    if self.skip_depth == 0 && self.target.is_some() {
                        self.text.push_str(&String::from_utf8_lossy(&e));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !self.root_seen {
            return Err(TsParseError::MissingRoot {
                path: self.file_path.to_string(),
            });
        }

        debug!(
            file = self.file_path,
            contexts = self.file.contexts.len(),
            messages = self.file.message_count(),
            "parsed catalog"
        );
        Ok(self.file)
    }

    fn start(&mut self, e: &BytesStart<'_>, offset: usize) -> Result<(), TsParseError> {
        if self.skip_depth > 0 {
            self.skip_depth += 1;
            return Ok(());
        }

        let name = e.name();
        let name = name.as_ref();

        if !self.root_seen {
            if name != b"TS" {
                return Err(TsParseError::UnexpectedRoot {
                    path: self.file_path.to_string(),
                    found: String::from_utf8_lossy(name).to_string(),
                });
            }
            self.root_seen = true;
            self.file.version = self.attr(e, b"version", offset)?;
            self.file.language = self.attr(e, b"language", offset)?;
            self.file.source_language = self.attr(e, b"sourcelanguage", offset)?;
            return Ok(());
        }

        match (name, self.context.is_some(), self.message.is_some()) {
            (b"context", false, _) => {
                let mut context = Context::default();
                context.location = self.location(offset);
                self.context = Some(context);
                self.context_name_seen = false;
            }
            (b"name", true, false) => {
                self.target = Some(if self.context_name_seen {
                    TextTarget::Discard
                } else {
                    TextTarget::ContextName
                });
            }
            (b"message", true, false) => {
                let mut builder = MessageBuilder::default();
                builder.message.location = self.location(offset);
                builder.message.numerus = self.attr(e, b"numerus", offset)?.as_deref() == Some("yes");
                builder.message.id = self.attr(e, b"id", offset)?;
                self.message = Some(builder);
            }
            (b"location", true, true) => {
                let filename = self.attr(e, b"filename", offset)?;
                let line = self.attr(e, b"line", offset)?;
                if let Some(value) = &line
                    && value.trim_start_matches(['+', '-']).parse::<u32>().is_err()
                {
                    self.violation(SchemaViolationKind::InvalidLocationLine(value.clone()), offset);
                }
                if let Some(builder) = self.message.as_mut() {
                    builder
                        .message
                        .locations
                        .push(SourceReference { filename, line });
                }
                self.skip_depth = 1;
            }
            (b"source", true, true) => {
                let duplicate = self.message.as_ref().is_some_and(|b| b.source.is_some());
                if duplicate {
                    self.violation(SchemaViolationKind::DuplicateSource, offset);
                    self.target = Some(TextTarget::Discard);
                } else {
                    self.target = Some(TextTarget::Source);
                }
            }
            (b"translation", true, true) => {
                let duplicate = self.message.as_ref().is_some_and(|b| b.translation_seen);
                if duplicate {
                    self.violation(SchemaViolationKind::DuplicateTranslation, offset);
                    self.target = Some(TextTarget::Discard);
                    return Ok(());
                }

                let status = match self.attr(e, b"type", offset)? {
                    None => TranslationStatus::Finished,
                    Some(value) => match TranslationStatus::from_type_attr(&value) {
                        Some(status) => status,
                        None => {
                            self.violation(
                                SchemaViolationKind::UnknownTranslationType(value),
                                offset,
                            );
                            TranslationStatus::Unfinished
                        }
                    },
                };
                if let Some(builder) = self.message.as_mut() {
                    builder.translation_seen = true;
                    builder.message.translation.status = status;
                }
                self.target = Some(TextTarget::Translation);
            }
            (b"numerusform", true, true) if self.target == Some(TextTarget::Translation) => {
                self.text.clear();
                self.target = Some(TextTarget::NumerusForm);
            }
            (b"oldsource", true, true) => self.target = Some(TextTarget::OldSource),
            (b"comment", true, true) => self.target = Some(TextTarget::Comment),
            (b"oldcomment", true, true) => self.target = Some(TextTarget::OldComment),
            (b"extracomment", true, true) => self.target = Some(TextTarget::ExtraComment),
            (b"translatorcomment", true, true) => {
                self.target = Some(TextTarget::TranslatorComment)
            }
            (b"byte", _, _) if self.target.is_some() => {
                if let Some(value) = self.attr(e, b"value", offset)?
                    && let Some(c) = decode_byte(&value)
                {
                    self.text.push(c);
                }
                self.skip_depth = 1;
            }
            (other, _, _) if self.target.is_some() => {
                let element = String::from_utf8_lossy(other).to_string();
                self.violation(SchemaViolationKind::UnsupportedElement(element), offset);
                self.skip_depth = 1;
            }
            (other, _, _) => {
                debug!(
                    file = self.file_path,
                    element = %String::from_utf8_lossy(other),
                    "keeping unmodelled element"
                );
                self.raw_start = Some(offset);
                self.skip_depth = 1;
            }
        }

        Ok(())
    }

    /// `offset` is the position just past the end tag.
    fn end(&mut self, name: &[u8], offset: usize) {
        if self.skip_depth > 0 {
            self.skip_depth -= 1;
            if self.skip_depth == 0
                && let Some(start) = self.raw_start.take()
            {
                self.keep_raw(start, offset);
            }
            return;
        }

        match name {
            b"name" if self.message.is_none() => {
                if self.target == Some(TextTarget::ContextName)
                    && let Some(context) = self.context.as_mut()
                {
                    context.name = std::mem::take(&mut self.text);
                    self.context_name_seen = true;
                }
                self.finish_text();
            }
            b"source" | b"oldsource" | b"comment" | b"oldcomment" | b"extracomment"
            | b"translatorcomment" => {
                let text = std::mem::take(&mut self.text);
                if let Some(builder) = self.message.as_mut() {
                    let message = &mut builder.message;
                    match self.target {
                        Some(TextTarget::Source) => builder.source = Some(text),
                        Some(TextTarget::OldSource) => message.oldsource = Some(text),
                        Some(TextTarget::Comment) => message.comment = Some(text),
                        Some(TextTarget::OldComment) => message.oldcomment = Some(text),
                        Some(TextTarget::ExtraComment) => message.extracomment = Some(text),
                        Some(TextTarget::TranslatorComment) => {
                            message.translatorcomment = Some(text)
                        }
                        _ => {}
                    }
                }
                self.finish_text();
            }
            b"numerusform" => {
                let form = std::mem::take(&mut self.text);
                if self.target == Some(TextTarget::NumerusForm)
                    && let Some(builder) = self.message.as_mut()
                {
                    builder.message.translation.numerus_forms.push(form);
                }
                self.target = Some(TextTarget::Translation);
            }
            b"translation" => {
                let text = std::mem::take(&mut self.text);
                if self.target == Some(TextTarget::Translation)
                    && let Some(builder) = self.message.as_mut()
                {
                    let translation = &mut builder.message.translation;
                    // Whitespace between <numerusform> children is layout.
                    if translation.numerus_forms.is_empty() {
                        translation.text = text;
                    }
                }
                self.finish_text();
            }
            b"message" => self.finish_message(),
            b"context" => {
                if let Some(context) = self.context.take() {
                    if !self.context_name_seen {
                        self.file.violations.push(SchemaViolation {
                            kind: SchemaViolationKind::MissingContextName,
                            location: context.location.clone(),
                            context: None,
                        });
                    }
                    self.file.contexts.push(context);
                }
            }
            _ => {}
        }
    }

    /// Attach the source text of an unmodelled element to its parent.
    fn keep_raw(&mut self, start: usize, end: usize) {
        let Some(raw) = self.content.get(start..end) else {
            return;
        };
        let raw = raw.to_string();
        if let Some(builder) = self.message.as_mut() {
            builder.message.extras.push(raw);
        } else if let Some(context) = self.context.as_mut() {
            context.extras.push(raw);
        } else {
            self.file.extras.push(raw);
        }
    }

    fn finish_text(&mut self) {
        self.text.clear();
        self.target = None;
    }

    fn finish_message(&mut self) {
        let Some(builder) = self.message.take() else {
            return;
        };
        let MessageBuilder {
            mut message,
            source,
            translation_seen,
        } = builder;
        let context_name = self.context.as_ref().map(|c| c.name.clone());

        let Some(source) = source else {
            self.file.violations.push(SchemaViolation {
                kind: SchemaViolationKind::MissingSource,
                location: message.location.clone(),
                context: context_name,
            });
            return;
        };
        message.source = source;

        if !translation_seen {
            message.translation = Translation::unfinished("");
            self.file.violations.push(SchemaViolation {
                kind: SchemaViolationKind::MissingTranslation,
                location: message.location.clone(),
                context: context_name.clone(),
            });
        } else if message.numerus && message.translation.numerus_forms.is_empty() {
            self.file.violations.push(SchemaViolation {
                kind: SchemaViolationKind::NumerusWithoutForms,
                location: message.location.clone(),
                context: context_name.clone(),
            });
        }

        if let Some(context) = self.context.as_mut() {
            context.messages.push(message);
        }
    }

    fn attr(
        &self,
        e: &BytesStart<'_>,
        key: &[u8],
        offset: usize,
    ) -> Result<Option<String>, TsParseError> {
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.xml_error(offset, err.to_string()))?;
            if attr.key.as_ref() == key {
                let value = attr
                    .unescape_value()
                    .map_err(|err| self.xml_error(offset, err.to_string()))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }

    fn location(&self, offset: usize) -> CatalogLocation {
        let (line, col) = self.line_index.position(self.content, offset);
        CatalogLocation::new(self.file_path, line, col)
    }

    fn violation(&mut self, kind: SchemaViolationKind, offset: usize) {
        let location = self.location(offset);
        let context = self.context.as_ref().map(|c| c.name.clone());
        self.file.violations.push(SchemaViolation {
            kind,
            location,
            context,
        });
    }

    fn xml_error(&self, offset: usize, message: String) -> TsParseError {
        let (line, col) = self.line_index.position(self.content, offset);
        TsParseError::Xml {
            path: self.file_path.to_string(),
            line,
            col,
            message,
        }
    }
}

/// Decode the `value` of a `<byte>` element: decimal, `x3e8` or `0x3e8`.
fn decode_byte(value: &str) -> Option<char> {
    let (radix, digits) = if let Some(hex) = value.strip_prefix("0x") {
        (16, hex)
    } else if let Some(hex) = value.strip_prefix('x') {
        (16, hex)
    } else {
        (10, value)
    };
    let n = u32::from_str_radix(digits, radix).ok()?;
    if n == 0 {
        return None;
    }
    char::from_u32(n)
}

/// Detect the whitespace before `<context>` and the indentation unit below it.
fn detect_indent(content: &str) -> (String, String) {
    let default = (String::new(), DEFAULT_INDENT.to_string());
    let Some(context_pos) = content.find("<context>") else {
        return default;
    };
    let context_indent = leading_whitespace(content, context_pos);

    let unit = content[context_pos..]
        .find("<name>")
        .map(|p| leading_whitespace(content, context_pos + p))
        .and_then(|ws| ws.strip_prefix(context_indent).map(str::to_string))
        .filter(|unit| !unit.is_empty())
        .unwrap_or(default.1);

    (context_indent.to_string(), unit)
}

fn leading_whitespace(content: &str, pos: usize) -> &str {
    let line_start = content[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let prefix = &content[line_start..pos];
    if prefix.chars().all(|c| c == ' ' || c == '\t') {
        prefix
    } else {
        ""
    }
}
