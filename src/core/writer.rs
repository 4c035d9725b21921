//! Serialize a [`TsFile`] back to TS XML in lupdate's layout.
//!
//! Writing an unmodified, lupdate-produced catalog reproduces it byte for
//! byte, so `tsglot clean --apply` only changes what it removes. Elements
//! the model does not know are written back verbatim at the end of their
//! parent.

use std::{fmt::Write as _, fs, path::Path};

use anyhow::{Context as _, Result};
use quick_xml::escape::{escape, partial_escape};

use crate::core::{Context, Message, SourceReference, TsFile};

pub fn write_ts(file: &TsFile) -> String {
    let mut out = String::with_capacity(file.message_count() * 256);
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS");
    push_attr(&mut out, "version", file.version.as_deref());
    push_attr(&mut out, "language", file.language.as_deref());
    push_attr(&mut out, "sourcelanguage", file.source_language.as_deref());
    out.push_str(">\n");

    let mut writer = Writer {
        out,
        base: &file.context_indent,
        unit: &file.indent,
    };
    for extra in &file.extras {
        writer.extra(0, extra);
    }
    for context in &file.contexts {
        writer.context(context);
    }

    let mut out = writer.out;
    out.push_str("</TS>\n");
    out
}

pub fn write_ts_file(file: &TsFile, path: &Path) -> Result<()> {
    fs::write(path, write_ts(file))
        .with_context(|| format!("Failed to write catalog: {}", path.display()))
}

struct Writer<'a> {
    out: String,
    base: &'a str,
    unit: &'a str,
}

impl Writer<'_> {
    fn indent(&mut self, depth: usize) {
        self.out.push_str(self.base);
        for _ in 0..depth {
            self.out.push_str(self.unit);
        }
    }

    fn context(&mut self, context: &Context) {
        self.indent(0);
        self.out.push_str("<context>\n");
        self.indent(1);
        self.out.push_str("<name>");
        push_text(&mut self.out, &context.name);
        self.out.push_str("</name>\n");

        for message in &context.messages {
            self.message(message);
        }
        for extra in &context.extras {
            self.extra(1, extra);
        }

        self.indent(0);
        self.out.push_str("</context>\n");
    }

    fn message(&mut self, message: &Message) {
        self.indent(1);
        self.out.push_str("<message");
        push_attr(&mut self.out, "id", message.id.as_deref());
        if message.numerus {
            push_attr(&mut self.out, "numerus", Some("yes"));
        }
        self.out.push_str(">\n");

        for location in &message.locations {
            self.location(location);
        }

        self.element("source", Some(&message.source));
        self.element("oldsource", message.oldsource.as_deref());
        self.element("comment", message.comment.as_deref());
        self.element("oldcomment", message.oldcomment.as_deref());
        self.element("extracomment", message.extracomment.as_deref());
        self.element("translatorcomment", message.translatorcomment.as_deref());
        self.translation(message);
        for extra in &message.extras {
            self.extra(2, extra);
        }

        self.indent(1);
        self.out.push_str("</message>\n");
    }

    fn extra(&mut self, depth: usize, raw: &str) {
        self.indent(depth);
        self.out.push_str(raw);
        self.out.push('\n');
    }

    fn location(&mut self, location: &SourceReference) {
        self.indent(2);
        self.out.push_str("<location");
        push_attr(&mut self.out, "filename", location.filename.as_deref());
        push_attr(&mut self.out, "line", location.line.as_deref());
        self.out.push_str("/>\n");
    }

    fn element(&mut self, name: &str, text: Option<&str>) {
        let Some(text) = text else {
            return;
        };
        self.indent(2);
        let _ = write!(self.out, "<{}>", name);
        push_text(&mut self.out, text);
        let _ = writeln!(self.out, "</{}>", name);
    }

    fn translation(&mut self, message: &Message) {
        let translation = &message.translation;
        self.indent(2);
        self.out.push_str("<translation");
        push_attr(&mut self.out, "type", translation.status.type_attr());
        self.out.push('>');

        if message.numerus && !translation.numerus_forms.is_empty() {
            self.out.push('\n');
            for form in &translation.numerus_forms {
                self.indent(3);
                self.out.push_str("<numerusform>");
                push_text(&mut self.out, form);
                self.out.push_str("</numerusform>\n");
            }
            self.indent(2);
        } else {
            push_text(&mut self.out, &translation.text);
        }
        self.out.push_str("</translation>\n");
    }
}

fn push_attr(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = write!(out, " {}=\"{}\"", name, escape(value));
    }
}

/// Escape `&`, `<` and `>`; quotes stay literal in character data.
/// Control characters XML 1.0 cannot carry become `<byte>` elements.
fn push_text(out: &mut String, text: &str) {
    let mut rest = text;
    while let Some(pos) = rest.find(is_unrepresentable) {
        out.push_str(&partial_escape(&rest[..pos]));
        let Some(c) = rest[pos..].chars().next() else {
            break;
        };
        let _ = write!(out, "<byte value=\"x{:x}\"/>", c as u32);
        rest = &rest[pos + c.len_utf8()..];
    }
    out.push_str(&partial_escape(rest));
}

fn is_unrepresentable(c: char) -> bool {
    (c as u32) < 0x20 && !matches!(c, '\t' | '\n' | '\r')
}
