//! Placeholder and keyboard accelerator extraction.
//!
//! A finished translation must carry the same placeholders as its source,
//! in any order. Recognized forms:
//!
//! - Qt positional: `%1` .. `%99`, `%L1`
//! - Qt plural count: `%n`, `%Ln`
//! - printf: `%s`, `%d`, `%5.2f`, `%ld`, ... (`%%` is a literal percent)
//! - Python: `%(name)s`, `{}`, `{0}`, `{name}`

use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"%%",
        r"|%\([A-Za-z_][A-Za-z0-9_]*\)[-+#0]*[0-9]*(?:\.[0-9]+)?[diouxXeEfFgGcrs]",
        r"|%[-+#0]*(?:[0-9]+|\*)?(?:\.(?:[0-9]+|\*))?(?:hh|h|ll|l|L|q|j|z|t)?[diouxXeEfFgGaAcsp]",
        r"|%L?n",
        r"|%L?[1-9][0-9]?",
        r"|\{[A-Za-z0-9_]*\}",
    ))
    .unwrap()
});

static ENTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#x[0-9A-Fa-f]+);").unwrap());

/// Placeholders of `text`, in order of appearance.
pub fn extract_placeholders(text: &str) -> Vec<&str> {
    PLACEHOLDER_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|p| *p != "%%")
        .collect()
}

/// Difference between the placeholders of a source and a translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderDiff {
    /// In the source but not in the translation.
    pub missing: Vec<String>,
    /// In the translation but not in the source.
    pub unexpected: Vec<String>,
}

impl PlaceholderDiff {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Compare placeholders as multisets; order does not matter.
pub fn compare_placeholders(source: &str, translation: &str) -> PlaceholderDiff {
    let mut expected = extract_placeholders(source);
    let mut actual = extract_placeholders(translation);
    expected.sort_unstable();
    actual.sort_unstable();

    let mut diff = PlaceholderDiff::default();
    let (mut i, mut j) = (0, 0);
    while i < expected.len() || j < actual.len() {
        match (expected.get(i), actual.get(j)) {
            (Some(e), Some(a)) if e == a => {
                i += 1;
                j += 1;
            }
            (Some(e), Some(a)) if e < a => {
                diff.missing.push(e.to_string());
                i += 1;
            }
            (Some(_), Some(a)) => {
                diff.unexpected.push(a.to_string());
                j += 1;
            }
            (Some(e), None) => {
                diff.missing.push(e.to_string());
                i += 1;
            }
            (None, Some(a)) => {
                diff.unexpected.push(a.to_string());
                j += 1;
            }
            (None, None) => break,
        }
    }
    diff
}

/// Keyboard accelerator of a UI string (`&File` -> `F`).
///
/// `&&` is a literal ampersand and `&nbsp;`-style entities in rich text
/// are not accelerators.
pub fn accelerator(text: &str) -> Option<char> {
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        let after = &rest[pos + 1..];
        let mut chars = after.chars();
        match chars.next() {
            Some('&') => rest = chars.as_str(),
            Some(c) if !c.is_whitespace() && !ENTITY_REGEX.is_match(after) => return Some(c),
            _ => rest = after,
        }
    }
    None
}
