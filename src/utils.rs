//! Common utility functions shared across the codebase.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Maximum display width of message text in one-line output.
pub const MAX_DISPLAY_WIDTH: usize = 60;

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use tsglot::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Pad"));
/// assert!(contains_alphabetic("パッド"));
/// assert!(contains_alphabetic("ISO 606 08B"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("---"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Render catalog text on one line: newlines become `\n` and text wider
/// than `max_width` columns is cut with an ellipsis.
///
/// Width is measured in terminal columns, so CJK text is cut at half the
/// character count of ASCII text.
pub fn one_line(text: &str, max_width: usize) -> String {
    let flat = text.replace('\r', "").replace('\n', "\\n");
    if UnicodeWidthStr::width(flat.as_str()) <= max_width {
        return flat;
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for c in flat.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
