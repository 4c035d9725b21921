use std::fmt;

/// Position information in a translation catalog (`.ts` file).
///
/// Points at the start tag of the element the report is about, usually
/// a `<message>`. Line and column are 1-indexed; column counts characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CatalogLocation {
    /// Path to the catalog file (e.g., "./translations/app_ja.ts").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl CatalogLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self::new(file_path, line, 1)
    }
}

impl fmt::Display for CatalogLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_path, self.line, self.col)
    }
}

/// Byte offset to line/column conversion for one document.
///
/// Line starts are computed once so every lookup is a binary search.
#[derive(Debug, Clone)]
pub struct LineIndex {
    offsets: Vec<usize>,
}

impl LineIndex {
    pub fn new(content: &str) -> Self {
        let mut offsets = vec![0];
        for (i, c) in content.char_indices() {
            if c == '\n' {
                offsets.push(i + 1);
            }
        }
        Self { offsets }
    }

    /// Returns the 1-based (line, col) of a byte offset in `content`.
    pub fn position(&self, content: &str, offset: usize) -> (usize, usize) {
        let offset = offset.min(content.len());
        let line = match self.offsets.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        };
        let line_start = self.offsets[line - 1];
        let col = content
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0);
        (line, col + 1)
    }
}
