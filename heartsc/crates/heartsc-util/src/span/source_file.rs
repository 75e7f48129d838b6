//! Source file line tables.
//!
//! [`SourceFile`] keeps the text of one compilation input together with the
//! byte offset of every line start, so diagnostics can go from a [`Span`]
//! back to the line it points at.

use std::sync::Arc;

use super::Span;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and precomputed line starts
///
/// # Examples
///
/// ```
/// use heartsc_util::span::SourceFile;
///
/// let file = SourceFile::new("alu.hearts", "entity alu {\n}\n");
/// assert_eq!(file.name(), "alu.hearts");
/// assert_eq!(file.line_at(1), Some("entity alu {"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Byte offset of the first character of every line
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the total number of lines
    ///
    /// A trailing newline opens a final, empty line.
    ///
    /// # Examples
    ///
    /// ```
    /// use heartsc_util::span::SourceFile;
    ///
    /// assert_eq!(SourceFile::new("a", "x\ny").line_count(), 2);
    /// assert_eq!(SourceFile::new("a", "x\n").line_count(), 2);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use heartsc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a", "line1\r\nline2");
    /// assert_eq!(file.line_at(1), Some("line1"));
    /// assert_eq!(file.line_at(2), Some("line2"));
    /// assert_eq!(file.line_at(3), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());
        self.content
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }

    /// Like [`SourceFile::line_at`], but reports an out-of-range line as an error
    pub fn line_text(&self, line: usize) -> SourceMapResult<&str> {
        self.line_at(line).ok_or(SourceMapError::InvalidLineNumber {
            line,
            max_lines: self.line_count(),
        })
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Examples
    ///
    /// ```
    /// use heartsc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a", "reg q;");
    /// assert_eq!(file.extract_range(0, 3).unwrap(), "reg");
    /// assert!(file.extract_range(4, 2).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        self.content
            .get(start..end)
            .ok_or(SourceMapError::NotCharBoundary { start, end })
    }

    /// Extract the text covered by a span
    pub fn span_text(&self, span: Span) -> SourceMapResult<&str> {
        self.extract_range(span.start, span.end)
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_starts() {
        let file = SourceFile::new("t", "ab\ncd\n\nef");
        assert_eq!(file.line_count(), 4);
        assert_eq!(file.line_start(0), Some(0));
        assert_eq!(file.line_start(1), Some(3));
        assert_eq!(file.line_start(2), Some(6));
        assert_eq!(file.line_start(3), Some(7));
        assert_eq!(file.line_start(4), None);
    }

    #[test]
    fn test_empty_file_has_one_line() {
        let file = SourceFile::new("t", "");
        assert_eq!(file.line_count(), 1);
        assert_eq!(file.line_at(1), Some(""));
    }

    #[test]
    fn test_line_at_zero() {
        let file = SourceFile::new("t", "x");
        assert_eq!(file.line_at(0), None);
    }

    #[test]
    fn test_line_text_error() {
        let file = SourceFile::new("t", "x\ny");
        assert_eq!(file.line_text(2).unwrap(), "y");
        assert_eq!(
            file.line_text(5),
            Err(SourceMapError::InvalidLineNumber { line: 5, max_lines: 2 })
        );
    }

    #[test]
    fn test_extract_range_errors() {
        let file = SourceFile::new("t", "aé");
        assert!(matches!(
            file.extract_range(0, 10),
            Err(SourceMapError::SpanOutOfBounds { .. })
        ));
        assert!(matches!(
            file.extract_range(0, 2),
            Err(SourceMapError::NotCharBoundary { .. })
        ));
        assert_eq!(file.extract_range(1, 3).unwrap(), "é");
    }

    #[test]
    fn test_span_text() {
        let file = SourceFile::new("t", "reg q;");
        assert_eq!(file.span_text(Span::new(4, 5, 1, 5)).unwrap(), "q");
    }
}
