//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for the source line
//! shown under a diagnostic.

use std::fmt::Write as _;

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::error::SourceMapResult;
use crate::span::{SourceFile, Span};

/// A source code snippet for display in diagnostics
///
/// Holds one source line and the column range to underline.
///
/// # Examples
///
/// ```
/// use heartsc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::point("reg q = 0x;", 1, 9);
/// assert_eq!(snippet.format(), "  1 | reg q = 0x;\n    |         ^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a snippet pointing at a single column
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column: column,
            end_column: column,
        }
    }

    /// Build a snippet for `span` from the line it starts on
    ///
    /// The underline covers the span's text up to the end of its first line,
    /// or a single caret for an empty span.
    ///
    /// # Examples
    ///
    /// ```
    /// use heartsc_util::diagnostic::SourceSnippet;
    /// use heartsc_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("t", "fn\nreg \"abc");
    /// let snippet = SourceSnippet::from_file(&file, Span::new(7, 11, 2, 5)).unwrap();
    /// assert_eq!(snippet.line, "reg \"abc");
    /// assert_eq!((snippet.start_column, snippet.end_column), (5, 9));
    /// ```
    pub fn from_file(file: &SourceFile, span: Span) -> SourceMapResult<Self> {
        let line = file.line_text(span.line as usize)?;
        let start_column = span.column.max(1) as usize;
        let width = if span.is_empty() {
            0
        } else {
            file.span_text(span)?
                .lines()
                .next()
                .map_or(0, |first| first.chars().count())
        };
        Ok(Self::point(line, span.line as usize, start_column).extend_to(start_column + width))
    }

    fn extend_to(mut self, end_column: usize) -> Self {
        self.end_column = end_column.max(self.start_column);
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line followed by a caret line under the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use heartsc_util::diagnostic::SourceSnippet;
    ///
    /// let snippet = SourceSnippet::point("'ab'", 4, 1);
    /// assert_eq!(snippet.format(), "  4 | 'ab'\n    | ^");
    /// ```
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        let mut result = String::new();
        let _ = writeln!(result, "{:>width$} | {}", self.line_number, self.line);
        let _ = write!(
            result,
            "{:>width$} | {}{}",
            "",
            " ".repeat(underline_start),
            "^".repeat(underline_len)
        );
        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use heartsc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use heartsc_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("invalid escape sequence '\\q'")
///     .code(DiagnosticCode::E_LEXER_INVALID_ESCAPE)
///     .span(Span::point(1, 4))
///     .help("supported escapes are \\n \\t \\r \\\\ \\\" \\' \\0")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source code snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Add a snippet for the builder's span taken from `file`
    ///
    /// Nothing is added when the span does not resolve to a line of `file`.
    pub fn snippet_from(self, file: &SourceFile) -> Self {
        match SourceSnippet::from_file(file, self.span) {
            Ok(snippet) => self.snippet(snippet),
            Err(_) => self,
        }
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and emit the diagnostic to the given handler
    ///
    /// # Examples
    ///
    /// ```
    /// use heartsc_util::diagnostic::{DiagnosticBuilder, Handler};
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::warning("unknown character '$'").emit(&handler);
    /// assert_eq!(handler.warning_count(), 1);
    /// ```
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
