//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Compiler phases report problems as [`Diagnostic`]s collected by a
//! [`Handler`]. Diagnostics are usually assembled with the fluent
//! [`DiagnosticBuilder`].
//!
//! # Examples
//!
//! ```
//! use heartsc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use heartsc_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated block comment")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
//!     .span(Span::point(1, 1))
//!     .emit(&handler);
//!
//! if handler.has_errors() {
//!     eprintln!("lexing failed");
//! }
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use heartsc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert!(!Level::Warning.is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error that stops the current phase
    Error,
    /// A warning that doesn't stop compilation
    Warning,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

/// Renders in the familiar compiler layout:
///
/// ```text
/// error[E0101]: unterminated string literal
///  --> 3:9
///   3 | reg s = "abc
///     |         ^
///   = help: close the literal with '"' on the same line
/// ```
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        if self.span.line > 0 {
            write!(f, "\n --> {}:{}", self.span.line, self.span.column)?;
        }
        for snippet in &self.snippets {
            write!(f, "\n{}", snippet.format())?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Handler for collecting and reporting diagnostics
///
/// Emission goes through `&self`, so a phase can hold a shared reference to
/// the handler while it runs.
///
/// # Examples
///
/// ```
/// use heartsc_util::diagnostic::{DiagnosticBuilder, Handler};
/// use heartsc_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(
///     DiagnosticBuilder::warning("unknown character '$'")
///         .span(Span::point(1, 1))
///         .build(),
/// );
/// assert!(!handler.has_errors());
/// assert_eq!(handler.warning_count(), 1);
/// ```
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for a warning at `span`
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count_level(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count_level(Level::Warning)
    }

    fn count_level(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("errors", &self.error_count())
            .field("warnings", &self.warning_count())
            .finish()
    }
}
