//! heartsc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the phases of the Hearts compiler:
//!
//! - [`span`] - Source locations ([`Span`]) and source text lookup ([`SourceFile`])
//! - [`diagnostic`] - Errors and warnings, their codes, and the [`Handler`]
//!   that collects them
//! - [`error`] - Error types for the utilities themselves
//!
//! # Examples
//!
//! ```
//! use heartsc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::point(3, 7))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};
