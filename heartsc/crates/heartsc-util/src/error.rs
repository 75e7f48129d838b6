//! Core error types for heartsc-util crate

use thiserror::Error;

/// Error type for source file lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        file_len: usize,
        span_start: usize,
        span_end: usize,
    },

    /// Range does not fall on UTF-8 character boundaries
    #[error("Span {start}..{end} is not on character boundaries")]
    NotCharBoundary { start: usize, end: usize },

    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },
}

/// Result type alias for source file operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
