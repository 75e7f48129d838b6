//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a byte range with the human-readable line/column of its
//! first character. [`SourceFile`] maps those coordinates back to source text
//! for diagnostics.
//!
//! # Examples
//!
//! ```
//! use heartsc_util::span::Span;
//!
//! let span = Span::new(10, 16, 2, 5);
//! assert_eq!(span.len(), 6);
//! assert!(!span.is_empty());
//! ```

mod source_file;

pub use source_file::SourceFile;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end), end exclusive
/// - Line and column numbers of the start (1-based)
///
/// # Examples
///
/// ```
/// use heartsc_util::span::Span;
///
/// let span = Span::new(0, 6, 1, 1);
/// let point = Span::point(3, 9);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use heartsc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    ///
    /// # Examples
    ///
    /// ```
    /// use heartsc_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span at a single line/column, with no byte extent
    #[inline]
    pub const fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    ///
    /// # Examples
    ///
    /// ```
    /// use heartsc_util::span::Span;
    ///
    /// assert!(Span::new(4, 4, 1, 5).is_empty());
    /// assert!(!Span::new(4, 6, 1, 5).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}
