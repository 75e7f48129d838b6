//! Diagnostic codes for categorizing compiler errors and warnings.
//!
//! Codes are grouped by phase: `E01xx` / `W01xx` belong to the lexer.
//!
//! # Examples
//!
//! ```
//! use heartsc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.as_str(), "E0101");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is zero-padded to four digits
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use heartsc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code.number(), 1001);
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E0101")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E0101-E0199)
    // =========================================================================

    /// E0101: String literal not closed before end of line or input
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 101);
    /// E0102: Character literal not closed before end of line or input
    pub const E_LEXER_UNTERMINATED_CHAR: Self = Self::new("E", 102);
    /// E0103: `0b` / `0x` prefix with no digits after it
    pub const E_LEXER_MALFORMED_NUMERIC_PREFIX: Self = Self::new("E", 103);
    /// E0104: Character literal that is empty or holds more than one character
    pub const E_LEXER_INVALID_CHAR_LITERAL: Self = Self::new("E", 104);
    /// E0105: Unsupported escape sequence
    pub const E_LEXER_INVALID_ESCAPE: Self = Self::new("E", 105);
    /// E0106: Block comment not closed before end of input
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 106);
    /// E0107: Character outside the lexical grammar
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 107);
    /// E0108: Nested block comments deeper than the configured limit
    pub const E_LEXER_COMMENT_TOO_DEEP: Self = Self::new("E", 108);

    // =========================================================================
    // LEXER WARNING CODES (W0101-W0199)
    // =========================================================================

    /// W0101: Character outside the lexical grammar, passed through as a token
    pub const W_LEXER_UNKNOWN_CHAR: Self = Self::new("W", 101);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
