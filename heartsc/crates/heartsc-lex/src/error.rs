//! Lexical errors.
//!
//! Every [`LexError`] is fatal: the lexer stops at the first one. Each
//! variant records the 1-based line and column where the offending construct
//! starts, and its message repeats them.

use heartsc_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceFile, Span};
use thiserror::Error;

/// A fatal lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string literal reached end of line or input before its closing `"`.
    #[error("unterminated string literal at line {line}, column {column}")]
    UnterminatedString { line: u32, column: u32 },

    /// A character literal reached end of line or input before its closing `'`.
    #[error("unterminated character literal at line {line}, column {column}")]
    UnterminatedChar { line: u32, column: u32 },

    /// `0b` or `0x` with no digit of that base after it.
    #[error("no digits after '{prefix}' prefix at line {line}, column {column}")]
    MalformedNumericPrefix {
        prefix: String,
        line: u32,
        column: u32,
    },

    /// A character literal that decodes to zero or several characters.
    #[error(
        "invalid character literal '{found}' at line {line}, column {column}: \
         expected exactly one character"
    )]
    InvalidCharLiteral {
        found: String,
        line: u32,
        column: u32,
    },

    /// A backslash followed by a character with no escape meaning.
    #[error("invalid escape sequence '\\{escape}' at line {line}, column {column}")]
    InvalidEscape { escape: char, line: u32, column: u32 },

    /// A `/*` whose comment never closes.
    #[error("unterminated block comment at line {line}, column {column}")]
    UnterminatedBlockComment { line: u32, column: u32 },

    /// A character outside the lexical grammar, under the fatal policy.
    #[error("unexpected character {character:?} at line {line}, column {column}")]
    UnexpectedCharacter {
        character: char,
        line: u32,
        column: u32,
    },

    /// Nested block comments deeper than the configured limit.
    #[error("block comment nesting exceeds {limit} levels at line {line}, column {column}")]
    CommentTooDeep { limit: u32, line: u32, column: u32 },
}

/// Result type alias for lexer operations
pub type LexResult<T> = std::result::Result<T, LexError>;

impl LexError {
    /// Line where the offending construct starts (1-based).
    pub fn line(&self) -> u32 {
        self.position().0
    }

    /// Column where the offending construct starts (1-based).
    pub fn column(&self) -> u32 {
        self.position().1
    }

    fn position(&self) -> (u32, u32) {
        match *self {
            LexError::UnterminatedString { line, column }
            | LexError::UnterminatedChar { line, column }
            | LexError::MalformedNumericPrefix { line, column, .. }
            | LexError::InvalidCharLiteral { line, column, .. }
            | LexError::InvalidEscape { line, column, .. }
            | LexError::UnterminatedBlockComment { line, column }
            | LexError::UnexpectedCharacter { line, column, .. }
            | LexError::CommentTooDeep { line, column, .. } => (line, column),
        }
    }

    /// Point span at the error position.
    pub fn span(&self) -> Span {
        let (line, column) = self.position();
        Span::point(line, column)
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::UnterminatedChar { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_CHAR,
            LexError::MalformedNumericPrefix { .. } => {
                DiagnosticCode::E_LEXER_MALFORMED_NUMERIC_PREFIX
            },
            LexError::InvalidCharLiteral { .. } => DiagnosticCode::E_LEXER_INVALID_CHAR_LITERAL,
            LexError::InvalidEscape { .. } => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            LexError::UnterminatedBlockComment { .. } => {
                DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT
            },
            LexError::UnexpectedCharacter { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::CommentTooDeep { .. } => DiagnosticCode::E_LEXER_COMMENT_TOO_DEEP,
        }
    }

    /// What a well-formed construct looks like.
    pub fn help(&self) -> String {
        match self {
            LexError::UnterminatedString { .. } => {
                "close the string with '\"' before the end of the line".to_string()
            },
            LexError::UnterminatedChar { .. } => {
                "close the character literal with '\\'' before the end of the line".to_string()
            },
            LexError::MalformedNumericPrefix { prefix, .. } => {
                let digits = if prefix.eq_ignore_ascii_case("0b") {
                    "binary digits (0-1)"
                } else {
                    "hex digits (0-9, a-f, A-F)"
                };
                format!("'{}' must be followed by one or more {}", prefix, digits)
            },
            LexError::InvalidCharLiteral { .. } => {
                "use a string literal for more than one character".to_string()
            },
            LexError::InvalidEscape { .. } => {
                "supported escapes are \\n \\t \\r \\\\ \\\" \\' \\0".to_string()
            },
            LexError::UnterminatedBlockComment { .. } => "close the comment with '*/'".to_string(),
            LexError::UnexpectedCharacter { .. } => {
                "remove the character or place it inside a string literal".to_string()
            },
            LexError::CommentTooDeep { .. } => {
                "flatten the nested comments or raise max_comment_depth".to_string()
            },
        }
    }

    /// Renders this error as a diagnostic with a snippet of `file`.
    pub fn to_diagnostic(&self, file: &SourceFile) -> Diagnostic {
        DiagnosticBuilder::error(self.to_string())
            .code(self.code())
            .span(self.span())
            .snippet_from(file)
            .help(self.help())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartsc_util::Level;

    #[test]
    fn test_messages_carry_position() {
        let err = LexError::InvalidCharLiteral {
            found: "ab".to_string(),
            line: 3,
            column: 7,
        };
        assert_eq!(
            err.to_string(),
            "invalid character literal 'ab' at line 3, column 7: expected exactly one character"
        );

        let err = LexError::InvalidEscape {
            escape: 'q',
            line: 1,
            column: 4,
        };
        assert_eq!(err.to_string(), "invalid escape sequence '\\q' at line 1, column 4");

        let err = LexError::UnexpectedCharacter {
            character: '$',
            line: 2,
            column: 1,
        };
        assert_eq!(err.to_string(), "unexpected character '$' at line 2, column 1");
    }

    #[test]
    fn test_line_and_column() {
        let err = LexError::CommentTooDeep {
            limit: 4,
            line: 9,
            column: 12,
        };
        assert_eq!(err.line(), 9);
        assert_eq!(err.column(), 12);
        assert_eq!(err.span(), Span::point(9, 12));
    }

    #[test]
    fn test_codes() {
        let err = LexError::UnterminatedString { line: 1, column: 1 };
        assert_eq!(err.code().as_str(), "E0101");
        let err = LexError::MalformedNumericPrefix {
            prefix: "0x".to_string(),
            line: 1,
            column: 1,
        };
        assert_eq!(err.code().as_str(), "E0103");
    }

    #[test]
    fn test_prefix_help_names_the_base() {
        let bin = LexError::MalformedNumericPrefix {
            prefix: "0B".to_string(),
            line: 1,
            column: 1,
        };
        assert!(bin.help().contains("binary"));
        let hex = LexError::MalformedNumericPrefix {
            prefix: "0x".to_string(),
            line: 1,
            column: 1,
        };
        assert!(hex.help().contains("hex"));
    }

    #[test]
    fn test_to_diagnostic() {
        let file = SourceFile::new("t.hearts", "reg c = 'ab';");
        let err = LexError::InvalidCharLiteral {
            found: "ab".to_string(),
            line: 1,
            column: 9,
        };
        let diag = err.to_diagnostic(&file);
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_INVALID_CHAR_LITERAL));
        assert_eq!(diag.snippets.len(), 1);
        assert_eq!(diag.snippets[0].start_column, 9);
        assert_eq!(diag.helps.len(), 1);
        assert!(diag.to_string().starts_with("error[E0104]: invalid character literal"));
    }
}
