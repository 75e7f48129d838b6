//! heartsc-lex - Lexical Analyzer for the Hearts Hardware Description Language
//!
//! This crate turns Hearts source text into a flat sequence of tokens for the
//! parser. It does maximal-munch scanning across overlapping classes, tracks
//! line and column for every token, decodes string and character escapes,
//! and reports malformed input as a typed [`LexError`].
//!
//! # Example Usage
//!
//! ```
//! use heartsc_lex::{Lexer, TokenKind};
//! use heartsc_util::Handler;
//!
//! let source = "entity counter { reg q: uint; }";
//!
//! // Whole input at once
//! let tokens = heartsc_lex::tokenize(source).unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Entity);
//! assert!(tokens.last().unwrap().is_eof());
//!
//! // Or one token at a time, with diagnostics collected by a handler
//! let handler = Handler::new();
//! let mut lexer = Lexer::new(source, &handler);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Entity);
//! assert_eq!(lexer.next_token().unwrap().text, "counter");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and the [`Token`] record
//! - [`lexer`] - The lexer and its per-class scanners
//! - [`cursor`] - Character cursor with line/column accounting
//! - [`unicode`] - Character class predicates
//! - [`config`] - Lexer configuration, loadable from TOML
//! - [`error`] - Lexical errors and their diagnostics
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `if`, `else`, `elsif`, `for`, `fn`, `entity`, `bits`, `generic`, `always`,
//! `pipeline`, `reg`, `sint`, `uint`, `signal`
//!
//! ## Literals
//!
//! - **Decimal**: `42`
//! - **Binary**: `0b1010`
//! - **Hex**: `0x1F`
//! - **Float**: `3.14`, `1e9`, `2.5E-3`
//! - **String**: `"hello\n"`
//! - **Character**: `'a'`, `'\t'`
//! - **Boolean**: `true`, `false`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Bitwise**: `&`, `|`, `^`, `~`, `<<`, `>>`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `^^`, `!`
//! - **Assignment**: `=`, `+=`, `-=`, `*=`, `/=`, `%=`, `<<=`, `>>=`
//!
//! ## Delimiters
//!
//! `(` `)` `{` `}` `[` `]` `;` `:` `,` `.` `@` `?` `#`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::{ConfigError, LexerConfig, UnknownCharPolicy};
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{boolean_from_ident, keyword_from_ident, Token, TokenCategory, TokenKind};

use heartsc_util::Handler;

/// Lexes `source` with the default configuration.
///
/// Diagnostics go to a throwaway handler; use [`Lexer`] directly to keep them.
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    tokenize_with_config(source, &LexerConfig::default())
}

/// Lexes `source` with an explicit configuration.
pub fn tokenize_with_config(source: &str, config: &LexerConfig) -> LexResult<Vec<Token>> {
    let handler = Handler::new();
    Lexer::with_config(source, &handler, config.clone()).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_empty_source() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
    }

    #[test]
    fn test_whitespace_and_comments_only() {
        assert_eq!(kinds("  // hi\n\t/* x */ \n"), [TokenKind::Eof]);
    }

    #[test]
    fn test_register_declaration() {
        let tokens = tokenize("reg [7:0] q = 0x1F;").unwrap();
        let summary: Vec<_> = tokens
            .iter()
            .map(|t| (t.kind, t.text.as_str(), t.column()))
            .collect();
        assert_eq!(
            summary,
            [
                (TokenKind::Reg, "reg", 1),
                (TokenKind::LBracket, "[", 5),
                (TokenKind::NumberLiteral, "7", 6),
                (TokenKind::Colon, ":", 7),
                (TokenKind::NumberLiteral, "0", 8),
                (TokenKind::RBracket, "]", 9),
                (TokenKind::Identifier, "q", 11),
                (TokenKind::Assign, "=", 13),
                (TokenKind::HexLiteral, "0x1F", 15),
                (TokenKind::Semicolon, ";", 19),
                (TokenKind::Eof, "", 20),
            ]
        );
    }

    #[test]
    fn test_lines_advance() {
        let tokens = tokenize("fn\nentity").unwrap();
        assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
        assert_eq!((tokens[1].line(), tokens[1].column()), (2, 1));
    }

    #[test]
    fn test_always_block() {
        assert_eq!(
            kinds("always @(clk) { q += 1; }"),
            [
                TokenKind::Always,
                TokenKind::At,
                TokenKind::LParen,
                TokenKind::Identifier,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::Identifier,
                TokenKind::AddAssign,
                TokenKind::NumberLiteral,
                TokenKind::Semicolon,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_tokenize_with_config() {
        let config = LexerConfig {
            unknown_chars: UnknownCharPolicy::Fatal,
            ..LexerConfig::default()
        };
        assert!(tokenize("a $ b").is_ok());
        assert!(matches!(
            tokenize_with_config("a $ b", &config),
            Err(LexError::UnexpectedCharacter { character: '$', .. })
        ));
    }

    #[test]
    fn test_error_stops_scan() {
        let err = tokenize("x = \"abc").unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { line: 1, column: 5 });
    }
}
