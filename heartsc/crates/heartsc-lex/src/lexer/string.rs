//! String and character literal lexing.
//!
//! Both literal forms stay on one line and share the same escape set:
//! `\n \t \r \\ \" \' \0`. The token text is the decoded value.

use crate::cursor::CursorSnapshot;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `"..."` string literal.
    pub(crate) fn lex_string(&mut self) -> LexResult<Token> {
        let value = self.scan_quoted('"')?;
        Ok(self.make_token(TokenKind::StringLiteral, value))
    }

    /// Lexes a `'.'` character literal.
    ///
    /// The contents must decode to exactly one character, so `''` and `'ab'`
    /// are errors while `'\n'` is fine.
    pub(crate) fn lex_char(&mut self) -> LexResult<Token> {
        let value = self.scan_quoted('\'')?;

        let mut chars = value.chars();
        if chars.next().is_none() || chars.next().is_some() {
            let start = self.token_start;
            return Err(LexError::InvalidCharLiteral {
                found: value,
                line: start.line,
                column: start.column,
            });
        }

        Ok(self.make_token(TokenKind::CharLiteral, value))
    }

    /// Consumes an opening `quote`, the body, and the closing `quote`.
    ///
    /// Returns the decoded body. A newline or end of input before the close
    /// is reported at the opening quote.
    fn scan_quoted(&mut self, quote: char) -> LexResult<String> {
        self.cursor.advance();
        let mut value = String::new();

        loop {
            match self.cursor.peek() {
                Some(c) if c == quote => {
                    self.cursor.advance();
                    return Ok(value);
                },
                None | Some('\n') => return Err(self.unterminated(quote)),
                Some('\\') => {
                    let backslash = self.cursor.snapshot();
                    self.cursor.advance();
                    match self.parse_escape(backslash)? {
                        Some(c) => value.push(c),
                        None => return Err(self.unterminated(quote)),
                    }
                },
                Some(c) => {
                    self.cursor.advance();
                    value.push(c);
                },
            }
        }
    }

    /// Decodes the character after a backslash.
    ///
    /// Returns `Ok(None)` without consuming when the line or input ends
    /// instead, so the caller reports the literal as unterminated.
    fn parse_escape(&mut self, backslash: CursorSnapshot) -> LexResult<Option<char>> {
        let decoded = match self.cursor.peek() {
            None | Some('\n') => return Ok(None),
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('0') => '\0',
            Some('\\') => '\\',
            Some('"') => '"',
            Some('\'') => '\'',
            Some(other) => {
                return Err(LexError::InvalidEscape {
                    escape: other,
                    line: backslash.line,
                    column: backslash.column,
                })
            },
        };
        self.cursor.advance();
        Ok(Some(decoded))
    }

    fn unterminated(&self, quote: char) -> LexError {
        let start = self.token_start;
        if quote == '"' {
            LexError::UnterminatedString {
                line: start.line,
                column: start.column,
            }
        } else {
            LexError::UnterminatedChar {
                line: start.line,
                column: start.column,
            }
        }
    }
}
