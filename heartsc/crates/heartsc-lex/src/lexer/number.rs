//! Number literal lexing.
//!
//! Literal text is kept exactly as written, prefix included. Turning it into
//! a value (and checking its width) is left to later phases.

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::is_digit_in_base;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Binary: `0b1010`, `0B1` -> `BinaryLiteral`
    /// - Hexadecimal: `0x1F`, `0XdeadBEEF` -> `HexLiteral`
    /// - Decimal: `42`, `007` -> `NumberLiteral`
    /// - Float: `3.14`, `1e9`, `2.5E-3` -> `FloatLiteral`
    pub(crate) fn lex_number(&mut self) -> LexResult<Token> {
        if self.cursor.peek() == Some('0') {
            match self.cursor.peek_nth(1) {
                Some('b' | 'B') => return self.lex_prefixed(2, TokenKind::BinaryLiteral),
                Some('x' | 'X') => return self.lex_prefixed(16, TokenKind::HexLiteral),
                _ => {},
            }
        }
        Ok(self.lex_decimal())
    }

    /// Lexes `0b`/`0x` followed by digits of `base`.
    ///
    /// Digits stop at the first character outside the base, so `0b102` is
    /// `0b10` followed by `2`.
    fn lex_prefixed(&mut self, base: u32, kind: TokenKind) -> LexResult<Token> {
        self.cursor.advance();
        self.cursor.advance();

        if self.cursor.advance_while(|c| is_digit_in_base(c, base)) == 0 {
            let start = self.token_start;
            return Err(LexError::MalformedNumericPrefix {
                prefix: self.cursor.slice_from(start.position).to_string(),
                line: start.line,
                column: start.column,
            });
        }

        Ok(self.token_from_source(kind))
    }

    /// Lexes a decimal integer or float.
    ///
    /// The fraction is only taken when a digit follows the `.`, and the
    /// exponent only when a digit follows `e`/`E` and its optional sign.
    /// Otherwise those characters are left for the next token.
    fn lex_decimal(&mut self) -> Token {
        self.cursor.advance_while(|c| c.is_ascii_digit());
        let mut is_float = false;

        if self.cursor.peek() == Some('.') && self.digit_at(1) {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
            is_float = true;
        }

        if matches!(self.cursor.peek(), Some('e' | 'E')) {
            let sign_len = usize::from(matches!(self.cursor.peek_nth(1), Some('+' | '-')));
            if self.digit_at(1 + sign_len) {
                for _ in 0..=sign_len {
                    self.cursor.advance();
                }
                self.cursor.advance_while(|c| c.is_ascii_digit());
                is_float = true;
            }
        }

        let kind = if is_float {
            TokenKind::FloatLiteral
        } else {
            TokenKind::NumberLiteral
        };
        self.token_from_source(kind)
    }

    fn digit_at(&self, n: usize) -> bool {
        self.cursor.peek_nth(n).is_some_and(|c| c.is_ascii_digit())
    }
}
