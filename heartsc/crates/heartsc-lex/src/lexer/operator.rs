//! Operator and delimiter lexing.
//!
//! Operators are matched longest first against a fixed table, so `<<=` wins
//! over `<<`, which wins over `<`. Delimiters are always one character.

use crate::token::{Token, TokenKind};
use crate::unicode::is_operator_start;
use crate::Lexer;

/// Every operator spelling, ordered by length descending.
const OPERATORS: &[(&str, TokenKind)] = &[
    ("<<=", TokenKind::ShlAssign),
    (">>=", TokenKind::ShrAssign),
    ("<<", TokenKind::Shl),
    (">>", TokenKind::Shr),
    ("<=", TokenKind::Le),
    (">=", TokenKind::Ge),
    ("==", TokenKind::Eq),
    ("!=", TokenKind::Neq),
    ("&&", TokenKind::And),
    ("||", TokenKind::Or),
    ("^^", TokenKind::Xor),
    ("+=", TokenKind::AddAssign),
    ("-=", TokenKind::SubAssign),
    ("*=", TokenKind::MulAssign),
    ("/=", TokenKind::DivAssign),
    ("%=", TokenKind::ModAssign),
    ("+", TokenKind::Add),
    ("-", TokenKind::Sub),
    ("*", TokenKind::Mul),
    ("/", TokenKind::Div),
    ("%", TokenKind::Mod),
    ("&", TokenKind::BitAnd),
    ("|", TokenKind::BitOr),
    ("^", TokenKind::BitXor),
    ("~", TokenKind::BitNot),
    ("<", TokenKind::Lt),
    (">", TokenKind::Gt),
    ("!", TokenKind::Not),
    ("=", TokenKind::Assign),
];

impl<'a> Lexer<'a> {
    /// Lexes the longest operator at the cursor, if any.
    pub(crate) fn lex_operator(&mut self) -> Option<Token> {
        if !self.cursor.peek().is_some_and(is_operator_start) {
            return None;
        }
        let &(spelling, kind) = OPERATORS
            .iter()
            .find(|(spelling, _)| self.cursor.remaining().starts_with(*spelling))?;
        self.cursor.match_str(spelling);
        Some(self.token_from_source(kind))
    }

    /// Lexes a single delimiter character, if any.
    pub(crate) fn lex_delimiter(&mut self) -> Option<Token> {
        let kind = TokenKind::from_delimiter(self.cursor.peek()?)?;
        self.cursor.advance();
        Some(self.token_from_source(kind))
    }
}
