//! Identifier and keyword lexing.

use crate::token::{boolean_from_ident, keyword_from_ident, Token, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, keyword, or boolean literal.
    ///
    /// Consumes the longest run of identifier characters, then classifies
    /// the whole word: keywords first, then `true`/`false`, otherwise an
    /// identifier. `regs` is therefore an identifier, not `reg` + `s`.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        let unicode = self.config.unicode_identifiers;
        self.cursor.advance_while(|c| is_ident_continue(c, unicode));

        let text = self.cursor.slice_from(self.token_start.position);
        let kind = keyword_from_ident(text)
            .or_else(|| boolean_from_ident(text).map(|_| TokenKind::BooleanLiteral))
            .unwrap_or(TokenKind::Identifier);

        self.make_token(kind, text)
    }
}
