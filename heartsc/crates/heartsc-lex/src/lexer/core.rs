//! Core lexer implementation.
//!
//! This module contains the [`Lexer`] struct, the per-token dispatch, and the
//! two ways of driving it: [`Lexer::tokenize`] for the whole input and the
//! [`Iterator`] impl for pulling tokens one at a time.

use std::cell::OnceCell;

use heartsc_util::{DiagnosticCode, Handler, SourceFile, Span};
use tracing::{debug, trace, warn};

use crate::config::{LexerConfig, UnknownCharPolicy};
use crate::cursor::{Cursor, CursorSnapshot};
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_start;

/// Name used for the source in diagnostics.
const SOURCE_NAME: &str = "<input>";

/// Lexer for the Hearts language.
///
/// Transforms source text into tokens in a single forward pass. Fatal errors
/// are returned as [`LexError`] and also emitted to the handler as
/// diagnostics. Pass-through unknown characters only produce a warning.
///
/// # Example
///
/// ```
/// use heartsc_lex::{Lexer, TokenKind};
/// use heartsc_util::Handler;
///
/// let handler = Handler::new();
/// let tokens = Lexer::new("q <<= 1;", &handler).tokenize().unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Identifier,
///         TokenKind::ShlAssign,
///         TokenKind::NumberLiteral,
///         TokenKind::Semicolon,
///         TokenKind::Eof,
///     ]
/// );
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Sink for diagnostics.
    handler: &'a Handler,

    /// Behavior switches.
    pub(crate) config: LexerConfig,

    /// Where the token being scanned started.
    pub(crate) token_start: CursorSnapshot,

    /// Line table for diagnostic snippets, built on first use.
    source_file: OnceCell<SourceFile>,

    /// Set once `Eof` or an error has been yielded by the iterator.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default configuration.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self::with_config(source, handler, LexerConfig::default())
    }

    /// Creates a lexer with an explicit configuration.
    pub fn with_config(source: &'a str, handler: &'a Handler, config: LexerConfig) -> Self {
        let mut cursor = Cursor::new(source);
        if config.skip_bom && cursor.skip_bom() {
            trace!("skipped byte-order mark");
        }
        let token_start = cursor.snapshot();
        Self {
            cursor,
            handler,
            config,
            token_start,
            source_file: OnceCell::new(),
            finished: false,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Lexes the whole input.
    ///
    /// The result ends with exactly one `Eof` token. The first fatal error
    /// aborts the scan.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        debug!(bytes = self.cursor.source().len(), "lexing started");
        let tokens = self.by_ref().collect::<LexResult<Vec<_>>>()?;
        debug!(tokens = tokens.len(), "lexing finished");
        Ok(tokens)
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace and comments, then dispatches on the next character.
    /// At end of input this returns `Eof`, and keeps returning it if called
    /// again.
    pub fn next_token(&mut self) -> LexResult<Token> {
        let result = self.scan_token();
        match &result {
            Ok(token) => trace!(
                kind = token.kind.name(),
                text = %token.text,
                line = token.line(),
                column = token.column(),
                "token"
            ),
            Err(err) => {
                debug!(code = %err.code(), "{}", err);
                self.report(err);
            },
        }
        result
    }

    fn scan_token(&mut self) -> LexResult<Token> {
        self.skip_whitespace_and_comments()?;
        self.token_start = self.cursor.snapshot();

        let Some(c) = self.cursor.peek() else {
            return Ok(self.make_token(TokenKind::Eof, String::new()));
        };

        if is_ident_start(c, self.config.unicode_identifiers) {
            return Ok(self.lex_identifier());
        }

        match c {
            '0'..='9' => self.lex_number(),
            '"' => self.lex_string(),
            '\'' => self.lex_char(),
            _ => match self.lex_operator().or_else(|| self.lex_delimiter()) {
                Some(token) => Ok(token),
                None => self.lex_unknown(c),
            },
        }
    }

    /// Handles a character that starts no token.
    fn lex_unknown(&mut self, c: char) -> LexResult<Token> {
        let start = self.token_start;
        match self.config.unknown_chars {
            UnknownCharPolicy::Fatal => Err(LexError::UnexpectedCharacter {
                character: c,
                line: start.line,
                column: start.column,
            }),
            UnknownCharPolicy::PassThrough => {
                self.cursor.advance();
                let token = self.token_from_source(TokenKind::Unknown);
                warn!(
                    character = ?c,
                    line = start.line,
                    column = start.column,
                    "passing unknown character through"
                );
                self.handler
                    .build_warning(token.span, format!("unknown character {:?}", c))
                    .code(DiagnosticCode::W_LEXER_UNKNOWN_CHAR)
                    .snippet_from(self.source_file())
                    .emit(self.handler);
                Ok(token)
            },
        }
    }

    /// Emits `err` to the handler as a diagnostic.
    fn report(&self, err: &LexError) {
        self.handler.emit_diagnostic(err.to_diagnostic(self.source_file()));
    }

    fn source_file(&self) -> &SourceFile {
        self.source_file
            .get_or_init(|| SourceFile::new(SOURCE_NAME, self.cursor.source()))
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start.position,
            self.cursor.position(),
            self.token_start.line,
            self.token_start.column,
        )
    }

    /// Builds a token for the current span with the given text.
    pub(crate) fn make_token(&self, kind: TokenKind, text: impl Into<String>) -> Token {
        Token::new(kind, text, self.token_span())
    }

    /// Builds a token whose text is exactly the source it covers.
    pub(crate) fn token_from_source(&self, kind: TokenKind) -> Token {
        self.make_token(kind, self.cursor.slice_from(self.token_start.position))
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// Yields every token up to and including `Eof`, then `None`.
///
/// After an `Err` item the iterator also ends.
impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        self.finished = match &result {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };
        Some(result)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
