//! Whitespace and comment skipping.
//!
//! `//` runs to the end of the line. `/* */` may span lines; it nests only
//! when `nested_block_comments` is enabled.

use crate::error::{LexError, LexResult};
use crate::unicode::is_whitespace;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments up to the next significant character.
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> LexResult<()> {
        loop {
            match (self.cursor.peek(), self.cursor.peek_nth(1)) {
                (Some(c), _) if is_whitespace(c) => {
                    self.cursor.advance();
                },
                (Some('/'), Some('/')) => self.skip_line_comment(),
                (Some('/'), Some('*')) => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Skips from `//` up to, not including, the newline.
    fn skip_line_comment(&mut self) {
        self.cursor.advance_while(|c| c != '\n');
    }

    /// Skips a block comment, reporting an unclosed one at its opening `/*`.
    fn skip_block_comment(&mut self) -> LexResult<()> {
        let opener = self.cursor.snapshot();
        let nested = self.config.nested_block_comments;
        let limit = self.config.max_comment_depth;

        self.cursor.advance();
        self.cursor.advance();
        let mut depth: u32 = 1;

        loop {
            match (self.cursor.peek(), self.cursor.peek_nth(1)) {
                (None, _) => {
                    return Err(LexError::UnterminatedBlockComment {
                        line: opener.line,
                        column: opener.column,
                    })
                },
                (Some('*'), Some('/')) => {
                    self.cursor.advance();
                    self.cursor.advance();
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                },
                (Some('/'), Some('*')) if nested => {
                    if depth >= limit {
                        return Err(LexError::CommentTooDeep {
                            limit,
                            line: self.cursor.line(),
                            column: self.cursor.column(),
                        });
                    }
                    self.cursor.advance();
                    self.cursor.advance();
                    depth += 1;
                },
                _ => {
                    self.cursor.advance();
                },
            }
        }
    }
}
