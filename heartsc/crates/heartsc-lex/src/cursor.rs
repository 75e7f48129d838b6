//! Character cursor for traversing source code.
//!
//! [`Cursor`] owns the scan position: a byte offset plus the 1-based line and
//! column of the next character. [`Cursor::advance`] is the only method that
//! moves it, so every sub-scanner gets the same line/column accounting.

/// A cursor for traversing source code character by character.
///
/// Position only moves forward. Lookahead is done with [`Cursor::peek`] and
/// [`Cursor::peek_nth`], which never consume.
///
/// # Example
///
/// ```
/// use heartsc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("fn\nreg");
/// assert_eq!(cursor.advance(), Some('f'));
/// assert_eq!(cursor.advance(), Some('n'));
/// assert_eq!(cursor.advance(), Some('\n'));
/// assert_eq!((cursor.line(), cursor.column()), (2, 1));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Skips a leading UTF-8 byte-order mark without moving the column.
    ///
    /// Returns true if a mark was skipped. Only has an effect at offset 0.
    ///
    /// # Example
    ///
    /// ```
    /// use heartsc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("\u{FEFF}reg");
    /// assert!(cursor.skip_bom());
    /// assert_eq!(cursor.peek(), Some('r'));
    /// assert_eq!(cursor.column(), 1);
    /// ```
    pub fn skip_bom(&mut self) -> bool {
        const BOM: char = '\u{FEFF}';
        if self.position == 0 && self.source.starts_with(BOM) {
            self.position = BOM.len_utf8();
            true
        } else {
            false
        }
    }

    /// Returns the next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns the character `n` positions ahead without consuming anything.
    ///
    /// `peek_nth(0)` is the same as [`Cursor::peek`].
    ///
    /// # Example
    ///
    /// ```
    /// use heartsc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("1e+5");
    /// assert_eq!(cursor.peek_nth(2), Some('+'));
    /// assert_eq!(cursor.peek_nth(4), None);
    /// ```
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes and returns the next character.
    ///
    /// A `'\n'` moves to column 1 of the next line. Every other character,
    /// `'\r'` included, moves one column right. Returns `None` at end of input.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes characters while `predicate` holds. Returns how many were consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use heartsc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("0110x");
    /// assert_eq!(cursor.advance_while(|c| c == '0' || c == '1'), 4);
    /// assert_eq!(cursor.peek(), Some('x'));
    /// ```
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
            count += 1;
        }
        count
    }

    /// Consumes the expected character if it is next.
    ///
    /// # Example
    ///
    /// ```
    /// use heartsc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.peek(), Some('>'));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `expected` if the remaining input starts with it.
    pub fn match_str(&mut self, expected: &str) -> bool {
        if !self.remaining().starts_with(expected) {
            return false;
        }
        for _ in expected.chars() {
            self.advance();
        }
        true
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from byte `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use heartsc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("reg q");
    /// let start = cursor.position();
    /// cursor.advance_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "reg");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or("")
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        // position only ever lands on char boundaries
        self.source.get(self.position..).unwrap_or("")
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Captures the current position, line, and column.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }
}

/// A saved cursor position, used to remember where a token started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}
