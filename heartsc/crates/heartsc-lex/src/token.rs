//! Token definitions for the Hearts language.
//!
//! A [`Token`] pairs a [`TokenKind`] with its text and source [`Span`].
//! Kinds fall into five categories (see [`TokenCategory`]): keywords,
//! operators, delimiters, literals, and the `Unknown`/`Eof` sentinels.

use std::fmt;

use heartsc_util::Span;

/// Broad classification of a [`TokenKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Reserved words such as `entity` or `reg`.
    Keyword,
    /// Arithmetic, bitwise, comparison, logical, and assignment operators.
    Operator,
    /// Single-character punctuation such as `(` or `;`.
    Delimiter,
    /// Identifiers and literal values.
    Literal,
    /// `Unknown` and `Eof`.
    Sentinel,
}

/// The kind of a lexical token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ===== Keywords =====
    /// `if`
    If,
    /// `else`
    Else,
    /// `elsif`
    Elsif,
    /// `for`
    For,
    /// `fn`
    Fn,
    /// `entity`
    Entity,
    /// `bits`
    Bits,
    /// `generic`
    Generic,
    /// `always`
    Always,
    /// `pipeline`
    Pipeline,
    /// `reg`
    Reg,
    /// `sint`
    Sint,
    /// `uint`
    Uint,
    /// `signal`
    Signal,

    // ===== Operators =====
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `~`
    BitNot,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `==`
    Eq,
    /// `!=`
    Neq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `^^`
    Xor,
    /// `!`
    Not,
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    ModAssign,
    /// `<<=`
    ShlAssign,
    /// `>>=`
    ShrAssign,

    // ===== Delimiters =====
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `@`
    At,
    /// `?`
    Question,
    /// `#`
    Hash,

    // ===== Literals =====
    /// A name that is neither a keyword nor a boolean.
    Identifier,
    /// `"..."`, text holds the decoded value.
    StringLiteral,
    /// Decimal integer such as `42`.
    NumberLiteral,
    /// `true` or `false`.
    BooleanLiteral,
    /// `0b1010`
    BinaryLiteral,
    /// `0x1F`
    HexLiteral,
    /// `3.14`, `1e9`, `2.5E-3`
    FloatLiteral,
    /// `'a'`, text holds the decoded character.
    CharLiteral,

    // ===== Sentinels =====
    /// A character outside the lexical grammar.
    Unknown,
    /// End of input. Always the last token.
    Eof,
}

impl TokenKind {
    /// Returns the broad category of this kind.
    pub const fn category(self) -> TokenCategory {
        use TokenKind::*;
        match self {
            If | Else | Elsif | For | Fn | Entity | Bits | Generic | Always | Pipeline | Reg
            | Sint | Uint | Signal => TokenCategory::Keyword,
            Add | Sub | Mul | Div | Mod | BitAnd | BitOr | BitXor | BitNot | Shl | Shr | Eq
            | Neq | Lt | Gt | Le | Ge | And | Or | Xor | Not | Assign | AddAssign | SubAssign
            | MulAssign | DivAssign | ModAssign | ShlAssign | ShrAssign => TokenCategory::Operator,
            LParen | RParen | LBrace | RBrace | LBracket | RBracket | Semicolon | Colon | Comma
            | Dot | At | Question | Hash => TokenCategory::Delimiter,
            Identifier | StringLiteral | NumberLiteral | BooleanLiteral | BinaryLiteral
            | HexLiteral | FloatLiteral | CharLiteral => TokenCategory::Literal,
            Unknown | Eof => TokenCategory::Sentinel,
        }
    }

    /// Returns true for reserved words.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self.category(), TokenCategory::Keyword)
    }

    /// Returns true for operators.
    #[inline]
    pub const fn is_operator(self) -> bool {
        matches!(self.category(), TokenCategory::Operator)
    }

    /// Returns true for delimiters.
    #[inline]
    pub const fn is_delimiter(self) -> bool {
        matches!(self.category(), TokenCategory::Delimiter)
    }

    /// Returns true for identifiers and literal values.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(self.category(), TokenCategory::Literal)
    }

    /// Returns true for the compound assignment operators and `=`.
    pub const fn is_assignment(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Assign | AddAssign | SubAssign | MulAssign | DivAssign | ModAssign | ShlAssign
                | ShrAssign
        )
    }

    /// Returns the fixed source spelling of keywords, operators, and delimiters.
    ///
    /// Kinds whose text varies (literals, identifiers, sentinels) return `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use heartsc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::ShlAssign.spelling(), Some("<<="));
    /// assert_eq!(TokenKind::Pipeline.spelling(), Some("pipeline"));
    /// assert_eq!(TokenKind::HexLiteral.spelling(), None);
    /// ```
    pub const fn spelling(self) -> Option<&'static str> {
        use TokenKind::*;
        Some(match self {
            If => "if",
            Else => "else",
            Elsif => "elsif",
            For => "for",
            Fn => "fn",
            Entity => "entity",
            Bits => "bits",
            Generic => "generic",
            Always => "always",
            Pipeline => "pipeline",
            Reg => "reg",
            Sint => "sint",
            Uint => "uint",
            Signal => "signal",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            BitNot => "~",
            Shl => "<<",
            Shr => ">>",
            Eq => "==",
            Neq => "!=",
            Lt => "<",
            Gt => ">",
            Le => "<=",
            Ge => ">=",
            And => "&&",
            Or => "||",
            Xor => "^^",
            Not => "!",
            Assign => "=",
            AddAssign => "+=",
            SubAssign => "-=",
            MulAssign => "*=",
            DivAssign => "/=",
            ModAssign => "%=",
            ShlAssign => "<<=",
            ShrAssign => ">>=",
            LParen => "(",
            RParen => ")",
            LBrace => "{",
            RBrace => "}",
            LBracket => "[",
            RBracket => "]",
            Semicolon => ";",
            Colon => ":",
            Comma => ",",
            Dot => ".",
            At => "@",
            Question => "?",
            Hash => "#",
            Identifier | StringLiteral | NumberLiteral | BooleanLiteral | BinaryLiteral
            | HexLiteral | FloatLiteral | CharLiteral | Unknown | Eof => return None,
        })
    }

    /// Returns the stable upper-case name used in token dumps, e.g. `OP_LSHIFT_ASSIGN`.
    pub const fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            If => "IF",
            Else => "ELSE",
            Elsif => "ELSIF",
            For => "FOR",
            Fn => "FN",
            Entity => "ENTITY",
            Bits => "BITS",
            Generic => "GENERIC",
            Always => "ALWAYS",
            Pipeline => "PIPELINE",
            Reg => "REG",
            Sint => "SINT",
            Uint => "UINT",
            Signal => "SIGNAL",
            Add => "OP_ADD",
            Sub => "OP_SUB",
            Mul => "OP_MUL",
            Div => "OP_DIV",
            Mod => "OP_MOD",
            BitAnd => "OP_BITAND",
            BitOr => "OP_BITOR",
            BitXor => "OP_BITXOR",
            BitNot => "OP_BITNOT",
            Shl => "OP_LSHIFT",
            Shr => "OP_RSHIFT",
            Eq => "OP_EQ",
            Neq => "OP_NEQ",
            Lt => "OP_LT",
            Gt => "OP_GT",
            Le => "OP_LTE",
            Ge => "OP_GTE",
            And => "OP_AND",
            Or => "OP_OR",
            Xor => "OP_XOR",
            Not => "OP_NOT",
            Assign => "OP_ASSIGN",
            AddAssign => "OP_ADD_ASSIGN",
            SubAssign => "OP_SUB_ASSIGN",
            MulAssign => "OP_MUL_ASSIGN",
            DivAssign => "OP_DIV_ASSIGN",
            ModAssign => "OP_MOD_ASSIGN",
            ShlAssign => "OP_LSHIFT_ASSIGN",
            ShrAssign => "OP_RSHIFT_ASSIGN",
            LParen => "LEFTPAREN",
            RParen => "RIGHTPAREN",
            LBrace => "LEFTBRACE",
            RBrace => "RIGHTBRACE",
            LBracket => "LEFTBRACKET",
            RBracket => "RIGHTBRACKET",
            Semicolon => "SEMICOLON",
            Colon => "COLON",
            Comma => "COMMA",
            Dot => "DOT",
            At => "AT",
            Question => "QUESTION",
            Hash => "HASH",
            Identifier => "IDENTIFIER",
            StringLiteral => "STRING_LITERAL",
            NumberLiteral => "NUMBER_LITERAL",
            BooleanLiteral => "BOOLEAN_LITERAL",
            BinaryLiteral => "BINARY_LITERAL",
            HexLiteral => "HEX_LITERAL",
            FloatLiteral => "FLOAT_LITERAL",
            CharLiteral => "CHAR_LITERAL",
            Unknown => "UNKNOWN",
            Eof => "EOF",
        }
    }

    /// Maps a delimiter character to its kind.
    pub const fn from_delimiter(c: char) -> Option<TokenKind> {
        use TokenKind::*;
        Some(match c {
            '(' => LParen,
            ')' => RParen,
            '{' => LBrace,
            '}' => RBrace,
            '[' => LBracket,
            ']' => RBracket,
            ';' => Semicolon,
            ':' => Colon,
            ',' => Comma,
            '.' => Dot,
            '@' => At,
            '?' => Question,
            '#' => Hash,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(spelling) = self.spelling() {
            return write!(f, "'{}'", spelling);
        }
        let description = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string literal",
            TokenKind::NumberLiteral => "number literal",
            TokenKind::BooleanLiteral => "boolean literal",
            TokenKind::BinaryLiteral => "binary literal",
            TokenKind::HexLiteral => "hex literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::CharLiteral => "character literal",
            TokenKind::Unknown => "unknown character",
            _ => "end of file",
        };
        f.write_str(description)
    }
}

/// Looks up a reserved word.
///
/// Matching is exact and case-sensitive: `Entity` is an identifier.
///
/// # Example
///
/// ```
/// use heartsc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("always"), Some(TokenKind::Always));
/// assert_eq!(keyword_from_ident("Always"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "elsif" => TokenKind::Elsif,
        "for" => TokenKind::For,
        "fn" => TokenKind::Fn,
        "entity" => TokenKind::Entity,
        "bits" => TokenKind::Bits,
        "generic" => TokenKind::Generic,
        "always" => TokenKind::Always,
        "pipeline" => TokenKind::Pipeline,
        "reg" => TokenKind::Reg,
        "sint" => TokenKind::Sint,
        "uint" => TokenKind::Uint,
        "signal" => TokenKind::Signal,
        _ => return None,
    };
    Some(kind)
}

/// Returns the value of a boolean literal spelling.
pub fn boolean_from_ident(ident: &str) -> Option<bool> {
    match ident {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// A classified piece of source text.
///
/// `text` is the source slice, except for string and character literals
/// where it holds the decoded value. `Eof` has empty text. Tokens own their
/// text, so they outlive the lexer that produced them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What was recognized.
    pub kind: TokenKind,
    /// Source or decoded text.
    pub text: String,
    /// Byte range plus the line/column of the first character.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Line of the first character (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the first character (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns true for the end-of-file token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns the exact source slice this token was read from.
    ///
    /// Differs from `text` only for string and character literals, where the
    /// lexeme keeps the quotes and escape sequences.
    ///
    /// # Example
    ///
    /// ```
    /// let source = r#"reg s = "a\tb";"#;
    /// let tokens = heartsc_lex::tokenize(source).unwrap();
    /// assert_eq!(tokens[3].text, "a\tb");
    /// assert_eq!(tokens[3].lexeme(source), r#""a\tb""#);
    /// ```
    pub fn lexeme<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.start..self.span.end).unwrap_or("")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} at {}:{}",
            self.kind.name(),
            self.text,
            self.span.line,
            self.span.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYWORDS: [&str; 14] = [
        "if", "else", "elsif", "for", "fn", "entity", "bits", "generic", "always", "pipeline",
        "reg", "sint", "uint", "signal",
    ];

    #[test]
    fn test_every_keyword_round_trips_through_spelling() {
        for word in ALL_KEYWORDS {
            let kind = keyword_from_ident(word).unwrap();
            assert!(kind.is_keyword(), "{word}");
            assert_eq!(kind.spelling(), Some(word));
        }
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(keyword_from_ident("IF"), None);
        assert_eq!(keyword_from_ident("Reg"), None);
        assert_eq!(keyword_from_ident("entity_"), None);
    }

    #[test]
    fn test_booleans_are_not_keywords() {
        assert_eq!(keyword_from_ident("true"), None);
        assert_eq!(boolean_from_ident("true"), Some(true));
        assert_eq!(boolean_from_ident("false"), Some(false));
        assert_eq!(boolean_from_ident("True"), None);
    }

    #[test]
    fn test_delimiters() {
        for c in "(){}[];:,.@?#".chars() {
            let kind = TokenKind::from_delimiter(c).unwrap();
            assert!(kind.is_delimiter());
            assert_eq!(kind.spelling(), Some(c.to_string().as_str()));
        }
        assert_eq!(TokenKind::from_delimiter('$'), None);
    }

    #[test]
    fn test_categories() {
        assert_eq!(TokenKind::ShrAssign.category(), TokenCategory::Operator);
        assert_eq!(TokenKind::Xor.category(), TokenCategory::Operator);
        assert_eq!(TokenKind::CharLiteral.category(), TokenCategory::Literal);
        assert_eq!(TokenKind::Identifier.category(), TokenCategory::Literal);
        assert_eq!(TokenKind::Unknown.category(), TokenCategory::Sentinel);
        assert_eq!(TokenKind::Eof.category(), TokenCategory::Sentinel);
    }

    #[test]
    fn test_assignment_kinds() {
        assert!(TokenKind::Assign.is_assignment());
        assert!(TokenKind::ShlAssign.is_assignment());
        assert!(!TokenKind::Eq.is_assignment());
        assert!(!TokenKind::Le.is_assignment());
    }

    #[test]
    fn test_names() {
        assert_eq!(TokenKind::ShlAssign.name(), "OP_LSHIFT_ASSIGN");
        assert_eq!(TokenKind::LParen.name(), "LEFTPAREN");
        assert_eq!(TokenKind::Eof.name(), "EOF");
        assert_eq!(TokenKind::BitAnd.name(), "OP_BITAND");
        assert_eq!(TokenKind::BitOr.name(), "OP_BITOR");
        assert_eq!(TokenKind::BitXor.name(), "OP_BITXOR");
        assert_eq!(TokenKind::BitNot.name(), "OP_BITNOT");
        assert_eq!(TokenKind::Le.name(), "OP_LTE");
        assert_eq!(TokenKind::Ge.name(), "OP_GTE");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Ge.to_string(), "'>='");
        assert_eq!(TokenKind::Signal.to_string(), "'signal'");
        assert_eq!(TokenKind::HexLiteral.to_string(), "hex literal");
        assert_eq!(TokenKind::Eof.to_string(), "end of file");
    }

    #[test]
    fn test_token_accessors() {
        let token = Token::new(TokenKind::Identifier, "clk", Span::new(9, 12, 2, 3));
        assert_eq!(token.line(), 2);
        assert_eq!(token.column(), 3);
        assert!(!token.is_eof());
        assert_eq!(token.lexeme("entity\n  clk"), "clk");
        assert_eq!(token.to_string(), "IDENTIFIER \"clk\" at 2:3");
    }

    #[test]
    fn test_lexeme_out_of_range_is_empty() {
        let token = Token::new(TokenKind::Identifier, "x", Span::new(5, 6, 1, 6));
        assert_eq!(token.lexeme("ab"), "");
    }
}
