//! Character classification for the Hearts lexer.
//!
//! Identifiers are ASCII by default (`[A-Za-z_][A-Za-z0-9_]*`). When
//! `unicode_identifiers` is enabled in the lexer configuration, any
//! alphabetic character may start an identifier and any alphanumeric
//! character may continue one.

/// Checks if a character may start an identifier.
///
/// # Example
///
/// ```
/// use heartsc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('_', false));
/// assert!(!is_ident_start('α', false));
/// assert!(is_ident_start('α', true));
/// assert!(!is_ident_start('1', true));
/// ```
#[inline]
pub fn is_ident_start(c: char, allow_unicode: bool) -> bool {
    is_ascii_ident_start(c) || (allow_unicode && c.is_alphabetic())
}

/// Checks if a character may continue an identifier.
#[inline]
pub fn is_ident_continue(c: char, allow_unicode: bool) -> bool {
    is_ascii_ident_continue(c) || (allow_unicode && c.is_alphanumeric())
}

/// Checks if a character is a valid ASCII identifier start.
#[inline]
pub fn is_ascii_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character is a valid ASCII identifier continuation.
#[inline]
pub fn is_ascii_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a valid digit in the given numeric base.
///
/// Only bases 2, 10 and 16 occur in Hearts literals.
///
/// # Example
///
/// ```
/// use heartsc_lex::unicode::is_digit_in_base;
///
/// assert!(is_digit_in_base('1', 2));
/// assert!(!is_digit_in_base('2', 2));
/// assert!(is_digit_in_base('f', 16));
/// assert!(!is_digit_in_base('g', 16));
/// ```
#[inline]
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    c.is_digit(base)
}

/// Checks if a character can begin an operator.
#[inline]
pub fn is_operator_start(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '~' | '<' | '>' | '=' | '!'
    )
}

/// Checks if a character is insignificant whitespace.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_ident() {
        assert!(is_ident_start('a', false));
        assert!(is_ident_start('Z', false));
        assert!(is_ident_continue('9', false));
        assert!(!is_ident_start('9', false));
        assert!(!is_ident_continue('-', true));
    }

    #[test]
    fn test_unicode_ident_opt_in() {
        assert!(!is_ident_continue('é', false));
        assert!(is_ident_continue('é', true));
        assert!(is_ident_continue('٣', true));
        assert!(!is_ident_start('٣', true));
    }

    #[test]
    fn test_digit_in_base() {
        for c in ['0', '1'] {
            assert!(is_digit_in_base(c, 2));
        }
        assert!(!is_digit_in_base('_', 2));
        assert!(is_digit_in_base('A', 16));
        assert!(is_digit_in_base('9', 10));
        assert!(!is_digit_in_base('a', 10));
    }

    #[test]
    fn test_operator_start() {
        for c in "+-*/%&|^~<>=!".chars() {
            assert!(is_operator_start(c), "{c}");
        }
        for c in "(){}[];:,.@?#$`\\".chars() {
            assert!(!is_operator_start(c), "{c}");
        }
    }

    #[test]
    fn test_whitespace() {
        for c in [' ', '\t', '\n', '\r', '\u{0B}', '\u{0C}'] {
            assert!(is_whitespace(c));
        }
        assert!(!is_whitespace('_'));
    }
}
