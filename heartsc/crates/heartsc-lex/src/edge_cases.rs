//! Edge case tests for heartsc-lex

use crate::{tokenize, LexError, Lexer, Token, TokenKind};
use heartsc_util::Handler;

fn lex_all(source: &str) -> Vec<Token> {
    let mut tokens = tokenize(source).unwrap();
    assert!(tokens.pop().unwrap().is_eof());
    tokens
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex_all(source).into_iter().map(|t| t.kind).collect()
}

fn texts(source: &str) -> Vec<String> {
    lex_all(source).into_iter().map(|t| t.text).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(lex_all("").is_empty());
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let t = lex_all(&format!("signal {} ;", name));
    assert_eq!(t[1].text, name);
    assert_eq!(t[2].column(), 10009);
}

#[test]
fn test_edge_keyword_touching_delimiter() {
    assert_eq!(
        kinds("fn(entity{"),
        [TokenKind::Fn, TokenKind::LParen, TokenKind::Entity, TokenKind::LBrace]
    );
}

#[test]
fn test_edge_else_if_vs_elsif() {
    assert_eq!(kinds("elsif"), [TokenKind::Elsif]);
    assert_eq!(kinds("else if"), [TokenKind::Else, TokenKind::If]);
    assert_eq!(kinds("elseif"), [TokenKind::Identifier]);
}

#[test]
fn test_edge_number_then_identifier() {
    assert_eq!(texts("8bit"), ["8", "bit"]);
    assert_eq!(kinds("8bit"), [TokenKind::NumberLiteral, TokenKind::Identifier]);
}

#[test]
fn test_edge_binary_digit_out_of_range() {
    assert_eq!(texts("0b102"), ["0b10", "2"]);
}

#[test]
fn test_edge_leading_zero_then_x() {
    assert_eq!(texts("00x1"), ["00", "x1"]);
}

#[test]
fn test_edge_float_forms() {
    assert_eq!(kinds("1e+5"), [TokenKind::FloatLiteral]);
    assert_eq!(texts("1e5e5"), ["1e5", "e5"]);
    assert_eq!(kinds("3."), [TokenKind::NumberLiteral, TokenKind::Dot]);
    assert_eq!(kinds(".5"), [TokenKind::Dot, TokenKind::NumberLiteral]);
    assert_eq!(texts("2e"), ["2", "e"]);
}

#[test]
fn test_edge_negative_number_is_two_tokens() {
    assert_eq!(kinds("-1"), [TokenKind::Sub, TokenKind::NumberLiteral]);
}

#[test]
fn test_edge_shift_assign() {
    assert_eq!(kinds("<<="), [TokenKind::ShlAssign]);
    assert_eq!(kinds("<< ="), [TokenKind::Shl, TokenKind::Assign]);
}

#[test]
fn test_edge_comment_splits_operator() {
    assert_eq!(kinds("<</**/="), [TokenKind::Shl, TokenKind::Assign]);
}

#[test]
fn test_edge_empty_block_comment_between_idents() {
    let t = lex_all("a/**/b");
    assert_eq!(t.len(), 2);
    assert_eq!(t[1].column(), 6);
}

#[test]
fn test_edge_comment_markers_inside_string() {
    let t = lex_all(r#""a//b /* c */""#);
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].text, "a//b /* c */");
}

#[test]
fn test_edge_slash_char_literal() {
    let t = lex_all("'/'");
    assert_eq!(t[0].kind, TokenKind::CharLiteral);
    assert_eq!(t[0].text, "/");
}

#[test]
fn test_edge_booleans() {
    assert_eq!(
        kinds("true false"),
        [TokenKind::BooleanLiteral, TokenKind::BooleanLiteral]
    );
}

#[test]
fn test_edge_lines() {
    let t = lex_all("fn\nentity");
    assert_eq!((t[1].line(), t[1].column()), (2, 1));
}

#[test]
fn test_edge_crlf() {
    let t = lex_all("a\r\nb\r\n");
    assert_eq!((t[1].line(), t[1].column()), (2, 1));
}

#[test]
fn test_edge_tab_is_one_column() {
    let t = lex_all("\tq");
    assert_eq!(t[0].column(), 2);
}

#[test]
fn test_edge_non_ascii_string_columns() {
    let t = lex_all("\"héllo\" x");
    assert_eq!(t[1].column(), 9);
    assert_eq!(t[1].span.start, 9);
}

#[test]
fn test_edge_eof_after_blank_lines() {
    let tokens = tokenize("a\n\n").unwrap();
    let eof = tokens.last().unwrap();
    assert_eq!((eof.line(), eof.column()), (3, 1));
}

#[test]
fn test_edge_lexeme_reconstructs_source() {
    let source = "reg q = 'a' + \"x\\ty\";";
    for token in tokenize(source).unwrap() {
        let lexeme = token.lexeme(source);
        match token.kind {
            TokenKind::StringLiteral => assert_eq!(lexeme, "\"x\\ty\""),
            TokenKind::CharLiteral => assert_eq!(lexeme, "'a'"),
            _ => assert_eq!(lexeme, token.text),
        }
    }
}

// ==================== ERRORS ====================

#[test]
fn test_err_prefix_without_digits() {
    assert_eq!(
        tokenize("0b").unwrap_err(),
        LexError::MalformedNumericPrefix {
            prefix: "0b".to_string(),
            line: 1,
            column: 1
        }
    );
    assert!(matches!(
        tokenize("x\n 0X;").unwrap_err(),
        LexError::MalformedNumericPrefix { line: 2, column: 2, .. }
    ));
}

#[test]
fn test_err_char_literal_too_long() {
    assert!(matches!(
        tokenize("'ab'").unwrap_err(),
        LexError::InvalidCharLiteral { .. }
    ));
}

#[test]
fn test_err_empty_char_literal() {
    assert!(matches!(
        tokenize("''").unwrap_err(),
        LexError::InvalidCharLiteral { .. }
    ));
}

#[test]
fn test_err_unterminated_string_at_newline() {
    assert_eq!(
        tokenize("s = \"abc\n\"").unwrap_err(),
        LexError::UnterminatedString { line: 1, column: 5 }
    );
}

#[test]
fn test_err_invalid_escape() {
    assert!(matches!(
        tokenize(r#""\x41""#).unwrap_err(),
        LexError::InvalidEscape { escape: 'x', .. }
    ));
}

#[test]
fn test_err_unterminated_block_comment() {
    assert_eq!(
        tokenize("a /* b").unwrap_err(),
        LexError::UnterminatedBlockComment { line: 1, column: 3 }
    );
}

#[test]
fn test_err_error_emitted_once() {
    let handler = Handler::new();
    let _ = Lexer::new("q = 'ab';", &handler).tokenize();
    assert_eq!(handler.error_count(), 1);
}

#[test]
fn test_err_tokens_before_error_are_available() {
    let handler = Handler::new();
    let mut lexer = Lexer::new("reg q = \"open", &handler);
    let mut seen = Vec::new();
    for item in &mut lexer {
        match item {
            Ok(token) => seen.push(token.kind),
            Err(err) => {
                assert!(matches!(err, LexError::UnterminatedString { .. }));
                break;
            },
        }
    }
    assert_eq!(
        seen,
        [TokenKind::Reg, TokenKind::Identifier, TokenKind::Assign]
    );
}
