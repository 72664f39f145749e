//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - Character and boolean literals
//! - Operators and punctuation
//! - Comments
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_keywords() {
    let source = "decl start int bool float char if else while print scan true false".to_string();
    let tokens = tokenize(source, Some("test.cl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Decl);
    assert_eq!(tokens[1].kind, TokenKind::Start);
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[3].kind, TokenKind::Bool);
    assert_eq!(tokens[4].kind, TokenKind::Float);
    assert_eq!(tokens[5].kind, TokenKind::Char);
    assert_eq!(tokens[6].kind, TokenKind::If);
    assert_eq!(tokens[7].kind, TokenKind::Else);
    assert_eq!(tokens[8].kind, TokenKind::While);
    assert_eq!(tokens[9].kind, TokenKind::Print);
    assert_eq!(tokens[10].kind, TokenKind::Scan);
    assert_eq!(tokens[11].kind, TokenKind::True);
    assert_eq!(tokens[12].kind, TokenKind::False);
    assert_eq!(tokens[13].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase".to_string();
    let tokens = tokenize(source, Some("test.cl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5".to_string();
    let tokens = tokenize(source, Some("test.cl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_char_literals() {
    let source = "'a' 'Z' '0'".to_string();
    let tokens = tokenize(source, Some("test.cl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::CharLiteral);
    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].kind, TokenKind::CharLiteral);
    assert_eq!(tokens[1].value, "Z");
    assert_eq!(tokens[2].kind, TokenKind::CharLiteral);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / == != < > <= >= = && || !".to_string();
    let tokens = tokenize(source, Some("test.cl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::Equals);
    assert_eq!(tokens[5].kind, TokenKind::NotEquals);
    assert_eq!(tokens[6].kind, TokenKind::Less);
    assert_eq!(tokens[7].kind, TokenKind::Greater);
    assert_eq!(tokens[8].kind, TokenKind::LessEquals);
    assert_eq!(tokens[9].kind, TokenKind::GreaterEquals);
    assert_eq!(tokens[10].kind, TokenKind::Assignment);
    assert_eq!(tokens[11].kind, TokenKind::And);
    assert_eq!(tokens[12].kind, TokenKind::Or);
    assert_eq!(tokens[13].kind, TokenKind::Not);
    assert_eq!(tokens[14].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let source = "{ } [ ] ( ) ; : ,".to_string();
    let tokens = tokenize(source, Some("test.cl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[1].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[2].kind, TokenKind::OpenBracket);
    assert_eq!(tokens[3].kind, TokenKind::CloseBracket);
    assert_eq!(tokens[4].kind, TokenKind::OpenParen);
    assert_eq!(tokens[5].kind, TokenKind::CloseParen);
    assert_eq!(tokens[6].kind, TokenKind::Semicolon);
    assert_eq!(tokens[7].kind, TokenKind::Colon);
    assert_eq!(tokens[8].kind, TokenKind::Comma);
    assert_eq!(tokens[9].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_comments() {
    let source = "x // this is a comment\ny".to_string();
    let tokens = tokenize(source, Some("test.cl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "y");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_declaration() {
    let source = "int : x, a[10];".to_string();
    let tokens = tokenize(source, Some("test.cl".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[1].kind, TokenKind::Colon);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::Comma);
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].kind, TokenKind::OpenBracket);
    assert_eq!(tokens[6].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[7].kind, TokenKind::CloseBracket);
    assert_eq!(tokens[8].kind, TokenKind::Semicolon);
    assert_eq!(tokens[9].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_source() {
    let source = "".to_string();
    let tokens = tokenize(source, Some("test.cl".to_string())).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_illegal_character() {
    let source = "x = #;".to_string();
    let result = tokenize(source, Some("test.cl".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_tokenize_positions() {
    let source = "x = 3;".to_string();
    let tokens = tokenize(source, Some("test.cl".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[1].span.start.0, 2);
    assert_eq!(tokens[2].span.start.0, 4);
    assert_eq!(tokens[3].span.start.0, 5);
}
