//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - The type keyword and identifiers
//! - Integer literals
//! - Operators and parentheses
//! - Comments and whitespace
//! - Line/column tracking
//! - Error cases

use crate::errors::errors::SyntaxErrorKind;
use crate::Position;

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_keyword_and_identifiers() {
    let source = "int test int_ _int";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::IntType);
    assert_eq!(tokens[0].lexeme, "int");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "test");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].lexeme, "int_");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].lexeme, "_int");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let source = "42 0 007";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].lexeme, "42");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].lexeme, "0");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[2].lexeme, "007");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let source = "= ( ) + - * /";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Assignment);
    assert_eq!(tokens[1].kind, TokenKind::OpenParen);
    assert_eq!(tokens[2].kind, TokenKind::CloseParen);
    assert_eq!(tokens[3].kind, TokenKind::Plus);
    assert_eq!(tokens[4].kind, TokenKind::Dash);
    assert_eq!(tokens[5].kind, TokenKind::Star);
    assert_eq!(tokens[6].kind, TokenKind::Slash);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_without_spaces() {
    let source = "(-34+76)*34";
    let kinds = tokenize(source)
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect::<Vec<TokenKind>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenParen,
            TokenKind::Dash,
            TokenKind::Integer,
            TokenKind::Plus,
            TokenKind::Integer,
            TokenKind::CloseParen,
            TokenKind::Star,
            TokenKind::Integer,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "int a # trailing comment\n# full line\nint b";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0].kind, TokenKind::IntType);
    assert_eq!(tokens[1].lexeme, "a");
    assert_eq!(tokens[2].kind, TokenKind::IntType);
    assert_eq!(tokens[3].lexeme, "b");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_positions() {
    let source = "int test\n  = 42";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].position, Position::new(1, 1)); // int
    assert_eq!(tokens[1].position, Position::new(1, 5)); // test
    assert_eq!(tokens[2].position, Position::new(2, 3)); // =
    assert_eq!(tokens[3].position, Position::new(2, 5)); // 42
    assert_eq!(tokens[4].position, Position::new(2, 7)); // EOF
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].position, Position::start());
}

#[test]
fn test_tokenize_token_length() {
    let tokens = tokenize("test = 1234").unwrap();

    assert_eq!(tokens[0].len(), 4);
    assert_eq!(tokens[1].len(), 1);
    assert_eq!(tokens[2].len(), 4);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("test = 1234").unwrap();

    assert_eq!(tokens[0].to_string(), "Identifier (test)");
    assert_eq!(tokens[1].to_string(), "Assignment ()");
    assert_eq!(tokens[2].to_string(), "Integer (1234)");
}

#[test]
fn test_tokenize_unrecognised_character() {
    let source = "int a = @";
    let error = tokenize(source).unwrap_err();

    assert_eq!(
        *error.kind(),
        SyntaxErrorKind::UnrecognisedCharacter { ch: '@' }
    );
    assert_eq!(error.get_position(), Position::new(1, 9));
}
