//! The main Parser struct and the program-level grammar rule.
//!
//! The parser owns the token vector and a cursor into it. Grammar rules
//! live in `stmt` and `expr` as free functions taking `&mut Parser`;
//! this file provides token consumption plus the `Program` entry point.

use std::rc::Rc;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::{parse_block_stmt, parse_declarations};

/// Maintains the token stream and the current parse position.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: i32,
}

impl Parser {
    /// Creates a new Parser instance over a token vector.
    ///
    /// The vector must end with an EOF token, as produced by
    /// `lexer::tokenize`.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos as usize).unwrap()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.get(self.pos as usize).unwrap().kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        self.tokens.get((self.pos - 1) as usize).unwrap()
    }

    /// Expects a token of the specified kind.
    ///
    /// Returns Ok(Token) and advances if the current token matches,
    /// otherwise returns a syntax error naming the expected kind and the
    /// token actually seen.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_named(expected_kind, &expected_kind.to_string())
    }

    /// Like `expect`, but with a caller-supplied description of what was
    /// expected (used where several kinds would do).
    pub fn expect_named(&mut self, expected_kind: TokenKind, expected: &str) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from(expected),
                    found: format!("{} ({})", token.kind, token.value),
                },
                token.span.start.clone(),
            ))
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Builds a syntax error at the current token.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from(expected),
                found: format!("{} ({})", token.kind, token.value),
            },
            token.span.start.clone(),
        )
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos + 1 < self.tokens.len() as i32 && self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Parses a stream of tokens into a Program.
///
/// This is the main entry point for parsing. The grammar is
/// `program -> 'decl' '{' { declaration } '}' 'start' block`, and the
/// whole token stream must be consumed.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Reference-counted string containing the source file name
///
/// # Returns
///
/// The parsed Program, or the first syntax error encountered.
pub fn parse(tokens: Vec<Token>, _file: Rc<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens);

    parser.expect(TokenKind::Decl)?;
    parser.expect(TokenKind::OpenCurly)?;
    let decpart = parse_declarations(&mut parser)?;
    parser.expect(TokenKind::CloseCurly)?;

    parser.expect(TokenKind::Start)?;
    let body = parse_block_stmt(&mut parser)?;

    if parser.has_tokens() {
        return Err(parser.unexpected("EOF"));
    }

    Ok(Program { decpart, body })
}
