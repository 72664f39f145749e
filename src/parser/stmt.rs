use crate::{
    ast::{
        ast::{Declaration, Declarations},
        expressions::Variable,
        statements::Statement,
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
};

use super::parser::Parser;

/// Parses one statement, dispatching on the leading token.
pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    match parser.current_token_kind() {
        TokenKind::Semicolon => {
            parser.advance();
            Ok(Statement::Skip)
        }
        TokenKind::OpenCurly => parse_block_stmt(parser),
        TokenKind::Identifier => parse_assignment_stmt(parser),
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::While => parse_while_stmt(parser),
        TokenKind::Print => parse_print_stmt(parser),
        TokenKind::Scan => parse_scan_stmt(parser),
        _ => Err(parser.unexpected("Semicolon | OpenCurly | Identifier | If | While | Print | Scan")),
    }
}

/// `block -> '{' { statement } '}'`
pub fn parse_block_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut members = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::EOF {
            return Err(parser.unexpected("CloseCurly"));
        }
        members.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Statement::Block(members))
}

/// `assignment -> identifier [ '[' expression ']' ] '=' expression ';'`
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let target = parse_variable_target(parser)?;

    parser.expect(TokenKind::Assignment)?;
    let source = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Statement::Assignment { target, source })
}

/// `if -> 'if' '(' expression ')' statement [ 'else' statement ]`
///
/// A missing else branch becomes `Skip`.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.advance();

    parser.expect(TokenKind::OpenParen)?;
    let test = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_branch = parse_stmt(parser)?;

    let else_branch = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parse_stmt(parser)?
    } else {
        Statement::Skip
    };

    Ok(Statement::conditional(test, then_branch, else_branch))
}

/// `while -> 'while' '(' expression ')' statement`
pub fn parse_while_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.advance();

    parser.expect(TokenKind::OpenParen)?;
    let test = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;

    Ok(Statement::loop_of(test, body))
}

/// `print -> 'print' '(' expression ')' ';'`
pub fn parse_print_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.advance();

    parser.expect(TokenKind::OpenParen)?;
    let expression = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Statement::Print(expression))
}

/// `scan -> 'scan' '(' identifier [ '[' expression ']' ] ')' ';'`
pub fn parse_scan_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    parser.advance();

    parser.expect(TokenKind::OpenParen)?;
    let target = parse_variable_target(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Statement::Scan(target))
}

/// An identifier with an optional bracketed index expression. The index
/// stays a structured sub-expression on the Variable.
pub fn parse_variable_target(parser: &mut Parser) -> Result<Variable, Error> {
    let identifier = parser.expect(TokenKind::Identifier)?.value;

    if parser.current_token_kind() == TokenKind::OpenBracket {
        parser.advance();
        let index = parse_expr(parser)?;
        parser.expect(TokenKind::CloseBracket)?;
        Ok(Variable::indexed(identifier, index))
    } else {
        Ok(Variable::new(identifier))
    }
}

/// `declarations -> { declaration }`, running while the next token is a
/// type keyword.
pub fn parse_declarations(parser: &mut Parser) -> Result<Declarations, Error> {
    let mut declarations = Declarations::new();

    while parser.current_token_kind().is_type() {
        parse_declaration(parser, &mut declarations)?;
    }

    Ok(declarations)
}

/// `declaration -> type [':'] declarator { ',' declarator } ';'` where
/// `declarator -> identifier [ '[' intLiteral ']' ]`.
///
/// The colon is optional so the canonical rendering (`int x;`) parses
/// back.
pub fn parse_declaration(
    parser: &mut Parser,
    declarations: &mut Declarations,
) -> Result<(), Error> {
    let current_type = parse_type(parser)?;

    if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
    }

    loop {
        let identifier = parser.expect(TokenKind::Identifier)?.value;

        let ty = if parser.current_token_kind() == TokenKind::OpenBracket {
            parser.advance();
            let size_token = parser.expect(TokenKind::IntLiteral)?;
            let size = size_token.value.parse::<usize>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: size_token.value.clone(),
                    },
                    size_token.span.start.clone(),
                )
            })?;
            parser.expect(TokenKind::CloseBracket)?;
            Type::array_of(current_type.clone(), size)
        } else {
            current_type.clone()
        };

        declarations.add(Declaration {
            variable: Variable::new(identifier),
            ty,
        });

        match parser.current_token_kind() {
            TokenKind::Comma => {
                parser.advance();
            }
            TokenKind::Semicolon => {
                parser.advance();
                return Ok(());
            }
            _ => return Err(parser.unexpected("Comma | Semicolon")),
        }
    }
}

/// `type -> 'int' | 'bool' | 'float' | 'char'`
pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    match parser.current_token_kind() {
        TokenKind::Int => {
            parser.advance();
            Ok(Type::Int)
        }
        TokenKind::Bool => {
            parser.advance();
            Ok(Type::Bool)
        }
        TokenKind::Float => {
            parser.advance();
            Ok(Type::Float)
        }
        TokenKind::Char => {
            parser.advance();
            Ok(Type::Char)
        }
        _ => Err(parser.unexpected("Int | Bool | Float | Char")),
    }
}
