use crate::{
    ast::expressions::{Expression, Operator, Value, Variable},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::parse_type};

/// `expression -> conjunction { '||' conjunction }`, left-folded.
pub fn parse_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let mut expression = parse_conjunction(parser)?;

    while parser.current_token_kind() == TokenKind::Or {
        parser.advance();
        let right = parse_conjunction(parser)?;
        expression = Expression::binary(Operator::Or, expression, right);
    }

    Ok(expression)
}

/// `conjunction -> equality { '&&' equality }`, left-folded.
pub fn parse_conjunction(parser: &mut Parser) -> Result<Expression, Error> {
    let mut expression = parse_equality(parser)?;

    while parser.current_token_kind() == TokenKind::And {
        parser.advance();
        let right = parse_equality(parser)?;
        expression = Expression::binary(Operator::And, expression, right);
    }

    Ok(expression)
}

/// `equality -> relation [ ('==' | '!=') relation ]`
///
/// At most one operator application; equality does not chain.
pub fn parse_equality(parser: &mut Parser) -> Result<Expression, Error> {
    let expression = parse_relation(parser)?;

    let op = match parser.current_token_kind() {
        TokenKind::Equals => Operator::Equal,
        TokenKind::NotEquals => Operator::NotEqual,
        _ => return Ok(expression),
    };

    parser.advance();
    let right = parse_relation(parser)?;
    Ok(Expression::binary(op, expression, right))
}

/// `relation -> addition [ ('<' | '<=' | '>' | '>=') addition ]`
///
/// At most one operator application; relations do not chain.
pub fn parse_relation(parser: &mut Parser) -> Result<Expression, Error> {
    let expression = parse_addition(parser)?;

    let op = match parser.current_token_kind() {
        TokenKind::Less => Operator::Less,
        TokenKind::LessEquals => Operator::LessEqual,
        TokenKind::Greater => Operator::Greater,
        TokenKind::GreaterEquals => Operator::GreaterEqual,
        _ => return Ok(expression),
    };

    parser.advance();
    let right = parse_addition(parser)?;
    Ok(Expression::binary(op, expression, right))
}

/// `addition -> term { ('+' | '-') term }`, left-folded.
pub fn parse_addition(parser: &mut Parser) -> Result<Expression, Error> {
    let mut expression = parse_term(parser)?;

    loop {
        let op = match parser.current_token_kind() {
            TokenKind::Plus => Operator::Plus,
            TokenKind::Dash => Operator::Minus,
            _ => return Ok(expression),
        };

        parser.advance();
        let right = parse_term(parser)?;
        expression = Expression::binary(op, expression, right);
    }
}

/// `term -> factor { ('*' | '/') factor }`, left-folded.
pub fn parse_term(parser: &mut Parser) -> Result<Expression, Error> {
    let mut expression = parse_factor(parser)?;

    loop {
        let op = match parser.current_token_kind() {
            TokenKind::Star => Operator::Times,
            TokenKind::Slash => Operator::Divide,
            _ => return Ok(expression),
        };

        parser.advance();
        let right = parse_factor(parser)?;
        expression = Expression::binary(op, expression, right);
    }
}

/// `factor -> [ '!' | '-' ] primary`
pub fn parse_factor(parser: &mut Parser) -> Result<Expression, Error> {
    let op = match parser.current_token_kind() {
        TokenKind::Not => Some(Operator::Not),
        TokenKind::Dash => Some(Operator::Negate),
        _ => None,
    };

    if let Some(op) = op {
        parser.advance();
        let term = parse_primary(parser)?;
        Ok(Expression::unary(op, term))
    } else {
        parse_primary(parser)
    }
}

/// `primary -> identifier [ '[' expression ']' ] | literal
///           | '(' expression ')' | type '(' expression ')'`
///
/// The last form builds a Unary cast node whose operator is named after
/// the target type.
pub fn parse_primary(parser: &mut Parser) -> Result<Expression, Error> {
    let kind = parser.current_token_kind();

    if kind == TokenKind::Identifier {
        let identifier = parser.advance().value.clone();

        if parser.current_token_kind() == TokenKind::OpenBracket {
            parser.advance();
            let index = parse_expr(parser)?;
            parser.expect(TokenKind::CloseBracket)?;
            return Ok(Expression::Variable(Variable::indexed(identifier, index)));
        }

        return Ok(Expression::Variable(Variable::new(identifier)));
    }

    if kind.is_literal() {
        return parse_literal(parser);
    }

    if kind == TokenKind::OpenParen {
        parser.advance();
        let expression = parse_expr(parser)?;
        parser.expect(TokenKind::CloseParen)?;
        return Ok(expression);
    }

    if kind.is_type() {
        let target = parse_type(parser)?;
        let op = match target {
            crate::ast::types::Type::Int => Operator::IntCast,
            crate::ast::types::Type::Float => Operator::FloatCast,
            crate::ast::types::Type::Char => Operator::CharCast,
            _ => return Err(parser.unexpected("Int | Float | Char cast")),
        };

        parser.expect(TokenKind::OpenParen)?;
        let term = parse_expr(parser)?;
        parser.expect(TokenKind::CloseParen)?;
        return Ok(Expression::unary(op, term));
    }

    Err(parser.unexpected("Identifier | Literal | OpenParen | Type"))
}

/// One concrete (never undefined) literal Value.
pub fn parse_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.advance().clone();

    let value = match token.kind {
        TokenKind::IntLiteral => {
            let parsed = token.value.parse::<i32>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            })?;
            Value::Int(Some(parsed))
        }
        TokenKind::FloatLiteral => {
            let parsed = token.value.parse::<f64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            })?;
            Value::Float(Some(parsed))
        }
        TokenKind::CharLiteral => Value::Char(token.value.chars().next()),
        TokenKind::True => Value::Bool(Some(true)),
        TokenKind::False => Value::Bool(Some(false)),
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from("Literal"),
                    found: format!("{} ({})", token.kind, token.value),
                },
                token.span.start.clone(),
            ))
        }
    };

    Ok(Expression::Literal(value))
}
