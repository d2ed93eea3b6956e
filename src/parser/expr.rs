use crate::{
    ast::expressions::{BinaryOperator, Expr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// assignment-expr := IDENT '=' additive-expr | additive-expr
///
/// Only a variable already in scope can be assigned to. Any other left-hand
/// side falls back to a plain additive expression.
pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.speculate(|parser| {
        let assignee = parser.current_token().value.clone();

        if parser.current_token_kind() == TokenKind::Identifier
            && parser.peek_kind(1) == TokenKind::Assignment
            && parser.symbols().is_variable(&assignee)
        {
            let checkpoint = parser.checkpoint();
            parser.advance();
            parser.advance();

            match parse_additive_expr(parser) {
                Ok(value) => return Ok(Expr::binary(BinaryOperator::Assign, Expr::variable(assignee), value)),
                Err(_) => parser.restore(checkpoint),
            }
        }

        parse_additive_expr(parser)
    })
}

/// additive-expr := multiplicative-expr (('+'|'-') multiplicative-expr)*
pub fn parse_additive_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.speculate(|parser| {
        let mut left = parse_multiplicative_expr(parser)?;

        while let Some(operator) = BinaryOperator::additive(parser.current_token_kind()) {
            parser.advance();
            let right = parse_multiplicative_expr(parser)?;
            left = Expr::binary(operator, left, right);
        }

        Ok(left)
    })
}

/// multiplicative-expr := postfix-expr (('*'|'/') postfix-expr)*
pub fn parse_multiplicative_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.speculate(|parser| {
        let mut left = parse_postfix_expr(parser)?;

        while let Some(operator) = BinaryOperator::multiplicative(parser.current_token_kind()) {
            parser.advance();
            let right = parse_postfix_expr(parser)?;
            left = Expr::binary(operator, left, right);
        }

        Ok(left)
    })
}

/// postfix-expr := primary-expr | IDENT '(' (assignment-expr (',' assignment-expr)*)? ')'
pub fn parse_postfix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let primary_error = match parse_primary_expr(parser) {
        Ok(primary) => return Ok(primary),
        Err(error) => error,
    };

    let looks_like_call = parser.peek_kind(1) == TokenKind::OpenParen;
    parse_call_expr(parser).map_err(|call_error| if looks_like_call { call_error } else { primary_error })
}

/// IDENT '(' (assignment-expr (',' assignment-expr)*)? ')'
///
/// The callee must be declared or defined and the number of arguments must
/// match its arity. Arguments already built are dropped on failure, and
/// argument lists nest at most `MAX_CALL_DEPTH` deep.
pub fn parse_call_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.speculate(|parser| {
        let position = parser.get_position();
        let callee = parser.expect(TokenKind::Identifier)?.value;

        let Some(arity) = parser.symbols().arity_of(&callee) else {
            tracing::debug!(function = %callee, "call to undeclared function");
            return Err(Error::new(ErrorImpl::FunctionNotDeclared { function: callee }, position));
        };

        parser.expect(TokenKind::OpenParen)?;
        let arguments = parser.nested_call(parse_call_arguments)?;
        parser.expect(TokenKind::CloseParen)?;

        if arguments.len() != arity {
            tracing::debug!(function = %callee, expected = arity, received = arguments.len(), "argument count mismatch");
            return Err(Error::new(
                ErrorImpl::ArgumentCountMismatch {
                    function: callee,
                    expected: arity,
                    received: arguments.len(),
                },
                position,
            ));
        }

        Ok(Expr::call(callee, arguments))
    })
}

/// (assignment-expr (',' assignment-expr)*)?
fn parse_call_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut arguments = Vec::new();
    if parser.current_token_kind() == TokenKind::CloseParen {
        return Ok(arguments);
    }

    loop {
        arguments.push(parse_assignment_expr(parser)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            return Ok(arguments);
        }
    }
}

/// primary-expr := IDENT | NUMBER
///
/// Only variables in scope are accepted. A leading `-` is rejected: there is
/// no negation node. Fails without consuming anything.
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => {
            let name = parser.current_token().value.clone();
            if !parser.symbols().is_variable(&name) {
                return Err(parser.error(ErrorImpl::VariableNotDeclared { variable: name }));
            }

            parser.advance();
            Ok(Expr::variable(name))
        }
        TokenKind::Number => match parser.tokens().current_number() {
            Some(Ok(value)) => {
                parser.advance();
                Ok(Expr::number(value))
            }
            _ => Err(parser.error(ErrorImpl::NumberParseError {
                token: parser.current_token().value.clone(),
            })),
        },
        TokenKind::Dash => Err(parser.error(ErrorImpl::UnsupportedUnaryMinus)),
        _ => Err(parser.unexpected()),
    }
}
