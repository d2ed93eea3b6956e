use crate::{
    ast::{
        expressions::Expr,
        statements::{ReturnStmt, Stmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_assignment_expr, parser::Parser};

/// statement := expr-statement | return-statement
///
/// An expression can never start with `return`, so the keyword picks the
/// alternative.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

/// expr-statement := ';' | assignment-expr ';'
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.speculate(|parser| {
        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
            return Ok(Stmt::Expression(Expr::Empty));
        }

        let expression = parse_assignment_expr(parser)?;
        parser.expect(TokenKind::Semicolon)?;

        Ok(Stmt::Expression(expression))
    })
}

/// return-statement := 'return' assignment-expr ';'
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.speculate(|parser| {
        parser.expect(TokenKind::Return)?;
        let value = parse_assignment_expr(parser)?;
        parser.expect(TokenKind::Semicolon)?;

        Ok(Stmt::Return(ReturnStmt { value }))
    })
}
