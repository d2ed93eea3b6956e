use crate::{
    ast::ast::{DeclKind, ExternalDecl, FunctionBody, FunctionDefinition, Prototype, VariableDecl},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::parse_stmt};

/// external-declaration := function-declaration | function-definition
///
/// The prototype is parsed once; the token after it picks the alternative.
pub fn parse_external_decl(parser: &mut Parser) -> Result<ExternalDecl, Error> {
    parser.speculate(|parser| {
        let prototype = parse_prototype(parser)?;

        match parser.current_token_kind() {
            TokenKind::Semicolon => Ok(ExternalDecl::Prototype(parse_function_decl(parser, prototype)?)),
            TokenKind::OpenCurly => Ok(ExternalDecl::Function(parse_function_def(parser, prototype)?)),
            _ => Err(parser.unexpected()),
        }
    })
}

/// function-declaration := prototype ';'
pub fn parse_function_decl(parser: &mut Parser, prototype: Prototype) -> Result<Prototype, Error> {
    parser.speculate(|parser| {
        let position = parser.get_position();
        parser.expect(TokenKind::Semicolon)?;

        if let Err(conflict) = parser.symbols().check_declaration(&prototype) {
            tracing::debug!(function = %prototype.name, %conflict, "rejected declaration");
            return Err(Error::new(conflict, position));
        }

        let redeclared = parser.symbols().is_declared(&prototype.name);
        parser.symbols_mut().declare(&prototype);
        tracing::trace!(function = %prototype.name, arity = prototype.arity(), redeclared, "declared function");
        Ok(prototype)
    })
}

/// function-definition := prototype function-body
///
/// The signature is checked against the tables before the body is read.
pub fn parse_function_def(parser: &mut Parser, prototype: Prototype) -> Result<FunctionDefinition, Error> {
    parser.speculate(|parser| {
        if let Err(conflict) = parser.symbols().check_definition(&prototype) {
            tracing::debug!(function = %prototype.name, %conflict, "rejected definition");
            return Err(parser.error(conflict));
        }

        let body = parse_function_body(parser, &prototype)?;

        parser.symbols_mut().define(&prototype);
        tracing::trace!(function = %prototype.name, arity = prototype.arity(), "defined function");
        Ok(FunctionDefinition::new(prototype, body))
    })
}

/// prototype := 'int' IDENT '(' ( 'int' IDENT (',' 'int' IDENT)* )? ')'
pub fn parse_prototype(parser: &mut Parser) -> Result<Prototype, Error> {
    parser.speculate(|parser| {
        parser.expect(TokenKind::Int)?;
        let name = parser.expect(TokenKind::Identifier)?.value;
        parser.expect(TokenKind::OpenParen)?;

        let mut params: Vec<String> = Vec::new();
        if parser.current_token_kind() == TokenKind::Int {
            loop {
                parser.expect(TokenKind::Int)?;

                let position = parser.get_position();
                let param = parser.expect(TokenKind::Identifier)?.value;
                if params.contains(&param) {
                    return Err(Error::new(ErrorImpl::ParameterAlreadyDeclared { parameter: param }, position));
                }
                params.push(param);

                if parser.current_token_kind() == TokenKind::Comma {
                    parser.advance();
                } else {
                    break;
                }
            }
        }

        parser.expect(TokenKind::CloseParen)?;

        Ok(Prototype::new(name, params))
    })
}

/// function-body := '{' var-decl* statement+ '}'
///
/// Opens a fresh variable scope holding the parameters, then requires the
/// body to end with a return statement.
pub fn parse_function_body(parser: &mut Parser, prototype: &Prototype) -> Result<FunctionBody, Error> {
    parser.speculate(|parser| {
        parser.expect(TokenKind::OpenCurly)?;
        parser.symbols_mut().enter_function(prototype);

        let mut body = FunctionBody::new();
        for param in &prototype.params {
            body.add_variable_decl(VariableDecl::new(param.clone(), DeclKind::Parameter));
        }

        while parser.current_token_kind() == TokenKind::Int {
            let position = parser.get_position();
            let decl = parse_var_decl(parser)?;

            if let Err(conflict) = parser.symbols_mut().declare_local(&decl.name) {
                tracing::debug!(function = %prototype.name, %conflict, "rejected local");
                return Err(Error::new(conflict, position));
            }
            body.add_variable_decl(decl);
        }

        let stopped_at = loop {
            match parse_stmt(parser) {
                Ok(stmt) => body.add_statement(stmt),
                Err(error) => break error,
            }
        };

        if parser.current_token_kind() != TokenKind::CloseCurly {
            return Err(stopped_at);
        }

        if !body.statements.last().is_some_and(|stmt| stmt.is_return()) {
            tracing::debug!(function = %prototype.name, "body does not end with return");
            return Err(parser.error(ErrorImpl::MissingReturn {
                function: prototype.name.clone(),
            }));
        }

        parser.expect(TokenKind::CloseCurly)?;
        Ok(body)
    })
}

/// var-decl := 'int' IDENT ';'
pub fn parse_var_decl(parser: &mut Parser) -> Result<VariableDecl, Error> {
    parser.speculate(|parser| {
        parser.expect(TokenKind::Int)?;
        let name = parser.expect(TokenKind::Identifier)?.value;
        parser.expect(TokenKind::Semicolon)?;

        Ok(VariableDecl::new(name, DeclKind::Local))
    })
}
