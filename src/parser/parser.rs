//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the translation unit
//! entry point. The grammar rules live in `decl`, `stmt` and `expr`; each is
//! a free function taking `&mut Parser` and returning `Result<Node, Error>`.
//!
//! The parser owns the two pieces of mutable state a parse needs:
//! - the token stream, whose cursor every rule restores on failure
//! - the symbol tables used for the semantic checks done while parsing

use std::rc::Rc;

use crate::{
    ast::ast::TranslationUnit,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        stream::TokenStream,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    decl::parse_external_decl,
    symbols::{builtin_prototypes, SymbolTables},
};

/// Deepest nesting of call argument lists the parser will descend into.
/// Each level costs several stack frames.
pub const MAX_CALL_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The token stream and its cursor
    tokens: TokenStream,
    /// Declared functions, defined functions and variables in scope
    symbols: SymbolTables,
    /// Call argument lists currently open
    call_depth: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
}

impl Parser {
    /// Creates a new Parser instance with freshly seeded symbol tables.
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens: TokenStream::new(tokens),
            symbols: SymbolTables::new(),
            call_depth: 0,
            file,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.current()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.current_kind()
    }

    /// Returns the kind of the token `offset` places ahead.
    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens.peek(offset).kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        self.tokens.advance()
    }

    /// Consumes a token of the expected kind, or fails without moving.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            Err(self.unexpected())
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.tokens.is_at_end()
    }

    /// Absolute cursor position, for a later `restore`.
    pub fn checkpoint(&self) -> usize {
        self.tokens.position()
    }

    /// Moves the cursor back to a saved position.
    pub fn restore(&mut self, checkpoint: usize) {
        self.tokens.restore(checkpoint);
    }

    /// Runs a rule, restoring the cursor to its entry position if it fails.
    ///
    /// Nodes the rule built before failing are owned by its stack frame and
    /// are dropped when the `Err` propagates.
    pub fn speculate<T>(&mut self, rule: impl FnOnce(&mut Parser) -> Result<T, Error>) -> Result<T, Error> {
        let checkpoint = self.checkpoint();
        let result = rule(self);
        if result.is_err() {
            self.restore(checkpoint);
        }
        result
    }

    /// Runs `rule` one call level deeper, failing with `NestingTooDeep`
    /// once `MAX_CALL_DEPTH` levels are open. The level is closed on every
    /// exit path.
    pub fn nested_call<T>(&mut self, rule: impl FnOnce(&mut Parser) -> Result<T, Error>) -> Result<T, Error> {
        if self.call_depth >= MAX_CALL_DEPTH {
            tracing::debug!(limit = MAX_CALL_DEPTH, "call nesting too deep");
            return Err(self.error(ErrorImpl::NestingTooDeep { limit: MAX_CALL_DEPTH }));
        }

        self.call_depth += 1;
        let result = rule(self);
        self.call_depth -= 1;
        result
    }

    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    pub fn symbols(&self) -> &SymbolTables {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTables {
        &mut self.symbols
    }

    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    /// Builds an error located at the current token.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.get_position())
    }

    /// An `UnexpectedToken` error for the current token.
    pub fn unexpected(&self) -> Error {
        self.error(ErrorImpl::UnexpectedToken {
            token: self.current_token().value.clone(),
        })
    }
}

/// Parses a stream of tokens into a translation unit.
///
/// This is the main entry point for parsing. The parser is returned alongside
/// the result so the same token stream can be parsed again.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<TranslationUnit, Error>) {
    let mut parser = Parser::new(tokens, file);
    let unit = parse_translation_unit(&mut parser);

    (parser, unit)
}

/// translation-unit := external-declaration* EOF
///
/// Always starts from token 0 with freshly seeded symbol tables, so calling
/// it twice on one parser yields equal trees. On failure nothing of the unit
/// survives.
pub fn parse_translation_unit(parser: &mut Parser) -> Result<TranslationUnit, Error> {
    parser.restore(0);
    parser.symbols_mut().reset();
    parser.call_depth = 0;

    parser.speculate(|parser| {
        let mut unit = TranslationUnit::new();
        for prototype in builtin_prototypes() {
            unit.add_prototype(prototype);
        }

        while parser.has_tokens() {
            let declaration = parse_external_decl(parser)?;
            unit.add(declaration);
        }

        tracing::debug!(
            file = %parser.file(),
            prototypes = unit.prototypes().len(),
            functions = unit.functions().len(),
            "parsed translation unit"
        );
        Ok(unit)
    })
}
