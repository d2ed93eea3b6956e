//! Cursor over a tokenized source file.
//!
//! The parser reads tokens only through this type. Positions are absolute
//! token indices, so a saved position can be restored at any later point.

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    /// Wraps a token list, appending an `EOF` token if the list lacks one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(Position::null);
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span { start: end.clone(), end }
            ));
        }

        TokenStream { tokens, pos: 0 }
    }

    pub fn current(&self) -> &Token {
        self.peek(0)
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    pub fn current_value(&self) -> &str {
        &self.current().value
    }

    /// Numeric value of the current token.
    ///
    /// `None` when the current token is not a number; `Some(Err(_))` when the
    /// literal does not fit in an `i32`.
    pub fn current_number(&self) -> Option<Result<i32, std::num::ParseIntError>> {
        match self.current_kind() {
            TokenKind::Number => Some(self.current_value().parse()),
            _ => None,
        }
    }

    /// Looks `offset` tokens ahead. Reads past the end yield the `EOF` token.
    pub fn peek(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    /// Moves to the next token and returns the one just consumed.
    /// The cursor never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let consumed = self.pos;
        if self.tokens[consumed].kind != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[consumed]
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn restore(&mut self, position: usize) {
        self.pos = position.min(self.tokens.len() - 1);
    }

    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::EOF
    }
}
