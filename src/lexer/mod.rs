//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of the `int`/`return` keywords, identifiers, integers and symbols
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! `TokenStream` is the cursor the parser backtracks over.

pub mod lexer;
pub mod stream;
pub mod tokens;

#[cfg(test)]
mod tests;
