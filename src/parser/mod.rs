//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains a backtracking recursive-descent parser that turns a
//! token stream into a `TranslationUnit`. Semantic checks run while the
//! grammar is recognised:
//!
//! - Declaration and definition conflicts (arity, redefinition)
//! - Duplicate parameters and locals
//! - References to variables that are not in scope
//! - Call targets and argument counts
//! - Function bodies ending in a return statement
//!
//! Every rule restores the token cursor when it fails, so callers can try the
//! next alternative from the same place.

pub mod decl;
pub mod expr;
pub mod parser;
pub mod stmt;
pub mod symbols;
