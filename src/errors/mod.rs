//! Error types and error handling for the front end.
//!
//! This module defines the error type every phase fails with. It includes:
//!
//! - The error structure with source position information
//! - Diagnostic variants for lexing, grammar and semantic failures
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
