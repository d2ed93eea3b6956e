//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-text tokens
//! - `MK_PATTERN!` - Builds an anchored `RegexPattern` entry for the lexer table

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for single-token patterns whose text is fixed.
///
/// The generated handler pushes a token of the given kind spanning the literal
/// and advances the lexer past it.
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Result<(), Error> {
            let span = lexer.span_of($value.len());
            lexer.push(MK_TOKEN!($kind, String::from($value), span));
            lexer.advance_n($value.len());
            Ok(())
        }
    };
}

/// Builds a lexer pattern anchored at the start of the remaining input.
///
/// The expression is a compile-time constant, so a failing `Regex::new` is a
/// programming error rather than an input error.
#[macro_export]
macro_rules! MK_PATTERN {
    ($regex:literal, $handler:expr) => {
        RegexPattern {
            regex: Regex::new(concat!("^(?:", $regex, ")")).expect("invalid lexer pattern"),
            handler: $handler,
        }
    };
}
