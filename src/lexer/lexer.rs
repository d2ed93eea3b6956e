use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_PATTERN, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Order matters: the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        MK_PATTERN!("[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        MK_PATTERN!("[0-9]+", number_handler),
        MK_PATTERN!("\\s+", skip_handler),
        MK_PATTERN!("//[^\\n]*", skip_handler),
        MK_PATTERN!("/\\*(?s:.*?)\\*/", skip_handler),
        MK_PATTERN!("/\\*", unterminated_comment_handler),
        MK_PATTERN!("\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        MK_PATTERN!("\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        MK_PATTERN!("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        MK_PATTERN!("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        MK_PATTERN!("=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        MK_PATTERN!(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        MK_PATTERN!(",", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        MK_PATTERN!("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        MK_PATTERN!("-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        MK_PATTERN!("/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        MK_PATTERN!("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Span covering the next `len` bytes of input.
    ///
    /// Offsets fit in a `u32`: `tokenize` rejects longer sources up front.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|found| found.as_str().to_string())
            .unwrap_or_default()
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let span = lexer.span_of(matched.len());

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched, span));
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = lexer.matched(regex);
    let span = lexer.span_of(value.len());
    let kind = RESERVED_LOOKUP.get(value.as_str()).copied().unwrap_or(TokenKind::Identifier);

    lexer.advance_n(value.len());
    lexer.push(MK_TOKEN!(kind, value, span));
    Ok(())
}

/// Reached only when the closed-comment pattern did not match.
fn unterminated_comment_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnterminatedComment, lexer.span_of(0).start))
}

/// Byte offsets are stored as `u32`.
pub(crate) fn check_source_length(len: usize, file: &Rc<String>) -> Result<(), Error> {
    u32::try_from(len).map(|_| ()).map_err(|_| {
        Error::new(
            ErrorImpl::SourceTooLarge { limit: u32::MAX as usize },
            Position(0, Rc::clone(file)),
        )
    })
}

/// Splits source text into tokens, always terminated by a single `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    check_source_length(lex.source.len(), &lex.file)?;

    while !lex.at_eof() {
        let pattern = PATTERNS.iter().find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token: lex.at().to_string() },
                    lex.span_of(0).start,
                ));
            }
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    tracing::trace!(count = lex.tokens.len(), file = %lex.file, "tokenized source");
    Ok(lex.tokens)
}
