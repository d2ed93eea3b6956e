#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::{
    ast::ast::TranslationUnit,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses a whole source file.
///
/// Returns the finished translation unit, or the first error of either phase.
/// A failed parse never yields a partially populated tree.
pub fn parse_source(source: &str, file: &str) -> Result<TranslationUnit, Error> {
    let file = Rc::new(String::from(file));
    let tokens = tokenize(source.to_string(), Some(String::from(file.as_str())))?;
    let (_, unit) = parse(tokens, file);
    unit
}

/// Finds the line holding a byte offset.
///
/// Returns the 1-based line number, the line text and the offset inside it.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // Errors at EOF point one past the final character.
    if pos == content.len() {
        let line = content.split_inclusive('\n').last().unwrap_or("");
        if line.ends_with('\n') {
            return Some((line_number, String::new(), 0));
        }
        return Some((line_number.saturating_sub(1).max(1), line.to_string(), line.len()));
    }

    None
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nint f();\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 32).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("int f()", 7).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "int f()");
        assert_eq!(line_pos, 7);

        assert!(super::get_line_at_position("int", 40).is_none());
    }

    #[test]
    fn test_format_error_points_at_token() {
        let source = "int f() {\n    return y;\n}\n";
        let error = super::parse_source(source, "test.c").unwrap_err();
        let rendered = super::format_error(&error, source);

        assert!(rendered.starts_with("Error: "));
        assert!(rendered.contains("-> test.c"));
        assert!(rendered.contains("2 | return y;"));
        assert!(rendered.ends_with('^'));
    }

    #[test]
    fn test_parse_source_reports_lexer_errors() {
        let error = super::parse_source("int f() { return 1 @ 2; }", "test.c").unwrap_err();
        assert_eq!(error.get_error_name(), "UnrecognisedToken");
        assert_eq!(error.get_position().0, 19);
    }
}

/// Renders an error against its source text.
///
/// ```text
/// Error: VariableNotDeclared (Variable `y` not declared)
/// -> main.c
///   |
/// 2 | return y;
///   | -------^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    rendered.push_str(&format!("-> {}", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return rendered;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("\n{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    rendered.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
