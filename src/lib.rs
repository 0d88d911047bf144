#![allow(clippy::module_inception)]

use crate::errors::errors::SyntaxError;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column location in the source text.
///
/// Tokens carry the position of their first character; AST nodes carry the
/// position of their leading token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// The position of the first character of any source text.
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the given 1-based line, without its trailing newline.
pub fn get_line(source: &str, line_number: u32) -> Option<&str> {
    source.lines().nth((line_number as usize).checked_sub(1)?)
}


pub fn display_error(error: &SyntaxError, file_name: &str, source: &str) {
    /*
        Error: UnexpectedToken (expected `)`, found `EOF`)
        -> test.lang
           |
         1 | int test = (34 + 76
           | ------------------^
    */

    let position = error.get_position();

    println!("Error: {} ({})", error.get_error_name(), error.kind());
    println!("-> {}", file_name);

    let Some(line_text) = get_line(source, position.line) else {
        println!("at {}", position);
        return;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
