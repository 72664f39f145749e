//! Front end for the Clite teaching language.
//!
//! The pipeline is lexer -> parser -> static type checker, each stage
//! failing on the first error it meets with no recovery. There is no
//! code generation and no execution; the checker's type map is the final
//! product.

#![allow(clippy::module_inception)]

use std::{fs, path::PathBuf, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// A byte offset into a named source file. The file name is shared by
/// every position produced from the same lexer run.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Resolves a byte offset to (1-based line number, line text, offset
/// within the line). Used only when printing a diagnostic, so the file
/// is re-read here rather than held in memory.
///
/// An offset at or past the end of the file (the EOF token of a
/// truncated source) is clamped to the last character, so the caret
/// lands on the final line instead of nowhere.
pub fn get_line_at_position(file: PathBuf, position: u32) -> (usize, String, usize) {
    let content = fs::read_to_string(&file).unwrap();

    if content.is_empty() {
        return (1, String::new(), 0);
    }

    let target = (position as usize).min(content.len() - 1);

    let mut line_start = 0;
    for (line_number, line) in content.split_inclusive('\n').enumerate() {
        let line_end = line_start + line.len();
        if target < line_end {
            return (line_number + 1, line.to_string(), target - line_start);
        }
        line_start = line_end;
    }

    unreachable!("clamped position is always inside some line")
}


/// Prints a caret diagnostic for an error:
///
/// ```text
/// Error: UnrecognisedCharacter
/// -> program.cl
///    |
///  2 | x = #;
///    | ----^
/// ```
pub fn display_error(error: Error, file: PathBuf) {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(file.clone(), position.0);

    let line_label = line.to_string();
    let gutter = line_label.len() + 2;

    match error.get_tip() {
        ErrorTip::None => println!("Error: {}", error.get_error_name()),
        tip => println!("Error: {} ({})", error.get_error_name(), tip),
    }
    println!("-> {}", file.as_os_str().to_string_lossy());
    println!("{:>gutter$}", "|");

    let trimmed = line_text.trim_start_matches(' ');
    let indent = line_text.len() - trimmed.len();
    println!("{} | {}", line_label, trimmed.trim_end());

    let caret = (line_pos + 1).saturating_sub(indent).max(1);
    println!("{:>gutter$} {:->caret$}", "|", "^");
}
