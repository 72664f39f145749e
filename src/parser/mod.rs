//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an Abstract Syntax Tree. Each parsing function
//! corresponds to one grammar rule:
//!
//! - Program structure (`decl { ... } start { ... }`)
//! - Declarations with optional array sizes
//! - Statement parsing (skip, block, assignment, if, while, print, scan)
//! - Expression parsing through the precedence chain
//!   expression > conjunction > equality > relation > addition > term >
//!   factor > primary
//!
//! The parser fails on the first unmet expectation and never recovers.

pub mod expr;
pub mod parser;
pub mod stmt;
