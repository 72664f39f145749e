//! Error types and error handling for the front end.
//!
//! This module defines the error types used throughout the parse and
//! check passes. It includes:
//!
//! - Error structures with source position information
//! - Lexical, syntax and semantic error variants
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
