//! Lexer helper macros.
//!
//! `MK_TOKEN!` builds a Token from a kind, spelling and span.
//! `MK_DEFAULT_HANDLER!` builds a pattern handler for tokens whose
//! spelling is fixed (operators and punctuation), where the matched text
//! carries no information beyond its width.

/// Builds a Token.
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Semicolon, String::from(";"), span);
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

/// Builds a handler for a fixed-spelling pattern.
///
/// The produced closure pushes one token of the given kind with the
/// literal as its value, spanning exactly the literal's width, and moves
/// the cursor past it. The regex argument is unused because the spelling
/// is already known.
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new(";").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: Regex| {
            let width = $value.len() as i32;
            let start = Position(lexer.pos as u32, Rc::clone(&lexer.file));
            let end = Position((lexer.pos + width) as u32, Rc::clone(&lexer.file));

            lexer.push(MK_TOKEN!($kind, String::from($value), Span { start, end }));
            lexer.advance_n(width);
        }
    };
}
