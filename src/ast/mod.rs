/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program, declarations and the variable entity
/// - expressions: Expression, value and operator variants
/// - statements: Statement variants
/// - types: Type representations and typed operator codes
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
