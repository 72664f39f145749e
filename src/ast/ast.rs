use std::{fmt::Display, slice::Iter};

use super::{
    expressions::Variable,
    statements::Statement,
    types::Type,
};

/// A single (variable, type) pair from the declaration section.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub variable: Variable,
    pub ty: Type,
}

impl Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.ty {
            Type::Array { element, size } => {
                write!(f, "{} {}[{}];", element, self.variable, size)
            }
            ty => write!(f, "{} {};", ty, self.variable),
        }
    }
}

/// The ordered declaration list of a program.
///
/// Insertion order is preserved so the duplicate scan is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations(Vec<Declaration>);

impl Declarations {
    pub fn new() -> Self {
        Declarations(vec![])
    }

    pub fn add(&mut self, declaration: Declaration) {
        self.0.push(declaration);
    }

    pub fn iter(&self) -> Iter<'_, Declaration> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Declaration> {
        self.0.get(index)
    }
}

impl Display for Declarations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for declaration in self.iter() {
            writeln!(f, "{}", declaration)?;
        }
        Ok(())
    }
}

/// A whole Clite program: the declaration section plus the body block.
///
/// The body is always a `Statement::Block`; the parser never produces
/// anything else at the top level.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub decpart: Declarations,
    pub body: Statement,
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "decl {{")?;
        write!(f, "{}", self.decpart)?;
        writeln!(f, "}}")?;
        write!(f, "start {}", self.body)
    }
}
