use std::fmt::Display;

use super::expressions::{Expression, Variable};

/// Statement variants.
///
/// A conditional always has an else branch; `if` without `else` is parsed
/// with `Skip` in the else position, never a missing branch.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Skip,
    Block(Vec<Statement>),
    Assignment {
        target: Variable,
        source: Expression,
    },
    Conditional {
        test: Expression,
        then_branch: Box<Statement>,
        else_branch: Box<Statement>,
    },
    Loop {
        test: Expression,
        body: Box<Statement>,
    },
    Print(Expression),
    Scan(Variable),
}

impl Statement {
    pub fn conditional(test: Expression, then_branch: Statement, else_branch: Statement) -> Statement {
        Statement::Conditional {
            test,
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn loop_of(test: Expression, body: Statement) -> Statement {
        Statement::Loop {
            test,
            body: Box::new(body),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Skip => write!(f, ";"),
            Statement::Block(members) => {
                writeln!(f, "{{")?;
                for member in members {
                    writeln!(f, "{}", member)?;
                }
                write!(f, "}}")
            }
            Statement::Assignment { target, source } => {
                write!(f, "{} = {};", target, source)
            }
            Statement::Conditional {
                test,
                then_branch,
                else_branch,
            } => write!(f, "if {}\n{}\nelse\n{}", test, then_branch, else_branch),
            Statement::Loop { test, body } => write!(f, "while {}\n{}", test, body),
            Statement::Print(expression) => write!(f, "print({});", expression),
            Statement::Scan(variable) => write!(f, "scan({});", variable),
        }
    }
}
