use std::{collections::HashMap, fmt::Display, rc::Rc};

use crate::{
    ast::{
        ast::{Declarations, Program},
        expressions::{Expression, Operator, Variable},
        statements::Statement,
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// The declaration environment: each declared variable mapped to its
/// declared type.
///
/// Keys are [`Variable`]s, whose equality and hashing ignore any index
/// annotation, so looking up `a[i]` finds the entry declared as `a`.
#[derive(Debug, Clone, Default)]
pub struct TypeMap {
    map: HashMap<Variable, Type>,
}

impl TypeMap {
    pub fn new() -> Self {
        TypeMap {
            map: HashMap::new(),
        }
    }

    /// Builds the map from a declaration section, in order. Duplicates are
    /// not detected here; the checker scans for them separately so the
    /// reported variable is the later occurrence.
    pub fn typing(declarations: &Declarations) -> Self {
        let mut type_map = TypeMap::new();
        for declaration in declarations.iter() {
            type_map
                .map
                .insert(declaration.variable.clone(), declaration.ty.clone());
        }
        type_map
    }

    pub fn get(&self, variable: &Variable) -> Option<&Type> {
        self.map.get(variable)
    }

    pub fn contains(&self, variable: &Variable) -> bool {
        self.map.contains_key(variable)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Display for TypeMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Type map:")?;
        let mut entries: Vec<_> = self.map.iter().collect();
        entries.sort_by(|a, b| a.0.id.cmp(&b.0.id));
        for (variable, ty) in entries {
            writeln!(f, "  {}: {}", variable, ty)?;
        }
        Ok(())
    }
}

/// Walks a program against its type map.
///
/// The tree carries no source spans, so every error points at the start
/// of the file; the error text names the offending construct instead.
pub struct TypeChecker {
    type_map: TypeMap,
    file: Rc<String>,
}

impl TypeChecker {
    pub fn new(type_map: TypeMap, file: Rc<String>) -> Self {
        TypeChecker { type_map, file }
    }

    fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, Position(0, self.file.clone()))
    }

    /// The type an expression evaluates to.
    ///
    /// An arithmetic result is float exactly when the left operand is
    /// float, otherwise int. Relations and boolean connectives are bool.
    /// Only meaningful for expressions `check_expression` accepts.
    pub fn type_of(&self, expression: &Expression) -> Result<Type, Error> {
        match expression {
            Expression::Variable(variable) => match self.type_map.get(variable) {
                Some(ty) => Ok(ty.clone()),
                None => Err(self.error(ErrorImpl::UndeclaredVariable {
                    variable: variable.id.clone(),
                })),
            },
            Expression::Literal(value) => Ok(value.type_of()),
            Expression::Binary { op, left, .. } => {
                if op.is_arithmetic_op() {
                    if *self.type_of(left)?.base() == Type::Float {
                        Ok(Type::Float)
                    } else {
                        Ok(Type::Int)
                    }
                } else if op.is_relational_op() || op.is_boolean_op() {
                    Ok(Type::Bool)
                } else {
                    Err(self.error(ErrorImpl::MalformedAst {
                        message: format!("binary node carrying unary operator `{}`", op),
                    }))
                }
            }
            Expression::Unary { op, term } => match op {
                Operator::Not => Ok(Type::Bool),
                Operator::Negate => self.type_of(term),
                Operator::IntCast => Ok(Type::Int),
                Operator::FloatCast => Ok(Type::Float),
                Operator::CharCast => Ok(Type::Char),
                _ => Err(self.error(ErrorImpl::MalformedAst {
                    message: format!("unary node carrying binary operator `{}`", op),
                })),
            },
        }
    }

    /// Checks that an expression is well typed.
    pub fn check_expression(&self, expression: &Expression) -> Result<(), Error> {
        match expression {
            Expression::Variable(variable) => {
                if self.type_map.contains(variable) {
                    Ok(())
                } else {
                    Err(self.error(ErrorImpl::UndeclaredVariable {
                        variable: variable.id.clone(),
                    }))
                }
            }
            Expression::Literal(_) => Ok(()),
            Expression::Binary { op, left, right } => {
                self.check_expression(left)?;
                self.check_expression(right)?;

                let left_type = self.type_of(left)?;
                let right_type = self.type_of(right)?;

                if op.is_arithmetic_op() {
                    if left_type.same_base(&right_type) && left_type.base().is_numeric() {
                        Ok(())
                    } else {
                        Err(self.error(ErrorImpl::OperandTypeError {
                            operator: op.to_string(),
                            left: left_type.to_string(),
                            right: right_type.to_string(),
                        }))
                    }
                } else if op.is_relational_op() {
                    if left_type.same_base(&right_type) {
                        Ok(())
                    } else {
                        Err(self.error(ErrorImpl::OperandTypeError {
                            operator: op.to_string(),
                            left: left_type.to_string(),
                            right: right_type.to_string(),
                        }))
                    }
                } else if op.is_boolean_op() {
                    if *left_type.base() == Type::Bool && *right_type.base() == Type::Bool {
                        Ok(())
                    } else {
                        Err(self.error(ErrorImpl::NonBoolOperand {
                            operator: op.to_string(),
                        }))
                    }
                } else {
                    Err(self.error(ErrorImpl::MalformedAst {
                        message: format!("binary node carrying unary operator `{}`", op),
                    }))
                }
            }
            Expression::Unary { op, term } => {
                self.check_expression(term)?;

                let term_type = self.type_of(term)?;

                match op {
                    Operator::Not => {
                        if *term_type.base() == Type::Bool {
                            Ok(())
                        } else {
                            Err(self.error(ErrorImpl::UnaryTypeError {
                                operator: op.to_string(),
                                operand: term_type.to_string(),
                            }))
                        }
                    }
                    Operator::Negate
                    | Operator::IntCast
                    | Operator::FloatCast
                    | Operator::CharCast => {
                        if op.specialize(&term_type).is_some() {
                            Ok(())
                        } else {
                            Err(self.error(ErrorImpl::UnaryTypeError {
                                operator: op.to_string(),
                                operand: term_type.to_string(),
                            }))
                        }
                    }
                    _ => Err(self.error(ErrorImpl::MalformedAst {
                        message: format!("unary node carrying binary operator `{}`", op),
                    })),
                }
            }
        }
    }

    /// Checks one statement, recursing into its children.
    pub fn check_statement(&self, statement: &Statement) -> Result<(), Error> {
        match statement {
            Statement::Skip => Ok(()),
            Statement::Block(members) => {
                for member in members {
                    self.check_statement(member)?;
                }
                Ok(())
            }
            Statement::Assignment { target, source } => {
                let target_type = match self.type_map.get(target) {
                    Some(ty) => ty.clone(),
                    None => {
                        return Err(self.error(ErrorImpl::UndefinedTarget {
                            variable: target.id.clone(),
                        }))
                    }
                };

                self.check_expression(source)?;
                let source_type = self.type_of(source)?;

                // Same base type, or the two widening assignments the
                // language allows: float <- int and int <- char.
                if target_type.same_base(&source_type)
                    || (*target_type.base() == Type::Float && *source_type.base() == Type::Int)
                    || (*target_type.base() == Type::Int && *source_type.base() == Type::Char)
                {
                    Ok(())
                } else {
                    Err(self.error(ErrorImpl::MixedModeAssignment {
                        target: target.to_string(),
                        target_type: target_type.to_string(),
                        source_type: source_type.to_string(),
                    }))
                }
            }
            Statement::Conditional {
                test,
                then_branch,
                else_branch,
            } => {
                self.check_test(test, "if")?;
                self.check_statement(then_branch)?;
                self.check_statement(else_branch)
            }
            Statement::Loop { test, body } => {
                self.check_test(test, "while")?;
                self.check_statement(body)
            }
            Statement::Print(expression) => self.check_expression(expression),
            Statement::Scan(target) => {
                if self.type_map.contains(target) {
                    Ok(())
                } else {
                    Err(self.error(ErrorImpl::UndeclaredVariable {
                        variable: target.id.clone(),
                    }))
                }
            }
        }
    }

    /// A test expression must be exactly bool.
    fn check_test(&self, test: &Expression, construct: &str) -> Result<(), Error> {
        self.check_expression(test)?;

        if self.type_of(test)? == Type::Bool {
            Ok(())
        } else {
            Err(self.error(ErrorImpl::PoorlyTypedTest {
                construct: String::from(construct),
                test: test.to_string(),
            }))
        }
    }
}

/// Rejects a declaration section naming the same identifier twice. The
/// scan is pairwise over the declared order, case-sensitively.
fn check_declarations(declarations: &Declarations, file: &Rc<String>) -> Result<(), Error> {
    for i in 0..declarations.len() {
        for j in (i + 1)..declarations.len() {
            let first = &declarations.get(i).unwrap().variable;
            let second = &declarations.get(j).unwrap().variable;
            if first == second {
                return Err(Error::new(
                    ErrorImpl::DuplicateDeclaration {
                        variable: second.id.clone(),
                    },
                    Position(0, file.clone()),
                ));
            }
        }
    }

    Ok(())
}

/// Type checks a whole program.
///
/// This is the main entry point for static checking. The declaration
/// section is scanned for duplicates, turned into the type map, and the
/// body is checked against it.
///
/// # Arguments
///
/// * `program` - The parsed program to check
/// * `file` - Reference-counted string containing the source file name
///
/// # Returns
///
/// The type map for downstream stages, or the first typing error.
pub fn type_check(program: &Program, file: Rc<String>) -> Result<TypeMap, Error> {
    check_declarations(&program.decpart, &file)?;

    let type_map = TypeMap::typing(&program.decpart);

    let checker = TypeChecker::new(type_map, file);
    checker.check_statement(&program.body)?;

    let TypeChecker { type_map, .. } = checker;
    Ok(type_map)
}
