use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

use super::types::{Type, TypedOperator};

/// A variable reference, possibly denoting an array element.
///
/// The index is a structured sub-expression, never part of the identifier
/// text. Equality and hashing use the identifier only, case-sensitively,
/// so an indexed reference and its bare base compare equal — the type map
/// is keyed on the base identifier.
#[derive(Debug, Clone)]
pub struct Variable {
    pub id: String,
    pub index: Option<Box<Expression>>,
}

impl Variable {
    pub fn new(id: impl Into<String>) -> Self {
        Variable {
            id: id.into(),
            index: None,
        }
    }

    pub fn indexed(id: impl Into<String>, index: Expression) -> Self {
        Variable {
            id: id.into(),
            index: Some(Box::new(index)),
        }
    }

    /// The reference with any index annotation dropped.
    pub fn base(&self) -> Variable {
        Variable::new(self.id.clone())
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.index {
            Some(index) => write!(f, "{}[{}]", self.id, index),
            None => write!(f, "{}", self.id),
        }
    }
}

/// A literal value of one of the four base types.
///
/// `None` marks a structurally present but undefined payload, as produced
/// by `Value::undef_of` for a freshly declared variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(Option<i32>),
    Bool(Option<bool>),
    Char(Option<char>),
    Float(Option<f64>),
}

impl Value {
    pub fn type_of(&self) -> Type {
        match self {
            Value::Int(_) => Type::Int,
            Value::Bool(_) => Type::Bool,
            Value::Char(_) => Type::Char,
            Value::Float(_) => Type::Float,
        }
    }

    pub fn is_undef(&self) -> bool {
        match self {
            Value::Int(v) => v.is_none(),
            Value::Bool(v) => v.is_none(),
            Value::Char(v) => v.is_none(),
            Value::Float(v) => v.is_none(),
        }
    }

    /// An undefined value of the given declared type (array types yield an
    /// undefined value of their element type).
    pub fn undef_of(ty: &Type) -> Value {
        match ty.base() {
            Type::Int => Value::Int(None),
            Type::Bool => Value::Bool(None),
            Type::Char => Value::Char(None),
            Type::Float => Value::Float(None),
            Type::Array { .. } => unreachable!("base() never returns an array"),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_undef() {
            return write!(f, "undef");
        }

        match self {
            Value::Int(v) => write!(f, "{}", v.unwrap()),
            Value::Bool(v) => write!(f, "{}", v.unwrap()),
            Value::Char(v) => write!(f, "{}", v.unwrap()),
            Value::Float(v) => write!(f, "{}", v.unwrap()),
        }
    }
}

/// Syntactic operator codes, in four disjoint classes plus the casts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    // BooleanOp
    And,
    Or,
    // RelationalOp
    Less,
    LessEqual,
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    // ArithmeticOp
    Plus,
    Minus,
    Times,
    Divide,
    // UnaryOp
    Not,
    Negate,
    // CastOp, named after the target type
    IntCast,
    FloatCast,
    CharCast,
}

impl Operator {
    pub fn is_boolean_op(&self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    pub fn is_relational_op(&self) -> bool {
        matches!(
            self,
            Operator::Less
                | Operator::LessEqual
                | Operator::Equal
                | Operator::NotEqual
                | Operator::Greater
                | Operator::GreaterEqual
        )
    }

    pub fn is_arithmetic_op(&self) -> bool {
        matches!(
            self,
            Operator::Plus | Operator::Minus | Operator::Times | Operator::Divide
        )
    }

    pub fn is_not_op(&self) -> bool {
        matches!(self, Operator::Not)
    }

    pub fn is_negate_op(&self) -> bool {
        matches!(self, Operator::Negate)
    }

    pub fn is_cast_op(&self) -> bool {
        matches!(
            self,
            Operator::IntCast | Operator::FloatCast | Operator::CharCast
        )
    }

    /// Specializes this syntactic operator for an operand type, yielding
    /// the type-tagged code a code generator would consume.
    ///
    /// Returns `None` for pairs no well-typed program produces (for
    /// example `bool +` or a cast the language does not define).
    pub fn specialize(&self, operand: &Type) -> Option<TypedOperator> {
        match operand.base() {
            Type::Int => match self {
                Operator::Plus => Some(TypedOperator::IntPlus),
                Operator::Minus => Some(TypedOperator::IntMinus),
                Operator::Times => Some(TypedOperator::IntTimes),
                Operator::Divide => Some(TypedOperator::IntDiv),
                Operator::Equal => Some(TypedOperator::IntEq),
                Operator::NotEqual => Some(TypedOperator::IntNe),
                Operator::Less => Some(TypedOperator::IntLt),
                Operator::LessEqual => Some(TypedOperator::IntLe),
                Operator::Greater => Some(TypedOperator::IntGt),
                Operator::GreaterEqual => Some(TypedOperator::IntGe),
                Operator::Negate => Some(TypedOperator::IntNeg),
                Operator::FloatCast => Some(TypedOperator::IntToFloat),
                Operator::CharCast => Some(TypedOperator::IntToChar),
                _ => None,
            },
            Type::Float => match self {
                Operator::Plus => Some(TypedOperator::FloatPlus),
                Operator::Minus => Some(TypedOperator::FloatMinus),
                Operator::Times => Some(TypedOperator::FloatTimes),
                Operator::Divide => Some(TypedOperator::FloatDiv),
                Operator::Equal => Some(TypedOperator::FloatEq),
                Operator::NotEqual => Some(TypedOperator::FloatNe),
                Operator::Less => Some(TypedOperator::FloatLt),
                Operator::LessEqual => Some(TypedOperator::FloatLe),
                Operator::Greater => Some(TypedOperator::FloatGt),
                Operator::GreaterEqual => Some(TypedOperator::FloatGe),
                Operator::Negate => Some(TypedOperator::FloatNeg),
                Operator::IntCast => Some(TypedOperator::FloatToInt),
                _ => None,
            },
            Type::Char => match self {
                Operator::Equal => Some(TypedOperator::CharEq),
                Operator::NotEqual => Some(TypedOperator::CharNe),
                Operator::Less => Some(TypedOperator::CharLt),
                Operator::LessEqual => Some(TypedOperator::CharLe),
                Operator::Greater => Some(TypedOperator::CharGt),
                Operator::GreaterEqual => Some(TypedOperator::CharGe),
                Operator::IntCast => Some(TypedOperator::CharToInt),
                _ => None,
            },
            Type::Bool => match self {
                Operator::Equal => Some(TypedOperator::BoolEq),
                Operator::NotEqual => Some(TypedOperator::BoolNe),
                Operator::Less => Some(TypedOperator::BoolLt),
                Operator::LessEqual => Some(TypedOperator::BoolLe),
                Operator::Greater => Some(TypedOperator::BoolGt),
                Operator::GreaterEqual => Some(TypedOperator::BoolGe),
                _ => None,
            },
            Type::Array { .. } => None,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::Greater => ">",
            Operator::GreaterEqual => ">=",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Times => "*",
            Operator::Divide => "/",
            Operator::Not => "!",
            Operator::Negate => "-",
            Operator::IntCast => "int",
            Operator::FloatCast => "float",
            Operator::CharCast => "char",
        };
        write!(f, "{}", text)
    }
}

/// Expression variants. The tree is built once by the parser and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Variable(Variable),
    Literal(Value),
    Binary {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Unary {
        op: Operator,
        term: Box<Expression>,
    },
}

impl Expression {
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Expression {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: Operator, term: Expression) -> Expression {
        Expression::Unary {
            op,
            term: Box::new(term),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Variable(variable) => write!(f, "{}", variable),
            Expression::Literal(value) => write!(f, "{}", value),
            Expression::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op, right)
            }
            Expression::Unary { op, term } => {
                if op.is_cast_op() {
                    write!(f, "{}({})", op, term)
                } else {
                    write!(f, "{}{}", op, term)
                }
            }
        }
    }
}
