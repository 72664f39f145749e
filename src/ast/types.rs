use std::fmt::Display;

/// Declared type of a Clite variable.
///
/// An array type carries its element type and the fixed size recorded at
/// declaration time. The size takes no part in type comparisons, only the
/// element type does (see [`Type::same_base`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Int,
    Bool,
    Char,
    Float,
    Array { element: Box<Type>, size: usize },
}

impl Type {
    pub fn array_of(element: Type, size: usize) -> Type {
        Type::Array {
            element: Box::new(element),
            size,
        }
    }

    /// The element type of an array, or the type itself otherwise.
    pub fn base(&self) -> &Type {
        match self {
            Type::Array { element, .. } => element,
            other => other,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array { .. })
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    /// Equality with any array-ness stripped from both sides first.
    ///
    /// `int[10]`, `int[3]` and `int` all compare equal under this rule.
    pub fn same_base(&self, other: &Type) -> bool {
        self.base() == other.base()
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Bool => write!(f, "bool"),
            Type::Char => write!(f, "char"),
            Type::Float => write!(f, "float"),
            Type::Array { element, size } => write!(f, "{}[{}]", element, size),
        }
    }
}

/// Type-tagged operator codes for a later code-generation stage.
///
/// The static checker never produces these; it only guarantees that
/// [`crate::ast::expressions::Operator::specialize`] has a defined answer
/// for every operator/operand pair it lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedOperator {
    IntPlus,
    IntMinus,
    IntTimes,
    IntDiv,
    IntEq,
    IntNe,
    IntLt,
    IntLe,
    IntGt,
    IntGe,
    IntNeg,

    FloatPlus,
    FloatMinus,
    FloatTimes,
    FloatDiv,
    FloatEq,
    FloatNe,
    FloatLt,
    FloatLe,
    FloatGt,
    FloatGe,
    FloatNeg,

    CharEq,
    CharNe,
    CharLt,
    CharLe,
    CharGt,
    CharGe,

    BoolEq,
    BoolNe,
    BoolLt,
    BoolLe,
    BoolGt,
    BoolGe,

    IntToFloat,
    FloatToInt,
    CharToInt,
    IntToChar,
}

impl Display for TypedOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            TypedOperator::IntPlus => "INT+",
            TypedOperator::IntMinus => "INT-",
            TypedOperator::IntTimes => "INT*",
            TypedOperator::IntDiv => "INT/",
            TypedOperator::IntEq => "INT==",
            TypedOperator::IntNe => "INT!=",
            TypedOperator::IntLt => "INT<",
            TypedOperator::IntLe => "INT<=",
            TypedOperator::IntGt => "INT>",
            TypedOperator::IntGe => "INT>=",
            TypedOperator::IntNeg => "INT-",
            TypedOperator::FloatPlus => "FLOAT+",
            TypedOperator::FloatMinus => "FLOAT-",
            TypedOperator::FloatTimes => "FLOAT*",
            TypedOperator::FloatDiv => "FLOAT/",
            TypedOperator::FloatEq => "FLOAT==",
            TypedOperator::FloatNe => "FLOAT!=",
            TypedOperator::FloatLt => "FLOAT<",
            TypedOperator::FloatLe => "FLOAT<=",
            TypedOperator::FloatGt => "FLOAT>",
            TypedOperator::FloatGe => "FLOAT>=",
            TypedOperator::FloatNeg => "FLOAT-",
            TypedOperator::CharEq => "CHAR==",
            TypedOperator::CharNe => "CHAR!=",
            TypedOperator::CharLt => "CHAR<",
            TypedOperator::CharLe => "CHAR<=",
            TypedOperator::CharGt => "CHAR>",
            TypedOperator::CharGe => "CHAR>=",
            TypedOperator::BoolEq => "BOOL==",
            TypedOperator::BoolNe => "BOOL!=",
            TypedOperator::BoolLt => "BOOL<",
            TypedOperator::BoolLe => "BOOL<=",
            TypedOperator::BoolGt => "BOOL>",
            TypedOperator::BoolGe => "BOOL>=",
            TypedOperator::IntToFloat => "I2F",
            TypedOperator::FloatToInt => "F2I",
            TypedOperator::CharToInt => "C2I",
            TypedOperator::IntToChar => "I2C",
        };
        write!(f, "{}", text)
    }
}
