//! Unit tests for the abstract syntax model.
//!
//! Covers variable identity, literal values, operator classification and
//! specialization, and the canonical textual rendering.

use super::{
    ast::{Declaration, Declarations},
    expressions::{Expression, Operator, Value, Variable},
    statements::Statement,
    types::{Type, TypedOperator},
};

#[test]
fn test_variable_equality_ignores_index() {
    let bare = Variable::new("a");
    let indexed = Variable::indexed("a", Expression::Literal(Value::Int(Some(3))));

    assert_eq!(bare, indexed);
    assert_eq!(indexed.base(), bare);
}

#[test]
fn test_variable_equality_is_case_sensitive() {
    assert_ne!(Variable::new("x"), Variable::new("X"));
}

#[test]
fn test_variable_display() {
    let indexed = Variable::indexed("a", Expression::Literal(Value::Int(Some(3))));
    assert_eq!(indexed.to_string(), "a[3]");
    assert_eq!(Variable::new("x").to_string(), "x");
}

#[test]
fn test_value_types() {
    assert_eq!(Value::Int(Some(1)).type_of(), Type::Int);
    assert_eq!(Value::Bool(Some(true)).type_of(), Type::Bool);
    assert_eq!(Value::Char(Some('c')).type_of(), Type::Char);
    assert_eq!(Value::Float(Some(1.5)).type_of(), Type::Float);
}

#[test]
fn test_undefined_values() {
    let undef = Value::undef_of(&Type::Float);
    assert!(undef.is_undef());
    assert_eq!(undef.type_of(), Type::Float);
    assert_eq!(undef.to_string(), "undef");

    assert!(!Value::Int(Some(0)).is_undef());
}

#[test]
fn test_undef_of_array_uses_element_type() {
    let undef = Value::undef_of(&Type::array_of(Type::Char, 4));
    assert_eq!(undef.type_of(), Type::Char);
}

#[test]
fn test_type_base_comparison() {
    let array = Type::array_of(Type::Int, 10);
    assert!(array.same_base(&Type::Int));
    assert!(array.same_base(&Type::array_of(Type::Int, 3)));
    assert!(!array.same_base(&Type::Float));
    assert_eq!(array.to_string(), "int[10]");
}

#[test]
fn test_operator_classes_are_disjoint() {
    let all = [
        Operator::And,
        Operator::Or,
        Operator::Less,
        Operator::LessEqual,
        Operator::Equal,
        Operator::NotEqual,
        Operator::Greater,
        Operator::GreaterEqual,
        Operator::Plus,
        Operator::Minus,
        Operator::Times,
        Operator::Divide,
        Operator::Not,
        Operator::Negate,
        Operator::IntCast,
        Operator::FloatCast,
        Operator::CharCast,
    ];

    for op in all {
        let classes = [
            op.is_boolean_op(),
            op.is_relational_op(),
            op.is_arithmetic_op(),
            op.is_not_op() || op.is_negate_op(),
            op.is_cast_op(),
        ];
        assert_eq!(
            classes.iter().filter(|in_class| **in_class).count(),
            1,
            "operator {:?} must fall in exactly one class",
            op
        );
    }
}

#[test]
fn test_operator_specialization() {
    assert_eq!(
        Operator::Plus.specialize(&Type::Int),
        Some(TypedOperator::IntPlus)
    );
    assert_eq!(
        Operator::Plus.specialize(&Type::Float),
        Some(TypedOperator::FloatPlus)
    );
    assert_eq!(
        Operator::Equal.specialize(&Type::Bool),
        Some(TypedOperator::BoolEq)
    );
    assert_eq!(
        Operator::IntCast.specialize(&Type::Char),
        Some(TypedOperator::CharToInt)
    );
    assert_eq!(
        Operator::FloatCast.specialize(&Type::Int),
        Some(TypedOperator::IntToFloat)
    );

    // No arithmetic on bool or char, no float-to-char cast.
    assert_eq!(Operator::Plus.specialize(&Type::Bool), None);
    assert_eq!(Operator::Plus.specialize(&Type::Char), None);
    assert_eq!(Operator::CharCast.specialize(&Type::Float), None);
}

#[test]
fn test_operator_specialization_strips_arrays() {
    assert_eq!(
        Operator::Plus.specialize(&Type::array_of(Type::Int, 5)),
        Some(TypedOperator::IntPlus)
    );
}

#[test]
fn test_binary_expression_display() {
    let expr = Expression::binary(
        Operator::Plus,
        Expression::Variable(Variable::new("x")),
        Expression::Literal(Value::Int(Some(1))),
    );

    assert_eq!(expr.to_string(), "(x + 1)");
}

#[test]
fn test_unary_expression_display() {
    let not = Expression::unary(Operator::Not, Expression::Variable(Variable::new("b")));
    assert_eq!(not.to_string(), "!b");

    let cast = Expression::unary(Operator::IntCast, Expression::Variable(Variable::new("c")));
    assert_eq!(cast.to_string(), "int(c)");
}

#[test]
fn test_declaration_display() {
    let plain = Declaration {
        variable: Variable::new("x"),
        ty: Type::Int,
    };
    assert_eq!(plain.to_string(), "int x;");

    let array = Declaration {
        variable: Variable::new("a"),
        ty: Type::array_of(Type::Float, 8),
    };
    assert_eq!(array.to_string(), "float a[8];");
}

#[test]
fn test_declarations_preserve_order() {
    let mut declarations = Declarations::new();
    declarations.add(Declaration {
        variable: Variable::new("x"),
        ty: Type::Int,
    });
    declarations.add(Declaration {
        variable: Variable::new("y"),
        ty: Type::Bool,
    });

    assert_eq!(declarations.len(), 2);
    assert_eq!(declarations.get(0).unwrap().variable.id, "x");
    assert_eq!(declarations.get(1).unwrap().variable.id, "y");
}

#[test]
fn test_statement_display() {
    let assignment = Statement::Assignment {
        target: Variable::new("x"),
        source: Expression::Literal(Value::Int(Some(3))),
    };
    assert_eq!(assignment.to_string(), "x = 3;");

    assert_eq!(Statement::Skip.to_string(), ";");
    assert_eq!(
        Statement::Print(Expression::Variable(Variable::new("x"))).to_string(),
        "print(x);"
    );
    assert_eq!(Statement::Scan(Variable::new("x")).to_string(), "scan(x);");
}

#[test]
fn test_block_display_is_brace_delimited() {
    let block = Statement::Block(vec![
        Statement::Assignment {
            target: Variable::new("x"),
            source: Expression::Literal(Value::Int(Some(1))),
        },
        Statement::Skip,
    ]);

    assert_eq!(block.to_string(), "{\nx = 1;\n;\n}");
}
