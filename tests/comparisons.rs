use ferrogo::{Bump, DeclSite, EvalError, InternalError, Kind, Token, Value};

#[macro_use]
mod cases;

use cases::{Harness, nil, typed, untyped_int};

// ======== Ordered comparisons ========

test_case! {
    name: string_less,
    left: typed(Value::Str("abc".to_string())),
    op: "<",
    right: typed(Value::Str("abd".to_string())),
    value: { Ok(Value::Bool(true)) },
}

test_case! {
    name: string_prefix_is_less,
    left: typed(Value::Str("ab".to_string())),
    op: "<",
    right: typed(Value::Str("abc".to_string())),
    value: { Ok(Value::Bool(true)) },
}

test_case! {
    name: signed_order,
    left: typed(Value::Int16(-300)),
    op: "<=",
    right: typed(Value::Int16(2)),
    value: { Ok(Value::Bool(true)) },
}

test_case! {
    name: unsigned_order,
    left: typed(Value::Uint32(u32::MAX)),
    op: ">",
    right: typed(Value::Uint32(1)),
    value: { Ok(Value::Bool(true)) },
}

test_case! {
    name: float_order,
    left: typed(Value::Float64(2.5)),
    op: ">=",
    right: typed(Value::Float64(2.5)),
    value: { Ok(Value::Bool(true)) },
}

test_case! {
    name: nan_is_unordered,
    left: typed(Value::Float64(f64::NAN)),
    op: "<",
    right: typed(Value::Float64(0.0)),
    value: { Ok(Value::Bool(false)) },
}

test_case! {
    name: booleans_are_not_ordered,
    left: typed(Value::Bool(false)),
    op: "<",
    right: typed(Value::Bool(true)),
    value: {
        Err(EvalError::Internal(InternalError::InvalidOperands {
            op: Token::Lss,
            left: "bool".to_string(),
            right: "bool".to_string(),
        }))
    },
}

// ======== Equality ========

test_case! {
    name: untyped_constant_equals_int64,
    left: untyped_int(5),
    op: "==",
    right: typed(Value::Int64(5)),
    value: { Ok(Value::Bool(true)) },
}

test_case! {
    name: not_equal,
    left: typed(Value::Uint8(1)),
    op: "!=",
    right: typed(Value::Uint8(2)),
    value: { Ok(Value::Bool(true)) },
}

test_case! {
    name: nan_is_not_equal_to_itself,
    left: typed(Value::Float32(f32::NAN)),
    op: "==",
    right: typed(Value::Float32(f32::NAN)),
    value: { Ok(Value::Bool(false)) },
}

test_case! {
    name: nil_equals_nil,
    left: nil(),
    op: "==",
    right: nil(),
    value: { Ok(Value::Bool(true)) },
}

test_case! {
    name: nil_map_equals_nil,
    left: typed(Value::Reference { kind: Kind::Map, handle: None }),
    op: "==",
    right: nil(),
    value: { Ok(Value::Bool(true)) },
}

test_case! {
    name: string_compared_with_nil,
    left: typed(Value::Str(String::new())),
    op: "==",
    right: nil(),
    value: {
        Err(EvalError::Internal(InternalError::NotNillable {
            ty: "string".to_string(),
        }))
    },
}

// ======== Result typing ========

#[test]
fn named_boolean_result_keeps_its_type() {
    let arena = Bump::new();
    let harness = Harness::new(&arena);
    let registry = harness.registry;

    let ok_type = registry.named(
        "Ok",
        DeclSite {
            package: "status",
            offset: 12,
        },
        registry.bool(),
    );
    let left = harness.object(&typed(Value::Int32(4)));
    let right = harness.object(&typed(Value::Int32(4)));

    let result = harness
        .engine
        .evaluate_comparison(&left, &right, Token::Eql, ok_type)
        .unwrap();
    assert_eq!(result.value, Value::Bool(true));
    assert!(std::ptr::eq(result.ty, ok_type));
    assert_eq!(result.ty.to_string(), "status.Ok");
}

#[test]
fn named_boolean_operands_compare_equal() {
    let arena = Bump::new();
    let harness = Harness::new(&arena);
    let registry = harness.registry;

    let flag = registry.named(
        "Flag",
        DeclSite {
            package: "main",
            offset: 3,
        },
        registry.bool(),
    );
    let yes = registry.object(flag, Value::Bool(true)).unwrap();
    let result = harness
        .engine
        .evaluate_comparison(&yes, &yes, Token::Neq, registry.bool())
        .unwrap();
    assert_eq!(result.value, Value::Bool(false));
    assert!(std::ptr::eq(result.ty, registry.bool()));
}

test_case! {
    name: float64_less_than_untyped_int,
    left: typed(Value::Float64(1.5)),
    op: "<",
    right: untyped_int(2),
    value: { Ok(Value::Bool(true)) },
}

test_case! {
    name: untyped_int_equals_float64,
    left: untyped_int(2),
    op: "==",
    right: typed(Value::Float64(2.0)),
    value: { Ok(Value::Bool(true)) },
}
