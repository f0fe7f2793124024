use ferrogo::{EvalError, InternalError, RuntimeError, Token, Value};

#[macro_use]
mod cases;

use cases::{nil, typed, untyped_int, untyped_ratio};

// ======== Integer arithmetic ========

test_case! {
    name: int8_addition_wraps,
    left: typed(Value::Int8(120)),
    op: "+",
    right: typed(Value::Int8(10)),
    value: { Ok(Value::Int8(-126)) },
}

test_case! {
    name: uint8_subtraction_wraps,
    left: typed(Value::Uint8(3)),
    op: "-",
    right: typed(Value::Uint8(5)),
    value: { Ok(Value::Uint8(254)) },
}

test_case! {
    name: int32_multiplication_wraps,
    left: typed(Value::Int32(0x4000_0000)),
    op: "*",
    right: typed(Value::Int32(4)),
    value: { Ok(Value::Int32(0)) },
}

test_case! {
    name: int_quotient_truncates,
    left: typed(Value::Int(7)),
    op: "/",
    right: typed(Value::Int(2)),
    value: { Ok(Value::Int(3)) },
}

test_case! {
    name: int_remainder,
    left: typed(Value::Int(7)),
    op: "%",
    right: typed(Value::Int(2)),
    value: { Ok(Value::Int(1)) },
}

test_case! {
    name: negative_remainder_follows_dividend,
    left: typed(Value::Int64(-7)),
    op: "%",
    right: typed(Value::Int64(3)),
    value: { Ok(Value::Int64(-1)) },
}

test_case! {
    name: min_quotient_minus_one_wraps,
    left: typed(Value::Int8(i8::MIN)),
    op: "/",
    right: typed(Value::Int8(-1)),
    value: { Ok(Value::Int8(i8::MIN)) },
}

test_case! {
    name: untyped_constant_takes_left_type,
    left: typed(Value::Uint16(65535)),
    op: "+",
    right: untyped_int(2),
    value: { Ok(Value::Uint16(1)) },
}

test_case! {
    name: untyped_constant_on_the_left,
    left: untyped_int(40),
    op: "+",
    right: typed(Value::Int(2)),
    value: { Ok(Value::Int(42)) },
}

// ======== Division by zero ========

test_case! {
    name: int_quotient_by_zero,
    left: typed(Value::Int(1)),
    op: "/",
    right: typed(Value::Int(0)),
    value: { Err(EvalError::Runtime(RuntimeError::DivisionByZero { op: Token::Quo })) },
}

test_case! {
    name: uint8_remainder_by_zero,
    left: typed(Value::Uint8(9)),
    op: "%",
    right: typed(Value::Uint8(0)),
    value: { Err(EvalError::Runtime(RuntimeError::DivisionByZero { op: Token::Rem })) },
}

test_case! {
    name: float_quotient_by_zero_is_infinite,
    left: typed(Value::Float64(-1.0)),
    op: "/",
    right: typed(Value::Float64(0.0)),
    value: { Ok(Value::Float64(f64::NEG_INFINITY)) },
}

// ======== Floats and strings ========

test_case! {
    name: float64_addition,
    left: typed(Value::Float64(0.5)),
    op: "+",
    right: typed(Value::Float64(0.25)),
    value: { Ok(Value::Float64(0.75)) },
}

test_case! {
    name: float32_rounds_at_its_width,
    left: typed(Value::Float32(16_777_216.0)),
    op: "+",
    right: typed(Value::Float32(1.0)),
    value: { Ok(Value::Float32(16_777_216.0)) },
}

test_case! {
    name: string_concatenation,
    left: typed(Value::Str("go".to_string())),
    op: "+",
    right: typed(Value::Str("pher".to_string())),
    value: { Ok(Value::Str("gopher".to_string())) },
}

// ======== Internal faults ========

test_case! {
    name: string_subtraction_is_internal,
    left: typed(Value::Str("a".to_string())),
    op: "-",
    right: typed(Value::Str("b".to_string())),
    value: {
        Err(EvalError::Internal(InternalError::InvalidOperands {
            op: Token::Sub,
            left: "string".to_string(),
            right: "string".to_string(),
        }))
    },
}

test_case! {
    name: float_remainder_is_internal,
    left: typed(Value::Float64(5.0)),
    op: "%",
    right: typed(Value::Float64(2.0)),
    value: {
        Err(EvalError::Internal(InternalError::InvalidOperands {
            op: Token::Rem,
            left: "float64".to_string(),
            right: "float64".to_string(),
        }))
    },
}

test_case! {
    name: untyped_nil_operand_is_internal,
    left: typed(Value::Int(1)),
    op: "+",
    right: nil(),
    value: { Err(EvalError::Internal(InternalError::UntypedNil { context: "normalization" })) },
}

// ======== Untyped constants meeting typed operands ========

test_case! {
    name: float64_plus_untyped_int,
    left: typed(Value::Float64(1.5)),
    op: "+",
    right: untyped_int(2),
    value: { Ok(Value::Float64(3.5)) },
}

test_case! {
    name: untyped_int_times_float64,
    left: untyped_int(2),
    op: "*",
    right: typed(Value::Float64(1.25)),
    value: { Ok(Value::Float64(2.5)) },
}

test_case! {
    name: complex128_plus_untyped_float,
    left: typed(Value::Complex128(num_complex::Complex64::new(1.0, 2.0))),
    op: "+",
    right: untyped_ratio(3, 2),
    value: { Ok(Value::Complex128(num_complex::Complex64::new(2.5, 2.0))) },
}

test_case! {
    name: int8_plus_integral_untyped_float,
    left: typed(Value::Int8(3)),
    op: "+",
    right: untyped_ratio(4, 2),
    value: { Ok(Value::Int8(5)) },
}

test_case! {
    name: float32_quotient_by_untyped_int,
    left: typed(Value::Float32(1.0)),
    op: "/",
    right: untyped_int(4),
    value: { Ok(Value::Float32(0.25)) },
}
