use ferrogo::{EvalError, RuntimeError, Value};

#[macro_use]
mod cases;

use cases::{typed, untyped_int};

// ======== Bitwise operators ========

test_case! {
    name: and,
    left: typed(Value::Uint8(0b1100)),
    op: "&",
    right: typed(Value::Uint8(0b1010)),
    value: { Ok(Value::Uint8(0b1000)) },
}

test_case! {
    name: or,
    left: typed(Value::Uint8(0b1100)),
    op: "|",
    right: typed(Value::Uint8(0b1010)),
    value: { Ok(Value::Uint8(0b1110)) },
}

test_case! {
    name: xor,
    left: typed(Value::Int16(-1)),
    op: "^",
    right: typed(Value::Int16(0x00ff)),
    value: { Ok(Value::Int16(-256)) },
}

test_case! {
    name: and_not,
    left: typed(Value::Uint32(0xffff_ffff)),
    op: "&^",
    right: untyped_int(0xff),
    value: { Ok(Value::Uint32(0xffff_ff00)) },
}

// ======== Shifts ========

test_case! {
    name: signed_right_shift_extends_sign,
    left: typed(Value::Int8(-8)),
    op: ">>",
    right: typed(Value::Uint(1)),
    value: { Ok(Value::Int8(-4)) },
}

test_case! {
    name: unsigned_right_shift_fills_zero,
    left: typed(Value::Uint8(248)),
    op: ">>",
    right: typed(Value::Uint(1)),
    value: { Ok(Value::Uint8(124)) },
}

test_case! {
    name: left_shift_by_untyped_count,
    left: typed(Value::Int32(3)),
    op: "<<",
    right: untyped_int(4),
    value: { Ok(Value::Int32(48)) },
}

test_case! {
    name: left_shift_by_typed_count,
    left: typed(Value::Int32(3)),
    op: "<<",
    right: typed(Value::Uint8(4)),
    value: { Ok(Value::Int32(48)) },
}

test_case! {
    name: left_shift_drops_high_bits,
    left: typed(Value::Uint8(0x81)),
    op: "<<",
    right: untyped_int(1),
    value: { Ok(Value::Uint8(0x02)) },
}

test_case! {
    name: left_shift_past_width,
    left: typed(Value::Int64(1)),
    op: "<<",
    right: untyped_int(64),
    value: { Ok(Value::Int64(0)) },
}

test_case! {
    name: signed_right_shift_past_width,
    left: typed(Value::Int32(-5)),
    op: ">>",
    right: typed(Value::Uint(100)),
    value: { Ok(Value::Int32(-1)) },
}

test_case! {
    name: unsigned_right_shift_past_width,
    left: typed(Value::Uint64(u64::MAX)),
    op: ">>",
    right: typed(Value::Uint(64)),
    value: { Ok(Value::Uint64(0)) },
}

test_case! {
    name: negative_typed_count,
    left: typed(Value::Int(1)),
    op: "<<",
    right: typed(Value::Int8(-1)),
    value: { Err(EvalError::Runtime(RuntimeError::NegativeShiftCount { count: -1 })) },
}
