//! Default typing of untyped constants.

use num_complex::Complex64;
use num_traits::ToPrimitive;
use tracing::warn;

use crate::{
    evaluator::{EvaluatorOptions, InternalError},
    types::{Kind, TypeDescriptor, TypeRegistry},
    values::{Constant, Object, Value},
};

/// Give an untyped constant its default type. Typed objects are returned
/// unchanged.
///
/// | untyped   | default      |
/// |-----------|--------------|
/// | bool      | `bool`       |
/// | int       | `int`        |
/// | rune      | `rune`       |
/// | float     | `float64`    |
/// | complex   | `complex128` |
/// | string    | `string`     |
///
/// Integer constants keep the low bits of their two's-complement value when
/// they do not fit in `int`. Untyped nil has no default type.
pub fn normalize<'t>(
    registry: &'t TypeRegistry<'t>,
    options: &EvaluatorOptions,
    obj: &Object<'t>,
) -> Result<Object<'t>, InternalError> {
    let TypeDescriptor::Basic(kind) = *obj.ty else {
        return Ok(obj.clone());
    };
    if !kind.is_untyped() {
        return Ok(obj.clone());
    }
    if kind == Kind::UntypedNil {
        return Err(InternalError::UntypedNil {
            context: "normalization",
        });
    }

    let constant = obj
        .value
        .as_constant()
        .ok_or_else(|| mismatch(kind, &obj.value))?;
    let bad = || mismatch(kind, &obj.value);

    let (value, default) = match kind {
        Kind::UntypedBool => (Value::Bool(constant.as_bool().ok_or_else(bad)?), Kind::Bool),
        Kind::UntypedInt => {
            let (low, fits) = constant.to_i64_truncating().ok_or_else(bad)?;
            let narrowed = options.word_size.narrow_signed(low);
            if (!fits || narrowed != low) && options.warn_on_constant_truncation {
                warn!(
                    constant = %constant,
                    value = narrowed,
                    word_bits = options.word_size.bits(),
                    "Untyped integer constant truncated to int"
                );
            }
            (Value::Int(narrowed), Kind::Int)
        }
        Kind::UntypedRune => {
            let (low, _) = constant.to_i64_truncating().ok_or_else(bad)?;
            (Value::Int32(low as i32), Kind::Rune)
        }
        Kind::UntypedFloat => (Value::Float64(constant.to_f64().ok_or_else(bad)?), Kind::Float64),
        Kind::UntypedComplex => {
            let (re, im) = constant.to_complex().ok_or_else(bad)?;
            (Value::Complex128(Complex64::new(re, im)), Kind::Complex128)
        }
        Kind::UntypedString => (
            Value::Str(constant.as_str().ok_or_else(bad)?.to_string()),
            Kind::String,
        ),
        _ => return Ok(obj.clone()),
    };

    Ok(Object::new(value, registry.basic(default)))
}

/// Give an untyped constant the type `ty` of the typed operand it is paired
/// with, converting from its exact value. Constants that are not assignable
/// to `ty`, and non-numeric targets, get their default type instead.
pub fn represent<'t>(
    registry: &'t TypeRegistry<'t>,
    options: &EvaluatorOptions,
    obj: &Object<'t>,
    ty: &'t TypeDescriptor<'t>,
) -> Result<Object<'t>, InternalError> {
    let TypeDescriptor::Basic(from) = *obj.ty else {
        return Ok(obj.clone());
    };
    if !from.is_untyped() || from == Kind::UntypedNil || !registry.assignable_to(obj.ty, ty) {
        return normalize(registry, options, obj);
    }

    let kind = registry.storage_kind(ty);
    let constant = obj
        .value
        .as_constant()
        .ok_or_else(|| mismatch(from, &obj.value))?;
    let bad = || InternalError::NotConvertible {
        from: obj.ty.to_string(),
        to: ty.to_string(),
    };

    let mut slot = registry.allocate_zero(kind)?;
    if kind.is_integer() {
        let (low, fits) = constant.to_i64_truncating().ok_or_else(bad)?;
        let fits = fits
            || (kind.is_unsigned() && constant.to_integer().and_then(|i| i.to_u64()).is_some());
        let bits = match kind {
            Kind::Int => options.word_size.narrow_signed(low) as u64,
            Kind::Uint | Kind::UintPtr => options.word_size.narrow_unsigned(low as u64),
            _ => low as u64,
        };
        if !fits && options.warn_on_constant_truncation {
            warn!(constant = %constant, ty = %ty, "Untyped integer constant truncated");
        }
        slot.set_bits(bits)?;
    } else if kind.is_float() {
        slot.set_float(constant.to_f64().ok_or_else(bad)?)?;
    } else if kind.is_complex() {
        let (re, im) = constant.to_complex().ok_or_else(bad)?;
        slot.set_complex(Complex64::new(re, im))?;
    } else {
        return normalize(registry, options, obj);
    }

    Ok(Object::new(slot, ty))
}

fn mismatch(kind: Kind, value: &Value) -> InternalError {
    InternalError::ConstantMismatch {
        kind,
        value: value.to_string(),
    }
}

/// Untyped constants with their exact value.
pub fn untyped<'t>(registry: &'t TypeRegistry<'t>, kind: Kind, constant: Constant) -> Object<'t> {
    Object::new(Value::Constant(constant), registry.basic(kind))
}
