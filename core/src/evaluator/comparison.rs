//! Comparison operators `< > <= >= == !=`.
//!
//! Comparisons are typed by the caller: the result carries whatever boolean
//! type the comparison expression has in its context, which may be a named
//! type over `bool`.

use tracing::debug;

use crate::{
    evaluator::{
        EvalError, InternalError, OperatorClass, OperatorEngine,
        word::{Word, with_word},
    },
    syntax::Token,
    types::{Kind, TypeDescriptor},
    values::{Object, Value},
};

impl<'t> OperatorEngine<'t> {
    pub fn less(
        &self,
        left: &Object<'t>,
        right: &Object<'t>,
        result_ty: &'t TypeDescriptor<'t>,
    ) -> Result<Object<'t>, EvalError> {
        let result = self.ordered(Token::Lss, left, right)?;
        self.boolean_result(result, result_ty)
    }

    pub fn greater(
        &self,
        left: &Object<'t>,
        right: &Object<'t>,
        result_ty: &'t TypeDescriptor<'t>,
    ) -> Result<Object<'t>, EvalError> {
        let result = self.ordered(Token::Gtr, left, right)?;
        self.boolean_result(result, result_ty)
    }

    pub fn less_equal(
        &self,
        left: &Object<'t>,
        right: &Object<'t>,
        result_ty: &'t TypeDescriptor<'t>,
    ) -> Result<Object<'t>, EvalError> {
        let result = self.ordered(Token::Leq, left, right)?;
        self.boolean_result(result, result_ty)
    }

    pub fn greater_equal(
        &self,
        left: &Object<'t>,
        right: &Object<'t>,
        result_ty: &'t TypeDescriptor<'t>,
    ) -> Result<Object<'t>, EvalError> {
        let result = self.ordered(Token::Geq, left, right)?;
        self.boolean_result(result, result_ty)
    }

    /// Equality. Either operand may be untyped nil, in which case the other
    /// one is tested for its nil state.
    pub fn equal(
        &self,
        left: &Object<'t>,
        right: &Object<'t>,
        result_ty: &'t TypeDescriptor<'t>,
    ) -> Result<Object<'t>, EvalError> {
        let result = self.equality(left, right)?;
        self.boolean_result(result, result_ty)
    }

    pub fn not_equal(
        &self,
        left: &Object<'t>,
        right: &Object<'t>,
        result_ty: &'t TypeDescriptor<'t>,
    ) -> Result<Object<'t>, EvalError> {
        let result = !self.equality(left, right)?;
        self.boolean_result(result, result_ty)
    }

    fn ordered(&self, op: Token, left: &Object<'t>, right: &Object<'t>) -> Result<bool, EvalError> {
        let (left, right, kind) = self.operands(left, right)?;
        let invalid = || self.invalid_operands(op, &left, &right);

        let result = if kind.is_integer() {
            let (Some(l), Some(r)) = (left.value.int_bits(), right.value.int_bits()) else {
                return Err(invalid().into());
            };
            with_word!(
                kind,
                self.options.word_size,
                |W| compare(op, W::from_bits(l), W::from_bits(r)),
                else None
            )
        } else if kind.is_float() {
            let (Some(l), Some(r)) = (left.value.as_f64(), right.value.as_f64()) else {
                return Err(invalid().into());
            };
            if kind == Kind::Float32 {
                compare(op, l as f32, r as f32)
            } else {
                compare(op, l, r)
            }
        } else if kind == Kind::String {
            let (Some(l), Some(r)) = (left.value.as_str(), right.value.as_str()) else {
                return Err(invalid().into());
            };
            compare(op, l.as_bytes(), r.as_bytes())
        } else {
            return Err(invalid().into());
        };

        result.ok_or_else(|| {
            InternalError::UnsupportedOperator {
                op,
                class: OperatorClass::Comparison,
            }
            .into()
        })
    }

    fn equality(&self, left: &Object<'t>, right: &Object<'t>) -> Result<bool, EvalError> {
        match (left.is_untyped_nil(), right.is_untyped_nil()) {
            (true, true) => return Ok(true),
            (true, false) => return self.is_nil(right),
            (false, true) => return self.is_nil(left),
            (false, false) => {}
        }

        let (left, right, _) = self.operands(left, right)?;
        if self.registry.identical(left.ty, right.ty) {
            return Ok(left.value == right.value);
        }

        // Mixed types: convert one side to the other's representation, left
        // first when it may be assigned to the right.
        let (from, to) = if self.registry.assignable_to(left.ty, right.ty) {
            (&left, &right)
        } else {
            (&right, &left)
        };
        debug!(from = %from.ty, to = %to.ty, "Converting operand for equality");

        let kind = self.registry.storage_kind(to.ty);
        let converted = from
            .value
            .convert(kind, self.options.word_size)
            .ok_or_else(|| InternalError::NotConvertible {
                from: from.ty.to_string(),
                to: to.ty.to_string(),
            })?;
        Ok(converted == to.value)
    }

    fn is_nil(&self, obj: &Object<'t>) -> Result<bool, EvalError> {
        let obj = self.normalize(obj)?;
        obj.value.is_nil().ok_or_else(|| {
            InternalError::NotNillable {
                ty: obj.ty.to_string(),
            }
            .into()
        })
    }

    /// Materialize a comparison result at `result_ty`. Named boolean types
    /// get a fresh slot so the result keeps their identity; `bool` and
    /// untyped bool give a plain `bool`.
    fn boolean_result(
        &self,
        result: bool,
        result_ty: &'t TypeDescriptor<'t>,
    ) -> Result<Object<'t>, EvalError> {
        let kind = self.registry.storage_kind(result_ty);
        match result_ty {
            TypeDescriptor::Named { .. } if kind == Kind::Bool => {
                let mut slot = self.registry.allocate_zero(kind)?;
                slot.set_bool(result)?;
                Ok(Object::new(slot, result_ty))
            }
            TypeDescriptor::Basic(Kind::Bool | Kind::UntypedBool) => {
                Ok(Object::new(Value::Bool(result), self.registry.bool()))
            }
            _ => Err(InternalError::NonBooleanResult {
                ty: result_ty.to_string(),
            }
            .into()),
        }
    }
}

/// `None` for tokens that are not ordered comparisons.
fn compare<T: PartialOrd>(op: Token, l: T, r: T) -> Option<bool> {
    match op {
        Token::Lss => Some(l < r),
        Token::Gtr => Some(l > r),
        Token::Leq => Some(l <= r),
        Token::Geq => Some(l >= r),
        _ => None,
    }
}
