//! Bitwise operators `& | ^ &^` and the shifts `<< >>`.

use crate::{
    evaluator::{
        EvalError, InternalError, OperatorClass, OperatorEngine, RuntimeError,
        word::{Word, with_word},
    },
    syntax::Token,
    values::Object,
};

impl<'t> OperatorEngine<'t> {
    pub fn and(&self, left: &Object<'t>, right: &Object<'t>) -> Result<Object<'t>, EvalError> {
        self.bitwise(Token::And, left, right)
    }

    pub fn or(&self, left: &Object<'t>, right: &Object<'t>) -> Result<Object<'t>, EvalError> {
        self.bitwise(Token::Or, left, right)
    }

    pub fn xor(&self, left: &Object<'t>, right: &Object<'t>) -> Result<Object<'t>, EvalError> {
        self.bitwise(Token::Xor, left, right)
    }

    /// Bit clear: `left & !right`.
    pub fn and_not(&self, left: &Object<'t>, right: &Object<'t>) -> Result<Object<'t>, EvalError> {
        self.bitwise(Token::AndNot, left, right)
    }

    /// Shift `left` by `count` bits. The result has the type of `left`;
    /// `count` may be any integer type or an untyped constant.
    pub fn shift_left(
        &self,
        left: &Object<'t>,
        count: &Object<'t>,
    ) -> Result<Object<'t>, EvalError> {
        self.shift(Token::Shl, left, count)
    }

    /// Arithmetic shift for signed types, logical for unsigned ones.
    pub fn shift_right(
        &self,
        left: &Object<'t>,
        count: &Object<'t>,
    ) -> Result<Object<'t>, EvalError> {
        self.shift(Token::Shr, left, count)
    }

    fn bitwise(
        &self,
        op: Token,
        left: &Object<'t>,
        right: &Object<'t>,
    ) -> Result<Object<'t>, EvalError> {
        let (left, right, kind) = self.operands(left, right)?;
        let invalid = || self.invalid_operands(op, &left, &right);

        let (Some(l), Some(r)) = (left.value.int_bits(), right.value.int_bits()) else {
            return Err(invalid().into());
        };
        let bits = with_word!(
            kind,
            self.options.word_size,
            |W| bitwise_word::<W>(op, l, r)?,
            else return Err(invalid().into())
        );

        let mut slot = self.registry.allocate_zero(kind)?;
        slot.set_bits(bits)?;
        Ok(Object::new(slot, left.ty))
    }

    fn shift(
        &self,
        op: Token,
        left: &Object<'t>,
        count: &Object<'t>,
    ) -> Result<Object<'t>, EvalError> {
        let left = self.normalize(left)?;
        let kind = self.registry.storage_kind(left.ty);
        let Some(bits) = left.value.int_bits() else {
            return Err(self.invalid_operands(op, &left, count).into());
        };
        let amount = self.shift_count(count)?;

        let bits = with_word!(
            kind,
            self.options.word_size,
            |W| {
                let x = W::from_bits(bits);
                let shifted = if op == Token::Shl { x.shl(amount) } else { x.shr(amount) };
                shifted.to_bits()
            },
            else return Err(self.invalid_operands(op, &left, count).into())
        );

        let mut slot = self.registry.allocate_zero(kind)?;
        slot.set_bits(bits)?;
        Ok(Object::new(slot, left.ty))
    }

    /// Extract a shift count without converting it to the shifted operand's
    /// type: typed counts are read from their value, untyped ones from the
    /// exact constant.
    fn shift_count(&self, count: &Object<'t>) -> Result<u64, EvalError> {
        let invalid = || InternalError::InvalidShiftCount {
            count: count.to_string(),
        };

        if count.is_untyped() {
            return count
                .value
                .as_constant()
                .and_then(|constant| constant.to_shift_count())
                .ok_or_else(|| invalid().into());
        }

        let kind = self.registry.storage_kind(count.ty);
        let bits = count
            .value
            .int_bits()
            .filter(|_| kind.is_integer())
            .ok_or_else(invalid)?;
        if kind.is_signed() && (bits as i64) < 0 {
            return Err(RuntimeError::NegativeShiftCount {
                count: bits as i64,
            }
            .into());
        }
        Ok(bits)
    }
}

fn bitwise_word<W: Word>(op: Token, l: u64, r: u64) -> Result<u64, EvalError> {
    let (l, r) = (W::from_bits(l), W::from_bits(r));
    let result = match op {
        Token::And => l.and(r),
        Token::Or => l.or(r),
        Token::Xor => l.xor(r),
        Token::AndNot => l.and_not(r),
        _ => {
            return Err(InternalError::UnsupportedOperator {
                op,
                class: OperatorClass::Binary,
            }
            .into());
        }
    };
    Ok(result.to_bits())
}
