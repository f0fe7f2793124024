//! Arithmetic operators: `+ - * / %`.

use num_complex::{Complex, Complex64};
use num_traits::Float;

use crate::{
    evaluator::{
        EvalError, InternalError, OperatorClass, OperatorEngine, RuntimeError,
        word::{Word, with_word},
    },
    syntax::Token,
    types::Kind,
    values::Object,
};

impl<'t> OperatorEngine<'t> {
    pub fn add(&self, left: &Object<'t>, right: &Object<'t>) -> Result<Object<'t>, EvalError> {
        self.arithmetic(Token::Add, left, right)
    }

    pub fn subtract(&self, left: &Object<'t>, right: &Object<'t>) -> Result<Object<'t>, EvalError> {
        self.arithmetic(Token::Sub, left, right)
    }

    pub fn multiply(&self, left: &Object<'t>, right: &Object<'t>) -> Result<Object<'t>, EvalError> {
        self.arithmetic(Token::Mul, left, right)
    }

    /// Integer division truncates toward zero. A zero integer divisor is a
    /// [`RuntimeError::DivisionByZero`]; float and complex division follow
    /// IEEE 754.
    pub fn quotient(&self, left: &Object<'t>, right: &Object<'t>) -> Result<Object<'t>, EvalError> {
        self.arithmetic(Token::Quo, left, right)
    }

    /// Integer remainder, with the sign of the dividend.
    pub fn remainder(
        &self,
        left: &Object<'t>,
        right: &Object<'t>,
    ) -> Result<Object<'t>, EvalError> {
        self.arithmetic(Token::Rem, left, right)
    }

    fn arithmetic(
        &self,
        op: Token,
        left: &Object<'t>,
        right: &Object<'t>,
    ) -> Result<Object<'t>, EvalError> {
        let (left, right, kind) = self.operands(left, right)?;
        let invalid = || self.invalid_operands(op, &left, &right);
        let mut slot = self.registry.allocate_zero(kind)?;

        if kind.is_integer() {
            let (Some(l), Some(r)) = (left.value.int_bits(), right.value.int_bits()) else {
                return Err(invalid().into());
            };
            let bits = with_word!(
                kind,
                self.options.word_size,
                |W| integer_arithmetic::<W>(op, l, r)?,
                else return Err(invalid().into())
            );
            slot.set_bits(bits)?;
        } else if kind.is_float() {
            let (Some(l), Some(r)) = (left.value.as_f64(), right.value.as_f64()) else {
                return Err(invalid().into());
            };
            let result = if kind == Kind::Float32 {
                float_arithmetic(op, l as f32, r as f32).map(f64::from)
            } else {
                float_arithmetic(op, l, r)
            };
            slot.set_float(result.ok_or_else(invalid)?)?;
        } else if kind.is_complex() {
            let (Some(l), Some(r)) = (left.value.as_complex(), right.value.as_complex()) else {
                return Err(invalid().into());
            };
            let result = if kind == Kind::Complex64 {
                complex_arithmetic(op, narrow(l), narrow(r)).map(widen)
            } else {
                complex_arithmetic(op, l, r)
            };
            slot.set_complex(result.ok_or_else(invalid)?)?;
        } else if kind == Kind::String && op == Token::Add {
            let (Some(l), Some(r)) = (left.value.as_str(), right.value.as_str()) else {
                return Err(invalid().into());
            };
            slot.set_str([l, r].concat())?;
        } else {
            return Err(invalid().into());
        }

        Ok(Object::new(slot, left.ty))
    }
}

fn integer_arithmetic<W: Word>(op: Token, l: u64, r: u64) -> Result<u64, EvalError> {
    let (l, r) = (W::from_bits(l), W::from_bits(r));
    let result = match op {
        Token::Add => l.add(r),
        Token::Sub => l.sub(r),
        Token::Mul => l.mul(r),
        Token::Quo | Token::Rem if r.is_zero() => {
            return Err(RuntimeError::DivisionByZero { op }.into());
        }
        Token::Quo => l.div(r),
        Token::Rem => l.rem(r),
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

/// `None` for operators floats do not support.
fn float_arithmetic<F: Float>(op: Token, l: F, r: F) -> Option<F> {
    match op {
        Token::Add => Some(l + r),
        Token::Sub => Some(l - r),
        Token::Mul => Some(l * r),
        Token::Quo => Some(l / r),
        _ => None,
    }
}

fn complex_arithmetic<F: Float>(op: Token, l: Complex<F>, r: Complex<F>) -> Option<Complex<F>> {
    match op {
        Token::Add => Some(l + r),
        Token::Sub => Some(l - r),
        Token::Mul => Some(l * r),
        Token::Quo => Some(l / r),
        _ => None,
    }
}

fn narrow(c: Complex64) -> Complex<f32> {
    Complex::new(c.re as f32, c.im as f32)
}

fn widen(c: Complex<f32>) -> Complex64 {
    Complex::new(c.re as f64, c.im as f64)
}
