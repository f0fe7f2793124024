//! Exact values of untyped constants.
//!
//! Untyped constants keep arbitrary precision until the normalizer narrows
//! them to a default type. Integers are `BigInt`, floats are exact
//! `BigRational`s and complex constants are a pair of rationals.

use core::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Bool(bool),
    Int(BigInt),
    Float(BigRational),
    Complex(BigRational, BigRational),
    Str(String),
    Nil,
}

impl Constant {
    pub fn int(value: i64) -> Self {
        Constant::Int(BigInt::from(value))
    }

    /// Exact rational `numer / denom`. Returns `None` for a zero denominator.
    pub fn ratio(numer: i64, denom: i64) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        Some(Constant::Float(BigRational::new(
            BigInt::from(numer),
            BigInt::from(denom),
        )))
    }

    /// Exact rational for a finite float. Returns `None` for NaN and infinities.
    pub fn float(value: f64) -> Option<Self> {
        BigRational::from_float(value).map(Constant::Float)
    }

    pub fn complex(re: f64, im: f64) -> Option<Self> {
        Some(Constant::Complex(
            BigRational::from_float(re)?,
            BigRational::from_float(im)?,
        ))
    }

    pub fn str(value: impl Into<String>) -> Self {
        Constant::Str(value.into())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Constant::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Constant::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer value of the constant, if it has one. Floats with a
    /// fractional part and complex numbers with an imaginary part do not.
    pub fn to_integer(&self) -> Option<BigInt> {
        match self {
            Constant::Int(i) => Some(i.clone()),
            Constant::Float(r) if r.is_integer() => Some(r.to_integer()),
            Constant::Complex(re, im) if im.is_zero() && re.is_integer() => Some(re.to_integer()),
            _ => None,
        }
    }

    /// Narrow to 64 bits by keeping the low 64 bits of the two's-complement
    /// representation. The flag is false when the value did not fit.
    pub fn to_i64_truncating(&self) -> Option<(i64, bool)> {
        let integer = self.to_integer()?;
        if let Some(exact) = integer.to_i64() {
            return Some((exact, true));
        }
        let low = (integer & BigInt::from(u64::MAX)).to_u64()?;
        Some((low as i64, false))
    }

    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Constant::Int(i) => Some(i.to_f64().unwrap_or(f64::INFINITY)),
            Constant::Float(r) => Some(rat_to_f64(r)),
            Constant::Complex(re, im) if im.is_zero() => Some(rat_to_f64(re)),
            _ => None,
        }
    }

    /// Real and imaginary parts.
    pub fn to_complex(&self) -> Option<(f64, f64)> {
        match self {
            Constant::Complex(re, im) => Some((rat_to_f64(re), rat_to_f64(im))),
            Constant::Int(_) | Constant::Float(_) => Some((self.to_f64()?, 0.0)),
            _ => None,
        }
    }

    /// A shift count. Counts past `u64::MAX` saturate; every such shift
    /// already empties the operand. Negative counts have no count.
    pub fn to_shift_count(&self) -> Option<u64> {
        let integer = self.to_integer()?;
        if integer.is_negative() {
            return None;
        }
        Some(integer.to_u64().unwrap_or(u64::MAX))
    }
}

fn rat_to_f64(x: &BigRational) -> f64 {
    if let Some(f) = x.to_f64() {
        return f;
    }
    let numer = x.numer().to_f64().unwrap_or(f64::INFINITY);
    let denom = x.denom().to_f64().unwrap_or(1.0);
    numer / denom
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Bool(b) => write!(f, "{}", b),
            Constant::Int(i) => write!(f, "{}", i),
            Constant::Float(r) => {
                if r.is_integer() {
                    write!(f, "{}", r.numer())
                } else {
                    write!(f, "{}", r)
                }
            }
            Constant::Complex(re, im) => write!(f, "({} + {}i)", re, im),
            Constant::Str(s) => write!(f, "{:?}", s),
            Constant::Nil => write!(f, "nil"),
        }
    }
}
