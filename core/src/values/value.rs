use core::fmt;

use num_complex::{Complex32, Complex64};

use crate::{
    evaluator::InternalError,
    types::{Kind, WordSize},
    values::constant::Constant,
};

/// An opaque handle to the referent of a pointer, slice, map, channel,
/// function or interface value. The engine only ever compares handles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Handle(pub u64);

/// A runtime value in exactly one storage representation.
///
/// Typed values match a [`Kind`] one to one. `Constant` holds the exact form
/// of an untyped constant and never survives normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    /// Machine-word signed integer, already narrowed to the word size.
    Int(i64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    /// Machine-word unsigned integer, already narrowed to the word size.
    Uint(u64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    UintPtr(u64),
    Float32(f32),
    Float64(f64),
    Complex64(Complex32),
    Complex128(Complex64),
    Str(String),
    /// A reference-kind value; `handle: None` is nil.
    Reference { kind: Kind, handle: Option<Handle> },
    Constant(Constant),
}

impl Value {
    /// The zero value stored by `kind`, or `None` for kinds without storage
    /// of their own (untyped kinds; `Rune` is stored as `Int32`).
    pub fn zero(kind: Kind) -> Option<Self> {
        let value = match kind {
            Kind::Bool => Value::Bool(false),
            Kind::Int => Value::Int(0),
            Kind::Int8 => Value::Int8(0),
            Kind::Int16 => Value::Int16(0),
            Kind::Int32 => Value::Int32(0),
            Kind::Int64 => Value::Int64(0),
            Kind::Uint => Value::Uint(0),
            Kind::Uint8 => Value::Uint8(0),
            Kind::Uint16 => Value::Uint16(0),
            Kind::Uint32 => Value::Uint32(0),
            Kind::Uint64 => Value::Uint64(0),
            Kind::UintPtr => Value::UintPtr(0),
            Kind::Float32 => Value::Float32(0.0),
            Kind::Float64 => Value::Float64(0.0),
            Kind::Complex64 => Value::Complex64(Complex32::new(0.0, 0.0)),
            Kind::Complex128 => Value::Complex128(Complex64::new(0.0, 0.0)),
            Kind::String => Value::Str(String::new()),
            Kind::Pointer | Kind::Slice | Kind::Map | Kind::Chan | Kind::Func | Kind::Interface => {
                Value::Reference { kind, handle: None }
            }
            Kind::Rune
            | Kind::UntypedBool
            | Kind::UntypedInt
            | Kind::UntypedFloat
            | Kind::UntypedComplex
            | Kind::UntypedRune
            | Kind::UntypedString
            | Kind::UntypedNil => return None,
        };
        Some(value)
    }

    /// The storage kind of a typed value. Constants have none.
    pub fn kind(&self) -> Option<Kind> {
        let kind = match self {
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Int8(_) => Kind::Int8,
            Value::Int16(_) => Kind::Int16,
            Value::Int32(_) => Kind::Int32,
            Value::Int64(_) => Kind::Int64,
            Value::Uint(_) => Kind::Uint,
            Value::Uint8(_) => Kind::Uint8,
            Value::Uint16(_) => Kind::Uint16,
            Value::Uint32(_) => Kind::Uint32,
            Value::Uint64(_) => Kind::Uint64,
            Value::UintPtr(_) => Kind::UintPtr,
            Value::Float32(_) => Kind::Float32,
            Value::Float64(_) => Kind::Float64,
            Value::Complex64(_) => Kind::Complex64,
            Value::Complex128(_) => Kind::Complex128,
            Value::Str(_) => Kind::String,
            Value::Reference { kind, .. } => *kind,
            Value::Constant(_) => return None,
        };
        Some(kind)
    }

    fn kind_name(&self) -> &'static str {
        self.kind().map_or("constant", Kind::name)
    }

    // ============================================================================
    // Readers
    // ============================================================================

    /// Any integer as a 64-bit two's-complement pattern: signed values are
    /// sign-extended, unsigned values zero-extended.
    pub fn int_bits(&self) -> Option<u64> {
        match *self {
            Value::Int(v) | Value::Int64(v) => Some(v as u64),
            Value::Int8(v) => Some(v as i64 as u64),
            Value::Int16(v) => Some(v as i64 as u64),
            Value::Int32(v) => Some(v as i64 as u64),
            Value::Uint(v) | Value::Uint64(v) | Value::UintPtr(v) => Some(v),
            Value::Uint8(v) => Some(v as u64),
            Value::Uint16(v) => Some(v as u64),
            Value::Uint32(v) => Some(v as u64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Float32(v) => Some(v as f64),
            Value::Float64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<Complex64> {
        match *self {
            Value::Complex64(c) => Some(Complex64::new(c.re as f64, c.im as f64)),
            Value::Complex128(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Value::Constant(c) => Some(c),
            _ => None,
        }
    }

    /// Whether a reference-kind value is nil. `None` for values that cannot
    /// be nil.
    pub fn is_nil(&self) -> Option<bool> {
        match self {
            Value::Reference { handle, .. } => Some(handle.is_none()),
            _ => None,
        }
    }

    // ============================================================================
    // Slot writers
    // ============================================================================
    //
    // A slot is a zero value fresh from `TypeRegistry::allocate_zero`. Writers
    // narrow into the slot's own width, so callers may pass a wider value.

    pub fn set_bool(&mut self, value: bool) -> Result<(), InternalError> {
        match self {
            Value::Bool(slot) => *slot = value,
            _ => return Err(self.mismatch("bool")),
        }
        Ok(())
    }

    /// Store the low bits of a two's-complement pattern.
    pub fn set_bits(&mut self, bits: u64) -> Result<(), InternalError> {
        match self {
            Value::Int(slot) | Value::Int64(slot) => *slot = bits as i64,
            Value::Int8(slot) => *slot = bits as i8,
            Value::Int16(slot) => *slot = bits as i16,
            Value::Int32(slot) => *slot = bits as i32,
            Value::Uint(slot) | Value::Uint64(slot) | Value::UintPtr(slot) => *slot = bits,
            Value::Uint8(slot) => *slot = bits as u8,
            Value::Uint16(slot) => *slot = bits as u16,
            Value::Uint32(slot) => *slot = bits as u32,
            _ => return Err(self.mismatch("integer")),
        }
        Ok(())
    }

    pub fn set_float(&mut self, value: f64) -> Result<(), InternalError> {
        match self {
            Value::Float32(slot) => *slot = value as f32,
            Value::Float64(slot) => *slot = value,
            _ => return Err(self.mismatch("float")),
        }
        Ok(())
    }

    pub fn set_complex(&mut self, value: Complex64) -> Result<(), InternalError> {
        match self {
            Value::Complex64(slot) => *slot = Complex32::new(value.re as f32, value.im as f32),
            Value::Complex128(slot) => *slot = value,
            _ => return Err(self.mismatch("complex")),
        }
        Ok(())
    }

    pub fn set_str(&mut self, value: String) -> Result<(), InternalError> {
        match self {
            Value::Str(slot) => *slot = value,
            _ => return Err(self.mismatch("string")),
        }
        Ok(())
    }

    fn mismatch(&self, written: &'static str) -> InternalError {
        InternalError::SlotMismatch {
            slot: self.kind_name(),
            written,
        }
    }

    // ============================================================================
    // Conversion
    // ============================================================================

    /// Convert a typed value to the representation of `kind`, the way an
    /// explicit conversion `T(x)` would. Returns `None` when no conversion
    /// between the two representations exists.
    pub fn convert(&self, kind: Kind, word: WordSize) -> Option<Value> {
        let from = self.kind()?;
        let kind = kind.storage();
        let mut slot = Value::zero(kind)?;

        if kind.is_integer() {
            let bits = if let Some(bits) = self.int_bits() {
                bits
            } else if let Some(f) = self.as_f64() {
                // Out-of-range conversions are implementation-defined; Rust's
                // saturating casts are as good as any.
                if kind.is_signed() { f as i64 as u64 } else { f as u64 }
            } else {
                return None;
            };
            let bits = match kind {
                Kind::Int => word.narrow_signed(bits as i64) as u64,
                Kind::Uint | Kind::UintPtr => word.narrow_unsigned(bits),
                _ => bits,
            };
            slot.set_bits(bits).ok()?;
        } else if kind.is_float() {
            let f = if let Some(f) = self.as_f64() {
                f
            } else if let Some(bits) = self.int_bits() {
                if from.is_signed() { bits as i64 as f64 } else { bits as f64 }
            } else {
                return None;
            };
            slot.set_float(f).ok()?;
        } else if kind.is_complex() {
            slot.set_complex(self.as_complex()?).ok()?;
        } else if kind == Kind::String {
            slot.set_str(self.as_str()?.to_string()).ok()?;
        } else if kind == Kind::Bool {
            slot.set_bool(self.as_bool()?).ok()?;
        } else if kind.is_reference() {
            if from != kind {
                return None;
            }
            slot = self.clone();
        } else {
            return None;
        }
        Some(slot)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(v) | Value::Int64(v) => write!(f, "{}", v),
            Value::Int8(v) => write!(f, "{}", v),
            Value::Int16(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Uint(v) | Value::Uint64(v) | Value::UintPtr(v) => write!(f, "{}", v),
            Value::Uint8(v) => write!(f, "{}", v),
            Value::Uint16(v) => write!(f, "{}", v),
            Value::Uint32(v) => write!(f, "{}", v),
            Value::Float32(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::Complex64(c) => write!(f, "({}{:+}i)", c.re, c.im),
            Value::Complex128(c) => write!(f, "({}{:+}i)", c.re, c.im),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Reference { handle: None, .. } => write!(f, "nil"),
            Value::Reference {
                kind,
                handle: Some(Handle(h)),
            } => write!(f, "{}@{:#x}", kind, h),
            Value::Constant(c) => write!(f, "{}", c),
        }
    }
}
