//! Storage kinds.
//!
//! A [`Kind`] names the concrete representation a value is stored in. Many
//! language types can share one kind (a named type over `int32` and `rune`
//! both store an `Int32`), so kinds carry no identity of their own.

use core::fmt;

/// Width of the machine-word integer kinds (`int`, `uint`, `uintptr`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum WordSize {
    W32,
    #[default]
    W64,
}

impl WordSize {
    pub fn bits(self) -> u32 {
        match self {
            WordSize::W32 => 32,
            WordSize::W64 => 64,
        }
    }

    /// Sign-extend the low word of `value`.
    pub fn narrow_signed(self, value: i64) -> i64 {
        match self {
            WordSize::W32 => value as i32 as i64,
            WordSize::W64 => value,
        }
    }

    /// Zero-extend the low word of `value`.
    pub fn narrow_unsigned(self, value: u64) -> u64 {
        match self {
            WordSize::W32 => value as u32 as u64,
            WordSize::W64 => value,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    UintPtr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    Rune,

    // Untyped constants, only seen before normalization.
    UntypedBool,
    UntypedInt,
    UntypedFloat,
    UntypedComplex,
    UntypedRune,
    UntypedString,
    UntypedNil,

    // Reference kinds. Their values are opaque handles or nil.
    Pointer,
    Slice,
    Map,
    Chan,
    Func,
    Interface,
}

impl Kind {
    pub fn is_untyped(self) -> bool {
        matches!(
            self,
            Kind::UntypedBool
                | Kind::UntypedInt
                | Kind::UntypedFloat
                | Kind::UntypedComplex
                | Kind::UntypedRune
                | Kind::UntypedString
                | Kind::UntypedNil
        )
    }

    pub fn is_signed(self) -> bool {
        matches!(
            self,
            Kind::Int | Kind::Int8 | Kind::Int16 | Kind::Int32 | Kind::Int64 | Kind::Rune
        )
    }

    pub fn is_unsigned(self) -> bool {
        matches!(
            self,
            Kind::Uint | Kind::Uint8 | Kind::Uint16 | Kind::Uint32 | Kind::Uint64 | Kind::UintPtr
        )
    }

    pub fn is_integer(self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    pub fn is_float(self) -> bool {
        matches!(self, Kind::Float32 | Kind::Float64)
    }

    pub fn is_complex(self) -> bool {
        matches!(self, Kind::Complex64 | Kind::Complex128)
    }

    pub fn is_reference(self) -> bool {
        matches!(
            self,
            Kind::Pointer | Kind::Slice | Kind::Map | Kind::Chan | Kind::Func | Kind::Interface
        )
    }

    /// Kinds supporting `<`, `>`, `<=` and `>=`.
    pub fn is_ordered(self) -> bool {
        self.is_integer() || self.is_float() || self == Kind::String
    }

    /// The kind values of this kind are stored as. Only `Rune` differs from
    /// itself: it shares `Int32` storage.
    pub fn storage(self) -> Kind {
        match self {
            Kind::Rune => Kind::Int32,
            other => other,
        }
    }

    /// Bit width of numeric kinds; `None` for everything else.
    pub fn bit_width(self, word: WordSize) -> Option<u32> {
        match self {
            Kind::Int8 | Kind::Uint8 => Some(8),
            Kind::Int16 | Kind::Uint16 => Some(16),
            Kind::Int32 | Kind::Uint32 | Kind::Rune | Kind::Float32 => Some(32),
            Kind::Int64 | Kind::Uint64 | Kind::Float64 | Kind::Complex64 => Some(64),
            Kind::Complex128 => Some(128),
            Kind::Int | Kind::Uint | Kind::UintPtr => Some(word.bits()),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint => "uint",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::UintPtr => "uintptr",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::Complex64 => "complex64",
            Kind::Complex128 => "complex128",
            Kind::String => "string",
            Kind::Rune => "rune",
            Kind::UntypedBool => "untyped bool",
            Kind::UntypedInt => "untyped int",
            Kind::UntypedFloat => "untyped float",
            Kind::UntypedComplex => "untyped complex",
            Kind::UntypedRune => "untyped rune",
            Kind::UntypedString => "untyped string",
            Kind::UntypedNil => "untyped nil",
            Kind::Pointer => "pointer",
            Kind::Slice => "slice",
            Kind::Map => "map",
            Kind::Chan => "chan",
            Kind::Func => "func",
            Kind::Interface => "interface",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rune_is_stored_as_int32() {
        assert_eq!(Kind::Rune.storage(), Kind::Int32);
        assert_eq!(Kind::Int32.storage(), Kind::Int32);
        assert!(Kind::Rune.is_signed());
    }

    #[test]
    fn test_word_kinds_follow_word_size() {
        assert_eq!(Kind::Int.bit_width(WordSize::W64), Some(64));
        assert_eq!(Kind::UintPtr.bit_width(WordSize::W32), Some(32));
        assert_eq!(Kind::Int8.bit_width(WordSize::W32), Some(8));
        assert_eq!(Kind::String.bit_width(WordSize::W64), None);
    }

    #[test]
    fn test_orderable_kinds() {
        assert!(Kind::String.is_ordered());
        assert!(Kind::Float32.is_ordered());
        assert!(!Kind::Bool.is_ordered());
        assert!(!Kind::Complex128.is_ordered());
        assert!(!Kind::Map.is_ordered());
    }

    #[test]
    fn test_narrowing() {
        assert_eq!(WordSize::W32.narrow_signed(1 << 31), i32::MIN as i64);
        assert_eq!(WordSize::W64.narrow_signed(1 << 31), 1 << 31);
        assert_eq!(WordSize::W32.narrow_unsigned(u64::MAX), u32::MAX as u64);
    }
}
