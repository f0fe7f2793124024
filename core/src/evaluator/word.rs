//! Fixed-width integer arithmetic with the language's overflow rules.
//!
//! All integer operators compute at the declared width of the left operand.
//! Operands arrive as 64-bit two's-complement patterns (see
//! [`Value::int_bits`](crate::values::Value::int_bits)) and are cut down to
//! the working width with [`Word::from_bits`]; results go back out through
//! [`Word::to_bits`].

pub(super) trait Word: Copy + PartialEq + PartialOrd {
    const BITS: u32;
    const SIGNED: bool;

    fn from_bits(bits: u64) -> Self;
    fn to_bits(self) -> u64;
    fn is_zero(self) -> bool;

    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    /// Truncated division. `MIN / -1` wraps to `MIN`. Panics on zero, so
    /// callers check [`Word::is_zero`] first.
    fn div(self, rhs: Self) -> Self;
    /// Remainder with the sign of the dividend. `MIN % -1` is 0.
    fn rem(self, rhs: Self) -> Self;

    fn and(self, rhs: Self) -> Self;
    fn or(self, rhs: Self) -> Self;
    fn xor(self, rhs: Self) -> Self;
    fn and_not(self, rhs: Self) -> Self;

    /// Counts of `BITS` or more shift every bit out.
    fn shl(self, count: u64) -> Self;
    /// Arithmetic for signed words, logical for unsigned ones.
    fn shr(self, count: u64) -> Self;
}

macro_rules! impl_word {
    ($($ty:ty => $signed:expr),* $(,)?) => {
        $(
            impl Word for $ty {
                const BITS: u32 = <$ty>::BITS;
                const SIGNED: bool = $signed;

                #[inline]
                fn from_bits(bits: u64) -> Self {
                    bits as $ty
                }

                #[inline]
                fn to_bits(self) -> u64 {
                    // Sign-extends signed words, zero-extends unsigned ones.
                    self as i128 as u64
                }

                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }

                #[inline]
                fn add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn div(self, rhs: Self) -> Self {
                    self.wrapping_div(rhs)
                }

                #[inline]
                fn rem(self, rhs: Self) -> Self {
                    self.wrapping_rem(rhs)
                }

                #[inline]
                fn and(self, rhs: Self) -> Self {
                    self & rhs
                }

                #[inline]
                fn or(self, rhs: Self) -> Self {
                    self | rhs
                }

                #[inline]
                fn xor(self, rhs: Self) -> Self {
                    self ^ rhs
                }

                #[inline]
                fn and_not(self, rhs: Self) -> Self {
                    self & !rhs
                }

                #[inline]
                fn shl(self, count: u64) -> Self {
                    if count >= Self::BITS as u64 {
                        0
                    } else {
                        self << count
                    }
                }

                #[inline]
                fn shr(self, count: u64) -> Self {
                    if count < Self::BITS as u64 {
                        self >> count
                    } else if Self::SIGNED {
                        // Only the sign survives.
                        self >> (Self::BITS - 1)
                    } else {
                        0
                    }
                }
            }
        )*
    };
}

impl_word! {
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
}

/// Run `$body` with `$w` bound to the primitive integer type that stores
/// `$kind` at word size `$word`. Evaluates `$otherwise` for non-integer kinds.
macro_rules! with_word {
    ($kind:expr, $word:expr, |$w:ident| $body:expr, else $otherwise:expr) => {{
        use crate::types::{Kind, WordSize};
        match ($kind, $word) {
            (Kind::Int8, _) => {
                type $w = i8;
                $body
            }
            (Kind::Int16, _) => {
                type $w = i16;
                $body
            }
            (Kind::Int32 | Kind::Rune, _) | (Kind::Int, WordSize::W32) => {
                type $w = i32;
                $body
            }
            (Kind::Int64, _) | (Kind::Int, WordSize::W64) => {
                type $w = i64;
                $body
            }
            (Kind::Uint8, _) => {
                type $w = u8;
                $body
            }
            (Kind::Uint16, _) => {
                type $w = u16;
                $body
            }
            (Kind::Uint32, _) | (Kind::Uint | Kind::UintPtr, WordSize::W32) => {
                type $w = u32;
                $body
            }
            (Kind::Uint64, _) | (Kind::Uint | Kind::UintPtr, WordSize::W64) => {
                type $w = u64;
                $body
            }
            _ => $otherwise,
        }
    }};
}

pub(super) use with_word;
