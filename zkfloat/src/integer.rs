//! Defines the unsigned integer types that store exponents and significands.

use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{ConstOne, ConstZero, PrimInt, Unsigned};
use serde::{de::DeserializeOwned, Serialize};

/// An abstract over the unsigned integer types a float encoding is stored in.
///
/// Both the exponent and the significand of a value use the same type.
pub trait UnsignedInteger:
    'static
    + Sized
    + Send
    + Sync
    + Clone
    + Copy
    + Default
    + Hash
    + Debug
    + Display
    + PrimInt
    + Unsigned
    + ConstZero
    + ConstOne
    + Serialize
    + DeserializeOwned
{
    /// The number of bits this type has.
    const BITS: u32;

    /// Converts a `bool` into `0` or `1`.
    #[must_use]
    #[inline(always)]
    fn from_bool(bit: bool) -> Self {
        if bit {
            Self::ONE
        } else {
            Self::ZERO
        }
    }

    /// Returns `2^n`.
    ///
    /// # Correctness
    ///
    /// - `n < Self::BITS`
    #[must_use]
    #[inline(always)]
    fn pow_of_two(n: u32) -> Self {
        Self::ONE << n as usize
    }

    /// Returns a value whose `n` low bits are set.
    #[must_use]
    #[inline]
    fn low_mask(n: u32) -> Self {
        if n >= <Self as UnsignedInteger>::BITS {
            Self::max_value()
        } else {
            Self::pow_of_two(n) - Self::ONE
        }
    }

    /// Returns the number of bits needed to represent `self`, `0` for zero.
    #[must_use]
    #[inline]
    fn bit_length(self) -> u32 {
        <Self as UnsignedInteger>::BITS - self.leading_zeros()
    }

    /// Returns `true` if the bit at `index` is set.
    #[must_use]
    #[inline]
    fn bit(self, index: u32) -> bool {
        index < <Self as UnsignedInteger>::BITS && (self >> index as usize) & Self::ONE == Self::ONE
    }
}

macro_rules! impl_unsigned_integer {
    ($($T:ty),*) => {
        $(
            impl UnsignedInteger for $T {
                const BITS: u32 = <$T>::BITS;
            }
        )*
    };
}

impl_unsigned_integer!(u32, u64, u128);
