//! The `(exponent, significand)` value record.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{ops::validate, FloatFormat, UnsignedInteger};

/// Values of [`FloatFormat::SINGLE`].
pub type Float32 = FloatValue<u32>;

/// Values of [`FloatFormat::DOUBLE`].
pub type Float64 = FloatValue<u64>;

/// A float encoded as an `(exponent, significand)` pair.
///
/// This is a plain record: a [`FloatValue`] is only checked against a
/// [`FloatFormat`] when it enters an addition or via [`FloatValue::is_well_formed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloatValue<T> {
    /// The biased exponent, `0` only for the zero value.
    pub exponent: T,
    /// The significand including the implicit leading bit.
    pub significand: T,
}

impl<T: UnsignedInteger> FloatValue<T> {
    /// The unique zero value.
    pub const ZERO: Self = Self {
        exponent: T::ZERO,
        significand: T::ZERO,
    };

    /// Creates a new [`FloatValue<T>`] from raw parts.
    #[inline]
    pub const fn new(exponent: T, significand: T) -> Self {
        Self {
            exponent,
            significand,
        }
    }

    /// Returns `true` if this is the zero value.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.exponent.is_zero() && self.significand.is_zero()
    }

    /// Returns `true` if this value satisfies the invariants of `format`.
    #[inline]
    pub fn is_well_formed(&self, format: &FloatFormat) -> bool {
        validate(format, self).is_ok()
    }

    /// Splits this value into `(exponent, significand)`.
    #[inline]
    pub fn into_parts(self) -> (T, T) {
        (self.exponent, self.significand)
    }
}

impl<T: UnsignedInteger> From<(T, T)> for FloatValue<T> {
    #[inline]
    fn from((exponent, significand): (T, T)) -> Self {
        Self::new(exponent, significand)
    }
}

impl<T: fmt::Display> fmt::Display for FloatValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(e={}, m={})", self.exponent, self.significand)
    }
}
