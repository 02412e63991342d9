//! Float format parameters and rounding policy.

use serde::{Deserialize, Serialize};

use crate::{ops::Discarded, FloatError, UnsignedInteger};

/// How the normalized significand treats the bits dropped by alignment and normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round to the nearest representable value, ties away from zero.
    ///
    /// The significand is incremented iff the most significant dropped bit is set.
    #[default]
    NearestTiesAway,
    /// Round away from zero whenever any dropped bit is set.
    UpIfInexact,
}

impl RoundingMode {
    /// Returns `true` if a significand that dropped `discarded` must be incremented.
    #[inline]
    pub fn rounds_up(self, discarded: Discarded) -> bool {
        match self {
            RoundingMode::NearestTiesAway => discarded.round,
            RoundingMode::UpIfInexact => discarded.is_inexact(),
        }
    }
}

/// The parameters of an `(exponent, significand)` float format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloatFormat {
    /// Exponent bit count, refers to **`k`**.
    pub exponent_bits: u32,
    /// Stored significand bit count, refers to **`p`**.
    ///
    /// Normalized significands carry one more, implicit leading bit.
    pub precision: u32,
    /// Rounding policy of the addition.
    #[serde(default)]
    pub rounding: RoundingMode,
}

impl FloatFormat {
    /// The single precision layout, `k = 8` and `p = 23`.
    pub const SINGLE: Self = Self::new(8, 23);

    /// The double precision layout, `k = 11` and `p = 52`.
    pub const DOUBLE: Self = Self::new(11, 52);

    /// Creates a new [`FloatFormat`] with the default rounding mode.
    #[inline]
    pub const fn new(exponent_bits: u32, precision: u32) -> Self {
        Self {
            exponent_bits,
            precision,
            rounding: RoundingMode::NearestTiesAway,
        }
    }

    /// Returns this format with the rounding mode replaced.
    #[inline]
    pub const fn with_rounding(self, rounding: RoundingMode) -> Self {
        Self { rounding, ..self }
    }

    /// Returns the width of a normalized significand, `p + 1`.
    #[inline]
    pub const fn significand_width(&self) -> u32 {
        self.precision + 1
    }

    /// Checks that values of this format and their sums fit `T`.
    ///
    /// The summation needs `p + 2` bits and the exponent must be able to reach `2^k`.
    pub fn check<T: UnsignedInteger>(&self) -> Result<(), FloatError> {
        let bits = <T as UnsignedInteger>::BITS;
        if self.exponent_bits == 0
            || self.precision == 0
            || self.exponent_bits >= bits
            || self.precision >= bits - 1
        {
            return Err(FloatError::UnsupportedFormat {
                exponent_bits: self.exponent_bits,
                precision: self.precision,
                storage_bits: bits,
            });
        }
        Ok(())
    }

    /// Returns the implicit leading bit `2^p`.
    ///
    /// # Correctness
    ///
    /// - `self.check::<T>()` succeeds.
    #[inline]
    pub fn hidden_bit<T: UnsignedInteger>(&self) -> T {
        T::pow_of_two(self.precision)
    }

    /// Returns the exclusive significand bound `2^(p+1)`.
    ///
    /// # Correctness
    ///
    /// - `self.check::<T>()` succeeds.
    #[inline]
    pub fn significand_limit<T: UnsignedInteger>(&self) -> T {
        T::pow_of_two(self.significand_width())
    }

    /// Returns the exclusive exponent bound `2^k`.
    ///
    /// # Correctness
    ///
    /// - `self.check::<T>()` succeeds.
    #[inline]
    pub fn exponent_limit<T: UnsignedInteger>(&self) -> T {
        T::pow_of_two(self.exponent_bits)
    }

    #[inline]
    pub(crate) fn overflow(&self) -> FloatError {
        FloatError::ExponentOverflow {
            exponent_bits: self.exponent_bits,
        }
    }
}
