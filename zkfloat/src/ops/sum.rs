use crate::{FloatFormat, UnsignedInteger};

use super::{Aligned, Discarded};

/// The raw sum of two aligned significands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Summed<T> {
    /// The shared exponent of the addends.
    pub exponent: T,
    /// `hi + lo`, at most `p + 2` bits wide.
    pub raw_sum: T,
    /// Set if `raw_sum >= 2^(p+1)`.
    pub carry: bool,
    /// The bits dropped by alignment.
    pub discarded: Discarded,
}

/// Adds the aligned significands.
///
/// Both addends are below `2^(p+1)`, so the sum overflows by at most one bit,
/// which [`FloatFormat::check`] guarantees `T` has room for.
pub fn sum<T: UnsignedInteger>(format: &FloatFormat, aligned: &Aligned<T>) -> Summed<T> {
    let raw_sum = aligned.hi + aligned.lo;
    Summed {
        exponent: aligned.exponent,
        raw_sum,
        carry: raw_sum.bit(format.significand_width()),
        discarded: aligned.discarded,
    }
}
