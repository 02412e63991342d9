use crate::{FloatFormat, FloatValue, UnsignedInteger};

use super::Discarded;

/// Two nonzero operands scaled to a common exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Aligned<T> {
    /// The larger exponent, shared by both aligned significands.
    pub exponent: T,
    /// Exponent difference of the operands.
    pub delta: T,
    /// The significand of the larger-exponent operand.
    pub hi: T,
    /// The significand of the smaller-exponent operand, shifted right by `delta`.
    pub lo: T,
    /// The bits shifted out of `lo`.
    pub discarded: Discarded,
}

/// Aligns the smaller-exponent operand to the larger exponent.
///
/// With equal exponents `lhs` is taken as the larger one; the sum is the same either way.
///
/// # Correctness
///
/// - both operands are nonzero and well-formed for `format`.
pub fn align<T: UnsignedInteger>(
    format: &FloatFormat,
    lhs: &FloatValue<T>,
    rhs: &FloatValue<T>,
) -> Aligned<T> {
    let (hi, lo) = if lhs.exponent >= rhs.exponent {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };

    let delta = hi.exponent - lo.exponent;
    let (lo_aligned, discarded) =
        shift_right_discarding(lo.significand, delta, format.significand_width());

    Aligned {
        exponent: hi.exponent,
        delta,
        hi: hi.significand,
        lo: lo_aligned,
        discarded,
    }
}

/// Shifts the `width`-bit `value` right by `shift`, recording the dropped bits.
///
/// A shift of `width` or more leaves zero; beyond `width` even the round bit is
/// a zero above `value`, so only the sticky bit can be set.
///
/// # Correctness
///
/// - `value < 2^width`
/// - `width < T::BITS`
pub fn shift_right_discarding<T: UnsignedInteger>(
    value: T,
    shift: T,
    width: u32,
) -> (T, Discarded) {
    let shift = match shift.to_u32() {
        Some(shift) if shift <= width => shift,
        _ => {
            return (
                T::ZERO,
                Discarded {
                    round: false,
                    sticky: !value.is_zero(),
                },
            )
        }
    };

    if shift == 0 {
        return (value, Discarded::EXACT);
    }

    let kept = value >> shift as usize;
    let discarded = Discarded {
        round: value.bit(shift - 1),
        sticky: !(value & T::low_mask(shift - 1)).is_zero(),
    };
    (kept, discarded)
}
