use tracing::debug;

use crate::{FloatError, FloatFormat, UnsignedInteger};

use super::{Discarded, Summed};

/// A sum brought back to exactly `p + 1` significand bits, before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Normalized<T> {
    /// The result exponent.
    pub exponent: T,
    /// The truncated significand, `2^p <= significand < 2^(p+1)`.
    pub significand: T,
    /// Every bit dropped so far.
    pub discarded: Discarded,
}

/// Normalizes a raw sum.
///
/// Without a carry the sum already has `p + 1` bits, since the larger addend
/// is at least `2^p`. With a carry the sum is shifted right once and the
/// exponent grows by one.
///
/// # Errors
///
/// [`FloatError::ExponentOverflow`] if the exponent reaches `2^k`.
///
/// # Correctness
///
/// - `format.check::<T>()` succeeds.
pub fn normalize<T: UnsignedInteger>(
    format: &FloatFormat,
    summed: &Summed<T>,
) -> Result<Normalized<T>, FloatError> {
    if !summed.carry {
        return Ok(Normalized {
            exponent: summed.exponent,
            significand: summed.raw_sum,
            discarded: summed.discarded,
        });
    }

    Ok(Normalized {
        exponent: increment_exponent(format, summed.exponent)?,
        significand: summed.raw_sum >> 1,
        discarded: summed.discarded.shift_out(summed.raw_sum.bit(0)),
    })
}

/// Returns `exponent + 1`, or an error if it reaches `2^k`.
pub(super) fn increment_exponent<T: UnsignedInteger>(
    format: &FloatFormat,
    exponent: T,
) -> Result<T, FloatError> {
    let next = exponent + T::ONE;
    if next >= format.exponent_limit() {
        debug!(%exponent, exponent_bits = format.exponent_bits, "exponent overflow");
        return Err(format.overflow());
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMAT: FloatFormat = FloatFormat::SINGLE;

    #[test]
    fn test_normalize_without_carry() {
        let summed = Summed {
            exponent: 176u32,
            raw_sum: 13291872,
            carry: false,
            discarded: Discarded {
                round: true,
                sticky: true,
            },
        };

        let normalized = normalize(&FORMAT, &summed).unwrap();
        assert_eq!(normalized.exponent, 176);
        assert_eq!(normalized.significand, 13291872);
        assert_eq!(normalized.discarded, summed.discarded);
    }

    #[test]
    fn test_normalize_with_carry() {
        // 14159003 + (12444445 >> 2)
        let summed = Summed {
            exponent: 106u32,
            raw_sum: 17270114,
            carry: true,
            discarded: Discarded {
                round: false,
                sticky: true,
            },
        };

        let normalized = normalize(&FORMAT, &summed).unwrap();
        assert_eq!(normalized.exponent, 107);
        assert_eq!(normalized.significand, 8635057);
        assert_eq!(
            normalized.discarded,
            Discarded {
                round: false,
                sticky: true
            }
        );
    }

    #[test]
    fn test_normalize_dropped_bit() {
        let summed = Summed {
            exponent: 10u32,
            raw_sum: (1 << 24) + 1,
            carry: true,
            discarded: Discarded::EXACT,
        };

        let normalized = normalize(&FORMAT, &summed).unwrap();
        assert_eq!(normalized.significand, 1 << 23);
        assert_eq!(
            normalized.discarded,
            Discarded {
                round: true,
                sticky: false
            }
        );
    }

    #[test]
    fn test_normalize_overflow() {
        let summed = Summed {
            exponent: 255u32,
            raw_sum: 1 << 24,
            carry: true,
            discarded: Discarded::EXACT,
        };

        assert!(matches!(
            normalize(&FORMAT, &summed),
            Err(FloatError::ExponentOverflow { exponent_bits: 8 })
        ));
    }
}
