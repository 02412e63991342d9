use crate::{FloatError, FloatFormat, FloatValue, UnsignedInteger};

use super::{normalize::increment_exponent, Normalized};

/// The final result of an addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rounded<T> {
    /// The well-formed sum.
    pub value: FloatValue<T>,
    /// Set if the significand was incremented.
    pub rounded_up: bool,
}

/// Rounds a normalized sum with the rounding mode of `format`.
///
/// An increment that reaches `2^(p+1)` renormalizes to `2^p` with the next exponent.
///
/// # Errors
///
/// [`FloatError::ExponentOverflow`] if renormalization pushes the exponent to `2^k`.
///
/// # Correctness
///
/// - `format.check::<T>()` succeeds.
pub fn round<T: UnsignedInteger>(
    format: &FloatFormat,
    normalized: &Normalized<T>,
) -> Result<Rounded<T>, FloatError> {
    let rounded_up = format.rounding.rounds_up(normalized.discarded);

    let mut exponent = normalized.exponent;
    let mut significand = normalized.significand + T::from_bool(rounded_up);
    if significand == format.significand_limit() {
        significand = format.hidden_bit();
        exponent = increment_exponent(format, exponent)?;
    }

    Ok(Rounded {
        value: FloatValue::new(exponent, significand),
        rounded_up,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ops::Discarded, RoundingMode};

    const FORMAT: FloatFormat = FloatFormat::SINGLE;

    fn normalized(exponent: u32, significand: u32, round: bool, sticky: bool) -> Normalized<u32> {
        Normalized {
            exponent,
            significand,
            discarded: Discarded { round, sticky },
        }
    }

    #[test]
    fn test_round_nearest() {
        let r = round(&FORMAT, &normalized(176, 13291872, true, true)).unwrap();
        assert_eq!(r.value, FloatValue::new(176, 13291873));
        assert!(r.rounded_up);

        let r = round(&FORMAT, &normalized(43, 11672136, false, true)).unwrap();
        assert_eq!(r.value, FloatValue::new(43, 11672136));
        assert!(!r.rounded_up);

        // ties go away from zero
        let r = round(&FORMAT, &normalized(43, 11672136, true, false)).unwrap();
        assert_eq!(r.value, FloatValue::new(43, 11672137));
    }

    #[test]
    fn test_round_up_if_inexact() {
        let format = FORMAT.with_rounding(RoundingMode::UpIfInexact);

        let r = round(&format, &normalized(43, 11672136, false, true)).unwrap();
        assert_eq!(r.value, FloatValue::new(43, 11672137));

        let r = round(&format, &normalized(43, 11672136, false, false)).unwrap();
        assert_eq!(r.value, FloatValue::new(43, 11672136));
        assert!(!r.rounded_up);
    }

    #[test]
    fn test_round_renormalize() {
        let r = round(&FORMAT, &normalized(100, (1 << 24) - 1, true, false)).unwrap();
        assert_eq!(r.value, FloatValue::new(101, 1 << 23));
        assert!(r.rounded_up);
    }

    #[test]
    fn test_round_overflow() {
        assert!(matches!(
            round(&FORMAT, &normalized(255, (1 << 24) - 1, true, false)),
            Err(FloatError::ExponentOverflow { exponent_bits: 8 })
        ));
        assert!(round(&FORMAT, &normalized(255, (1 << 24) - 1, false, true)).is_ok());
    }
}
