use tracing::debug;

use crate::{FloatError, FloatFormat, FloatValue, MalformedReason, Operand, UnsignedInteger};

/// Checks `value` against the invariants of `format`.
///
/// Rules are checked in order: exponent range, significand range,
/// zero exponent with a nonzero significand, then normalization.
///
/// Bounds are compared by bit length, so any `format` is accepted, including
/// one whose limits do not fit `T`.
pub fn validate<T: UnsignedInteger>(
    format: &FloatFormat,
    value: &FloatValue<T>,
) -> Result<(), MalformedReason> {
    let width = format.significand_width();

    if value.exponent.bit_length() > format.exponent_bits {
        return Err(MalformedReason::ExponentOutOfRange);
    }
    if value.significand.bit_length() > width {
        return Err(MalformedReason::SignificandOutOfRange);
    }
    if value.exponent.is_zero() {
        if !value.significand.is_zero() {
            return Err(MalformedReason::ZeroExponentWithSignificand);
        }
    } else if value.significand.bit_length() < width {
        return Err(MalformedReason::NotNormalized);
    }
    Ok(())
}

/// Validates both operands of an addition, `lhs` first.
pub fn validate_operands<T: UnsignedInteger>(
    format: &FloatFormat,
    lhs: &FloatValue<T>,
    rhs: &FloatValue<T>,
) -> Result<(), FloatError> {
    for (operand, value) in [(Operand::Lhs, lhs), (Operand::Rhs, rhs)] {
        if let Err(reason) = validate(format, value) {
            debug!(%operand, %value, %reason, "malformed operand");
            return Err(FloatError::MalformedOperand { operand, reason });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMAT: FloatFormat = FloatFormat::SINGLE;

    #[test]
    fn test_validate() {
        let check = |e: u32, m: u32| validate(&FORMAT, &FloatValue::new(e, m));

        assert_eq!(check(0, 0), Ok(()));
        assert_eq!(check(43, 10566265), Ok(()));
        assert_eq!(check(255, (1 << 24) - 1), Ok(()));
        assert_eq!(check(1, 1 << 23), Ok(()));

        assert_eq!(check(256, 10566265), Err(MalformedReason::ExponentOutOfRange));
        assert_eq!(check(43, 16777216), Err(MalformedReason::SignificandOutOfRange));
        assert_eq!(
            check(0, 10566265),
            Err(MalformedReason::ZeroExponentWithSignificand)
        );
        assert_eq!(check(43, 6777216), Err(MalformedReason::NotNormalized));
    }

    #[test]
    fn test_validate_order() {
        // exponent is checked before the significand
        assert_eq!(
            validate(&FORMAT, &FloatValue::<u32>::new(300, 1 << 25)),
            Err(MalformedReason::ExponentOutOfRange)
        );
        assert_eq!(
            validate(&FORMAT, &FloatValue::<u32>::new(0, 1 << 25)),
            Err(MalformedReason::SignificandOutOfRange)
        );
    }

    #[test]
    fn test_validate_unsupported_format() {
        let value = FloatValue::<u32>::new(43, 10566265);

        // no u32 significand reaches 2^52
        assert_eq!(
            validate(&FloatFormat::DOUBLE, &value),
            Err(MalformedReason::NotNormalized)
        );
        assert!(!value.is_well_formed(&FloatFormat::DOUBLE));

        assert_eq!(validate(&FloatFormat::new(40, 23), &value), Ok(()));
        assert_eq!(
            validate(&FloatFormat::new(40, 10), &value),
            Err(MalformedReason::SignificandOutOfRange)
        );
        assert_eq!(
            validate(&FloatFormat::new(40, 40), &FloatValue::<u32>::ZERO),
            Ok(())
        );

        // limits of 2^32 do not fit u32 but every value is still checked
        let max = FloatValue::<u32>::new(u32::MAX, u32::MAX);
        assert!(max.is_well_formed(&FloatFormat::new(32, 31)));
    }

    #[test]
    fn test_validate_operands() {
        let good = FloatValue::<u32>::new(43, 10566265);
        let bad = FloatValue::<u32>::new(0, 10566265);

        assert!(validate_operands(&FORMAT, &good, &good).is_ok());
        assert!(matches!(
            validate_operands(&FORMAT, &good, &bad),
            Err(FloatError::MalformedOperand {
                operand: Operand::Rhs,
                reason: MalformedReason::ZeroExponentWithSignificand,
            })
        ));
        assert!(matches!(
            validate_operands(&FORMAT, &bad, &bad),
            Err(FloatError::MalformedOperand {
                operand: Operand::Lhs,
                ..
            })
        ));
    }
}
