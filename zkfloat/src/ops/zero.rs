use crate::{FloatValue, UnsignedInteger};

/// Returns the sum directly if either operand is zero.
///
/// Adding zero drops no bits, so the other operand is returned unchanged.
/// Returns `None` when both operands are nonzero.
#[inline]
pub fn resolve_zero<T: UnsignedInteger>(
    lhs: &FloatValue<T>,
    rhs: &FloatValue<T>,
) -> Option<FloatValue<T>> {
    if lhs.is_zero() {
        Some(*rhs)
    } else if rhs.is_zero() {
        Some(*lhs)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_zero() {
        let zero = FloatValue::<u32>::ZERO;
        let a = FloatValue::new(43, 10566265);

        assert_eq!(resolve_zero(&zero, &zero), Some(zero));
        assert_eq!(resolve_zero(&zero, &a), Some(a));
        assert_eq!(resolve_zero(&a, &zero), Some(a));
        assert_eq!(resolve_zero(&a, &a), None);
    }
}
