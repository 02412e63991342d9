//! The stages of float addition.
//!
//! An addition runs every stage at most once, strictly in this order:
//!
//! 1. [`validate_operands`] rejects malformed encodings.
//! 2. [`resolve_zero`] short-circuits when either operand is zero.
//! 3. [`align`] shifts the smaller-exponent significand to the larger exponent.
//! 4. [`sum`] adds the aligned significands with one bit of headroom.
//! 5. [`normalize`] brings the sum back to `p + 1` bits.
//! 6. [`round`] applies the [`RoundingMode`](crate::RoundingMode) of the format.
//!
//! Each stage is a pure function of its input record. The bits dropped on the way
//! are compressed into a [`Discarded`] record that travels to the rounder.

mod align;
mod normalize;
mod round;
mod sum;
mod validate;
mod zero;

pub use align::{align, shift_right_discarding, Aligned};
pub use normalize::{normalize, Normalized};
pub use round::{round, Rounded};
pub use sum::{sum, Summed};
pub use validate::{validate, validate_operands};
pub use zero::resolve_zero;

/// The bits dropped by right shifts, reduced to what rounding needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Discarded {
    /// The most significant dropped bit.
    pub round: bool,
    /// OR of every dropped bit below the round bit.
    pub sticky: bool,
}

impl Discarded {
    /// Nothing was dropped.
    pub const EXACT: Self = Self {
        round: false,
        sticky: false,
    };

    /// Returns `true` if any dropped bit is set.
    #[inline]
    pub fn is_inexact(self) -> bool {
        self.round || self.sticky
    }

    /// Returns the record after one more bit, `dropped`, is shifted out below the kept bits.
    #[inline]
    pub fn shift_out(self, dropped: bool) -> Self {
        Self {
            round: dropped,
            sticky: self.is_inexact(),
        }
    }
}
