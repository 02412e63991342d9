#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Fixed-width floating-point addition over an unsigned `(exponent, significand)` encoding.
//!
//! A value is a pair `(e, m)` with `0 <= e < 2^k` and `0 <= m < 2^(p+1)`.
//! The only zero is `(0, 0)`; every other value is normalized, `2^p <= m < 2^(p+1)`.
//!
//! Addition runs a fixed pipeline of stages, see [`ops`], and is driven by [`FloatAdder`].
//!
//! ```
//! use zkfloat::{FloatAdder, FloatValue};
//!
//! let adder = FloatAdder::single();
//! let sum = adder
//!     .add(&FloatValue::new(104, 12444445), &FloatValue::new(106, 14159003))
//!     .unwrap();
//! assert_eq!(sum, FloatValue::new(107, 8635057));
//! ```

mod adder;
mod convert;
mod error;
mod format;
mod integer;
mod value;

pub mod ops;
pub mod witness;

pub use adder::{AddTrace, FloatAdder, StageTrace};
pub use error::{FloatError, MalformedReason, Operand};
pub use format::{FloatFormat, RoundingMode};
pub use integer::UnsignedInteger;
pub use value::{Float32, Float64, FloatValue};

/// Adds two raw `(exponent, significand)` pairs in the format with
/// `exponent_bits` (**`k`**) exponent bits and `precision` (**`p`**) stored significand bits.
///
/// Both pairs are validated before any arithmetic happens.
///
/// # Errors
///
/// - [`FloatError::UnsupportedFormat`] if the format does not fit `T`.
/// - [`FloatError::MalformedOperand`] if either pair is not a well-formed value.
/// - [`FloatError::ExponentOverflow`] if the rounded result exponent reaches `2^k`.
pub fn add<T: UnsignedInteger>(
    exponent_bits: u32,
    precision: u32,
    lhs: (T, T),
    rhs: (T, T),
) -> Result<(T, T), FloatError> {
    let adder = FloatAdder::<T>::new(FloatFormat::new(exponent_bits, precision))?;
    adder
        .add(&FloatValue::from(lhs), &FloatValue::from(rhs))
        .map(FloatValue::into_parts)
}
