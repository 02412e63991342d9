//! Bridges between native IEEE 754 floats and the single and double formats.
//!
//! A positive normal native float has the same biased exponent as its
//! [`FloatValue`]; the significand gains the implicit leading bit.
//! `+0.0` and `-0.0` map to the zero value. Negative, subnormal, infinite
//! and NaN inputs have no encoding.

use crate::{ops::validate, FloatError, FloatFormat, FloatValue, UnsignedInteger};

macro_rules! impl_native_bridge {
    ($Float:ty, $T:ty, $format:expr, $from:ident, $to:ident) => {
        impl FloatValue<$T> {
            #[doc = concat!("Encodes a native `", stringify!($Float), "`.")]
            ///
            /// # Errors
            ///
            /// [`FloatError::NotRepresentable`] for negative, subnormal, infinite and NaN inputs.
            pub fn $from(value: $Float) -> Result<Self, FloatError> {
                let format: FloatFormat = $format;
                if value == 0.0 {
                    return Ok(Self::ZERO);
                }

                let bits = value.to_bits();
                let exponent = (bits >> format.precision) & <$T>::low_mask(format.exponent_bits + 1);
                let fraction = bits & <$T>::low_mask(format.precision);

                // the sign bit lands above the exponent mask
                if exponent == 0 || exponent >= <$T>::low_mask(format.exponent_bits) {
                    return Err(FloatError::NotRepresentable {
                        value: value.to_string(),
                    });
                }

                Ok(Self::new(exponent, fraction | format.hidden_bit::<$T>()))
            }

            #[doc = concat!("Decodes into a native `", stringify!($Float), "`.")]
            ///
            /// # Errors
            ///
            /// [`FloatError::NotRepresentable`] if this value is malformed or its
            /// exponent is all ones, which natively encodes infinity and NaN.
            pub fn $to(&self) -> Result<$Float, FloatError> {
                let format: FloatFormat = $format;
                let not_representable = || FloatError::NotRepresentable {
                    value: self.to_string(),
                };

                validate(&format, self).map_err(|_| not_representable())?;
                if self.is_zero() {
                    return Ok(0.0);
                }
                if self.exponent == <$T>::low_mask(format.exponent_bits) {
                    return Err(not_representable());
                }

                Ok(<$Float>::from_bits(
                    (self.exponent << format.precision)
                        | (self.significand & <$T>::low_mask(format.precision)),
                ))
            }
        }
    };
}

impl_native_bridge!(f32, u32, FloatFormat::SINGLE, from_f32, to_f32);
impl_native_bridge!(f64, u64, FloatFormat::DOUBLE, from_f64, to_f64);
