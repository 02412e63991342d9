use std::marker::PhantomData;

use rayon::prelude::*;
use tracing::trace;

use crate::{
    ops::{
        align, normalize, resolve_zero, round, sum, validate_operands, Aligned, Normalized, Summed,
    },
    FloatError, FloatFormat, FloatValue, UnsignedInteger,
};

/// Adds values of one [`FloatFormat`] stored in `T`.
///
/// An adder holds no state besides its format, so it can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatAdder<T: UnsignedInteger> {
    format: FloatFormat,
    phantom: PhantomData<T>,
}

/// The intermediate values of one addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddTrace<T> {
    /// The sum.
    pub result: FloatValue<T>,
    /// The stage outputs, `None` if an operand was zero.
    pub stages: Option<StageTrace<T>>,
}

/// The stage outputs of an addition of two nonzero operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTrace<T> {
    /// Output of the aligner.
    pub aligned: Aligned<T>,
    /// Output of the summator.
    pub summed: Summed<T>,
    /// Output of the normalizer.
    pub normalized: Normalized<T>,
    /// Set if the rounder incremented the significand.
    pub rounded_up: bool,
}

impl FloatAdder<u32> {
    /// Creates an adder for [`FloatFormat::SINGLE`].
    #[inline]
    pub fn single() -> Self {
        Self {
            format: FloatFormat::SINGLE,
            phantom: PhantomData,
        }
    }
}

impl FloatAdder<u64> {
    /// Creates an adder for [`FloatFormat::DOUBLE`].
    #[inline]
    pub fn double() -> Self {
        Self {
            format: FloatFormat::DOUBLE,
            phantom: PhantomData,
        }
    }
}

impl<T: UnsignedInteger> FloatAdder<T> {
    /// Creates a new [`FloatAdder<T>`].
    ///
    /// # Errors
    ///
    /// [`FloatError::UnsupportedFormat`] if `format` does not fit `T`.
    pub fn new(format: FloatFormat) -> Result<Self, FloatError> {
        format.check::<T>()?;
        Ok(Self {
            format,
            phantom: PhantomData,
        })
    }

    /// Returns the format of this [`FloatAdder<T>`].
    #[inline]
    pub fn format(&self) -> &FloatFormat {
        &self.format
    }

    /// Calculates `lhs + rhs`.
    pub fn add(&self, lhs: &FloatValue<T>, rhs: &FloatValue<T>) -> Result<FloatValue<T>, FloatError> {
        self.add_traced(lhs, rhs).map(|trace| trace.result)
    }

    /// Calculates `lhs + rhs`, keeping the output of every stage.
    pub fn add_traced(
        &self,
        lhs: &FloatValue<T>,
        rhs: &FloatValue<T>,
    ) -> Result<AddTrace<T>, FloatError> {
        let format = &self.format;

        validate_operands(format, lhs, rhs)?;

        if let Some(result) = resolve_zero(lhs, rhs) {
            trace!(%lhs, %rhs, %result, "zero operand");
            return Ok(AddTrace {
                result,
                stages: None,
            });
        }

        let aligned = align(format, lhs, rhs);
        trace!(
            delta = %aligned.delta,
            lo = %aligned.lo,
            round = aligned.discarded.round,
            sticky = aligned.discarded.sticky,
            "aligned"
        );

        let summed = sum(format, &aligned);
        trace!(raw_sum = %summed.raw_sum, carry = summed.carry, "summed");

        let normalized = normalize(format, &summed)?;
        let rounded = round(format, &normalized)?;
        trace!(
            round = normalized.discarded.round,
            sticky = normalized.discarded.sticky,
            rounded_up = rounded.rounded_up,
            result = %rounded.value,
            "rounded"
        );

        Ok(AddTrace {
            result: rounded.value,
            stages: Some(StageTrace {
                aligned,
                summed,
                normalized,
                rounded_up: rounded.rounded_up,
            }),
        })
    }

    /// Adds `values` from left to right, starting from zero.
    ///
    /// Stops at the first failing addition.
    pub fn sum<'a, I>(&self, values: I) -> Result<FloatValue<T>, FloatError>
    where
        I: IntoIterator<Item = &'a FloatValue<T>>,
    {
        values
            .into_iter()
            .try_fold(FloatValue::ZERO, |acc, value| self.add(&acc, value))
    }

    /// Adds every pair in `pairs` independently, in parallel.
    pub fn add_batch(
        &self,
        pairs: &[(FloatValue<T>, FloatValue<T>)],
    ) -> Vec<Result<FloatValue<T>, FloatError>> {
        pairs
            .par_iter()
            .map(|(lhs, rhs)| self.add(lhs, rhs))
            .collect()
    }
}
