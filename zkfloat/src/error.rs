//! This module defines the errors that
//! may occur while encoding or adding floats.

use core::fmt;

use thiserror::Error;

/// Identifies an operand of an addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// The left-hand operand.
    Lhs,
    /// The right-hand operand.
    Rhs,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Lhs => f.write_str("left"),
            Operand::Rhs => f.write_str("right"),
        }
    }
}

/// The well-formedness rule a value violates.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MalformedReason {
    /// The exponent is not below `2^k`.
    #[error("exponent is not below 2^k")]
    ExponentOutOfRange,
    /// The significand is not below `2^(p+1)`.
    #[error("significand is not below 2^(p+1)")]
    SignificandOutOfRange,
    /// The exponent is zero but the significand is not.
    #[error("exponent is zero but significand is not")]
    ZeroExponentWithSignificand,
    /// The exponent is nonzero but the significand is below `2^p`.
    #[error("significand is below 2^p for a nonzero exponent")]
    NotNormalized,
}

/// Errors that may occur.
#[derive(Error, Debug)]
pub enum FloatError {
    /// Error that occurs when an operand is not a well-formed value.
    #[error("The {operand} operand is malformed: {reason}!")]
    MalformedOperand {
        /// The rejected operand.
        operand: Operand,
        /// The violated rule.
        reason: MalformedReason,
    },
    /// Error that occurs when the result exponent does not fit the format.
    #[error("The result exponent reaches 2^{exponent_bits}!")]
    ExponentOverflow {
        /// Exponent bits of the format.
        exponent_bits: u32,
    },
    /// Error that occurs when a format cannot be stored in the chosen integer type.
    #[error("Format with k = {exponent_bits} and p = {precision} is not supported by a {storage_bits}-bit integer!")]
    UnsupportedFormat {
        /// Exponent bits of the format.
        exponent_bits: u32,
        /// Stored significand bits of the format.
        precision: u32,
        /// Bits of the storage type.
        storage_bits: u32,
    },
    /// Error that occurs when a decimal signal cannot be parsed into the storage type.
    #[error("`{value}` is not a decimal integer of the storage type!")]
    ParseErr {
        /// The signal text.
        value: String,
    },
    /// Error that occurs when a value has no counterpart in the target representation.
    #[error("{value} is not representable in the target format!")]
    NotRepresentable {
        /// The value being converted.
        value: String,
    },
    /// Error that occurs when signal JSON cannot be decoded.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
