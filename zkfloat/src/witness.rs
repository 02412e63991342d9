//! Decimal input and output signals of an addition.
//!
//! The layout matches the signals of the add circuit, for example
//!
//! ```json
//! { "e": ["104", "106"], "m": ["12444445", "14159003"] }
//! ```
//!
//! evaluates to `{ "e_out": "107", "m_out": "8635057" }` in the single format.

use serde::{Deserialize, Serialize};

use crate::{FloatAdder, FloatError, FloatValue, UnsignedInteger};

/// Input signals: the exponents `e` and significands `m` of both operands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddInput {
    /// Exponents of the left and right operand.
    pub e: [String; 2],
    /// Significands of the left and right operand.
    pub m: [String; 2],
}

/// Output signals: the exponent and significand of the sum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddOutput {
    /// Exponent of the sum.
    pub e_out: String,
    /// Significand of the sum.
    pub m_out: String,
}

/// Parses a decimal signal into `T`.
///
/// A signal is a non-empty run of ASCII digits; signs and whitespace are rejected.
pub fn parse_signal<T: UnsignedInteger>(signal: &str) -> Result<T, FloatError> {
    let parse_err = || FloatError::ParseErr {
        value: signal.to_owned(),
    };

    if signal.is_empty() || !signal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(parse_err());
    }
    T::from_str_radix(signal, 10).map_err(|_| parse_err())
}

impl AddInput {
    /// Creates the input signals of `lhs + rhs`.
    pub fn new<T: UnsignedInteger>(lhs: &FloatValue<T>, rhs: &FloatValue<T>) -> Self {
        Self {
            e: [lhs.exponent.to_string(), rhs.exponent.to_string()],
            m: [lhs.significand.to_string(), rhs.significand.to_string()],
        }
    }

    /// Decodes input signals from JSON.
    pub fn from_json(json: &str) -> Result<Self, FloatError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses both operands.
    pub fn operands<T: UnsignedInteger>(
        &self,
    ) -> Result<(FloatValue<T>, FloatValue<T>), FloatError> {
        let lhs = FloatValue::new(parse_signal(&self.e[0])?, parse_signal(&self.m[0])?);
        let rhs = FloatValue::new(parse_signal(&self.e[1])?, parse_signal(&self.m[1])?);
        Ok((lhs, rhs))
    }
}

impl AddOutput {
    /// Creates the output signals of `value`.
    pub fn new<T: UnsignedInteger>(value: &FloatValue<T>) -> Self {
        Self {
            e_out: value.exponent.to_string(),
            m_out: value.significand.to_string(),
        }
    }

    /// Encodes output signals as JSON.
    pub fn to_json(&self) -> Result<String, FloatError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses the sum.
    pub fn value<T: UnsignedInteger>(&self) -> Result<FloatValue<T>, FloatError> {
        Ok(FloatValue::new(
            parse_signal(&self.e_out)?,
            parse_signal(&self.m_out)?,
        ))
    }
}

impl<T: UnsignedInteger> FloatAdder<T> {
    /// Evaluates the addition described by `input`.
    pub fn evaluate(&self, input: &AddInput) -> Result<AddOutput, FloatError> {
        let (lhs, rhs) = input.operands::<T>()?;
        self.add(&lhs, &rhs).map(|sum| AddOutput::new(&sum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signal() {
        assert_eq!(parse_signal::<u32>("43").unwrap(), 43);
        assert_eq!(
            parse_signal::<u64>("7807742059002284").unwrap(),
            7807742059002284
        );

        assert_eq!(parse_signal::<u32>("007").unwrap(), 7);

        for bad in ["", "+5", "-1", " 5", "4.5", "0x10", "4294967296"] {
            assert!(matches!(
                parse_signal::<u32>(bad),
                Err(FloatError::ParseErr { .. })
            ));
        }
    }

    #[test]
    fn test_evaluate() {
        let adder = FloatAdder::single();
        let input =
            AddInput::from_json(r#"{ "e": ["104", "106"], "m": ["12444445", "14159003"] }"#)
                .unwrap();

        let output = adder.evaluate(&input).unwrap();
        assert_eq!(
            output,
            AddOutput {
                e_out: "107".into(),
                m_out: "8635057".into(),
            }
        );
        assert_eq!(output.to_json().unwrap(), r#"{"e_out":"107","m_out":"8635057"}"#);
        assert_eq!(output.value::<u32>().unwrap(), FloatValue::new(107, 8635057));
    }

    #[test]
    fn test_evaluate_rejects() {
        let adder = FloatAdder::single();

        let input = AddInput::from_json(r#"{ "e": ["0", "0"], "m": ["0", "10566265"] }"#).unwrap();
        assert!(matches!(
            adder.evaluate(&input),
            Err(FloatError::MalformedOperand { .. })
        ));

        assert!(matches!(
            AddInput::from_json(r#"{ "e": ["0"], "m": ["0", "1"] }"#),
            Err(FloatError::Json(_))
        ));
    }

    #[test]
    fn test_input_new() {
        let input = AddInput::new(&FloatValue::new(43u32, 11672136), &FloatValue::new(5, 10566265));
        assert_eq!(input.e, ["43".to_string(), "5".to_string()]);
        assert_eq!(input.m, ["11672136".to_string(), "10566265".to_string()]);
    }
}
