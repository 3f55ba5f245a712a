use std::{error, fmt};

/// Validation failures reported by quantity construction and arithmetic.
///
/// Every failure is signaled synchronously at the offending call and is
/// recoverable by the caller; invalid input is never silently coerced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantityError {
    /// A quantity was constructed without a unit.
    MissingUnit,
    /// A conversion or an explicit-target addition was invoked without a
    /// target unit.
    MissingTargetUnit,
    /// An addition was invoked without a second operand.
    MissingOperand,
    /// A value was NaN or infinite, either as input or as the result of a
    /// conversion.
    NonFiniteValue {
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUnit => f.write_str("missing unit"),
            Self::MissingTargetUnit => f.write_str("missing target unit"),
            Self::MissingOperand => f.write_str("missing second operand"),
            Self::NonFiniteValue { value } => {
                write!(f, "value must be finite, got {value}")
            }
        }
    }
}

impl error::Error for QuantityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_condition() {
        assert_eq!(QuantityError::MissingUnit.to_string(), "missing unit");
        assert_eq!(
            QuantityError::MissingTargetUnit.to_string(),
            "missing target unit"
        );
        assert_eq!(
            QuantityError::MissingOperand.to_string(),
            "missing second operand"
        );
        assert_eq!(
            QuantityError::NonFiniteValue { value: f64::NAN }.to_string(),
            "value must be finite, got NaN"
        );
    }
}
