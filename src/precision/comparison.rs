// ============================================================================
// Float vs Decimal Comparison
// Evaluates the same expression in f64 and in exact decimal
// ============================================================================

use crate::interfaces::ExactDecimal;
use crate::numeric::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::fmt;

/// The result of one expression evaluated two ways.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecisionComparison {
    /// Left-to-right evaluation in binary floating point
    pub float_result: f64,

    /// Left-to-right evaluation in exact decimal
    pub decimal_result: Decimal,
}

impl PrecisionComparison {
    /// How far the float result drifted from the exact one, measured in
    /// `f64`. Zero only when the float evaluation happened to be exact.
    pub fn float_residual(&self) -> f64 {
        self.float_result - self.decimal_result.to_f64_lossy()
    }

    /// Whether the float result is the `f64` nearest to `expected`.
    pub fn float_matches(&self, expected: &str) -> NumericResult<bool> {
        Ok(self.float_result == parse_float(expected)?)
    }

    /// Whether the decimal result equals `expected` exactly.
    pub fn decimal_matches(&self, expected: &str) -> NumericResult<bool> {
        Ok(self.decimal_result == Decimal::parse_exact(expected)?)
    }
}

impl fmt::Display for PrecisionComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f64: {} | decimal: {}", self.float_result, self.decimal_result)
    }
}

/// Evaluate `add[0] + add[1] + ... - subtract[0] - subtract[1] - ...`
/// left to right, once in `f64` and once in exact decimal.
///
/// # Example
/// ```
/// use decimal_summary::precision::compare;
///
/// let c = compare(&["1.1", "2.2"], &[]).unwrap();
/// assert_eq!(c.float_result.to_string(), "3.3000000000000003");
/// assert_eq!(c.decimal_result.to_string(), "3.3");
/// ```
///
/// # Errors
/// Returns `InvalidInput` for text that is not a number and `Overflow` /
/// `Underflow` if the decimal evaluation leaves its range.
pub fn compare(add: &[&str], subtract: &[&str]) -> NumericResult<PrecisionComparison> {
    let mut float_result = 0.0f64;
    let mut decimal_result = Decimal::ZERO;

    for term in add {
        float_result += parse_float(term)?;
        decimal_result = decimal_result.exact_add(Decimal::parse_exact(term)?)?;
    }
    for term in subtract {
        float_result -= parse_float(term)?;
        decimal_result = decimal_result.exact_add(-Decimal::parse_exact(term)?)?;
    }

    Ok(PrecisionComparison {
        float_result,
        decimal_result,
    })
}

/// The decimal a float literal really holds.
///
/// Building a decimal from `f64` keeps the binary representation error:
/// `0.1` comes back as `0.1000000000000000055511151231`. Exact values must
/// be built from text instead.
pub fn decimal_from_float_literal(value: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(value)
}

fn parse_float(text: &str) -> NumericResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| NumericError::InvalidInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_point_one_plus_two_point_two() {
        let c = compare(&["1.1", "2.2"], &[]).unwrap();

        assert_eq!(c.float_result, 3.3000000000000003);
        assert!(!c.float_matches("3.3").unwrap());
        assert!(c.float_residual() > 0.0);

        assert_eq!(c.decimal_result.to_string(), "3.3");
        assert!(c.decimal_matches("3.3").unwrap());
    }

    #[test]
    fn test_tenths_minus_three_tenths() {
        let c = compare(&["0.1", "0.1", "0.1"], &["0.3"]).unwrap();

        assert_eq!(c.float_result, 5.551115123125783e-17);
        assert_ne!(c.float_result, 0.0);

        assert_eq!(c.decimal_result.to_string(), "0.0");
        assert!(c.decimal_result.is_zero());
        assert!(c.decimal_matches("0").unwrap());
        assert_eq!(c.float_residual(), c.float_result);
    }

    #[test]
    fn test_exact_in_both() {
        let c = compare(&["0.5", "0.25"], &["0.125"]).unwrap();
        assert_eq!(c.float_residual(), 0.0);
        assert!(c.float_matches("0.625").unwrap());
        assert!(c.decimal_matches("0.625").unwrap());
    }

    #[test]
    fn test_invalid_term() {
        assert_eq!(compare(&["1.1", "x"], &[]), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_float_literal_carries_error() {
        let from_float = decimal_from_float_literal(0.1).unwrap();
        assert_ne!(from_float, Decimal::parse_exact("0.1").unwrap());

        let from_float = decimal_from_float_literal(3.3).unwrap();
        assert_ne!(from_float, Decimal::parse_exact("3.3").unwrap());

        // dyadic fractions survive
        assert_eq!(
            decimal_from_float_literal(0.25).unwrap(),
            Decimal::parse_exact("0.25").unwrap()
        );
    }

    #[test]
    fn test_display() {
        let c = compare(&["1.1", "2.2"], &[]).unwrap();
        assert_eq!(c.to_string(), "f64: 3.3000000000000003 | decimal: 3.3");
    }
}
