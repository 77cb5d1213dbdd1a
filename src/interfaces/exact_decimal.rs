// ============================================================================
// Exact Decimal Interface
// The contract a value type must meet to flow through the aggregator
// ============================================================================

use crate::numeric::{div_half_even, NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// A base-10 number with no binary floating-point representation error.
///
/// Implementations are built from text, never from `f64`, and every
/// arithmetic step either stays exact or reports an error.
///
/// Implemented for [`rust_decimal::Decimal`] and
/// [`ScaledDecimal`](crate::numeric::ScaledDecimal).
pub trait ExactDecimal: Copy + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Additive identity, the starting value of every fold
    const ZERO: Self;

    /// Parse decimal text without rounding.
    ///
    /// Text carrying more digits than the type can hold is an error.
    fn parse_exact(text: &str) -> NumericResult<Self>;

    /// Exact addition.
    ///
    /// Overflow is an error, never a wrap. A sum that would need rounding
    /// to fit is `PrecisionLoss`.
    fn exact_add(self, rhs: Self) -> NumericResult<Self> {
        let sum = self.checked_add(rhs).ok_or(if rhs.is_sign_negative() {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        })?;
        // a 96-bit mantissa overflow lowers the scale instead of failing
        if sum.scale() < self.scale().max(rhs.scale()) {
            return Err(NumericError::PrecisionLoss);
        }
        Ok(sum)
    }

    fn exact_div_count(self, count: u64, scale: u32) -> NumericResult<Self> {
        if count == 0 {
            return Err(NumericError::DivisionByZero);
        }

        let divisor = Decimal::from(count);
        let quotient = self
            .checked_div(divisor)
            .ok_or(NumericError::Overflow)?;

        if quotient.checked_mul(divisor) == Some(self) {
            return Ok(with_min_scale(quotient.normalize(), self.scale()));
        }

        // the 28-digit quotient is only used when the exact integer
        // division does not fit in i128
        let rounded = round_quotient(self, count, scale).unwrap_or_else(|| {
            quotient.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven)
        });
        Ok(with_min_scale(rounded.normalize(), self.scale().min(scale)))
    }

    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

/// `value / count` rounded half-to-even at `scale`, computed from the
/// integer remainder.
fn round_quotient(value: Decimal, count: u64, scale: u32) -> Option<Decimal> {
    let mantissa = value.mantissa();
    let value_scale = value.scale();

    let (numerator, divisor) = if scale >= value_scale {
        let factor = 10i128.checked_pow(scale - value_scale)?;
        (mantissa.checked_mul(factor)?, i128::from(count))
    } else {
        let factor = 10i128.checked_pow(value_scale - scale)?;
        (mantissa, i128::from(count).checked_mul(factor)?)
    };

    let rounded = div_half_even(numerator, divisor)?;
    Decimal::try_from_i128_with_scale(rounded, scale).ok()
}

/// Pad with trailing zeros up to `scale` fractional digits.
fn with_min_scale(mut value: Decimal, scale: u32) -> Decimal {
    if value.scale() < scale {
        value.rescale(scale);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn test_parse_exact() {
        assert_eq!(Decimal::parse_exact("1.1").unwrap(), dec("1.1"));
        assert_eq!(Decimal::parse_exact("  -2.50 ").unwrap().to_string(), "-2.50");
        assert_eq!(Decimal::parse_exact("abc"), Err(NumericError::InvalidInput));
        assert_eq!(Decimal::parse_exact(""), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_parse_exact_rejects_excess_precision() {
        // 30 fractional digits cannot be held without rounding
        let text = "0.123456789012345678901234567891";
        assert!(Decimal::parse_exact(text).is_err());
    }

    #[test]
    fn test_exact_add_keeps_scale() {
        let x = dec("1.1").exact_add(dec("2.2")).unwrap();
        assert_eq!(x.to_string(), "3.3");
    }

    #[test]
    fn test_exact_add_overflow() {
        assert_eq!(Decimal::MAX.exact_add(Decimal::ONE), Err(NumericError::Overflow));
        assert_eq!(
            Decimal::MIN.exact_add(Decimal::NEGATIVE_ONE),
            Err(NumericError::Underflow)
        );
    }

    #[test]
    fn test_exact_add_rejects_silent_rounding() {
        let tiny = dec("0.0000000000000000000000000004");
        assert_eq!(dec("8").exact_add(tiny), Err(NumericError::PrecisionLoss));
        assert_eq!(
            tiny.exact_add(tiny).and_then(|t| t.exact_add(dec("8"))),
            Err(NumericError::PrecisionLoss)
        );
        // 28 fractional digits still fit next to a small whole part
        assert_eq!(
            dec("1").exact_add(tiny).unwrap().to_string(),
            "1.0000000000000000000000000004"
        );
    }

    #[test]
    fn test_div_count_terminating() {
        assert_eq!(dec("3.3").exact_div_count(2, 10).unwrap(), dec("1.65"));
        assert_eq!(dec("3.3").exact_div_count(2, 10).unwrap().to_string(), "1.65");
        // terminating quotients are not cut to the scale
        assert_eq!(dec("0.001").exact_div_count(8, 2).unwrap(), dec("0.000125"));
    }

    #[test]
    fn test_div_count_keeps_input_scale() {
        assert_eq!(dec("3.0").exact_div_count(1, 10).unwrap().to_string(), "3.0");
        assert_eq!(dec("5.00").exact_div_count(2, 10).unwrap().to_string(), "2.50");
        assert_eq!(dec("0.00").exact_div_count(3, 10).unwrap().to_string(), "0.00");
        assert_eq!(dec("2").exact_div_count(3, 4).unwrap().to_string(), "0.6667");
        assert_eq!(dec("1").exact_div_count(8, 2).unwrap().to_string(), "0.125");
    }

    #[test]
    fn test_div_count_rounds_once() {
        // the true quotient is 1000000001.49999999999999999994.., which a
        // 28-digit intermediate would carry up to the .5 tie
        let value = dec("10000000014999999998999999998");
        let rounded = value.exact_div_count(9_999_999_999_999_999_999, 0).unwrap();
        assert_eq!(rounded, dec("1000000001"));
    }

    #[test]
    fn test_div_count_non_terminating() {
        assert_eq!(dec("1").exact_div_count(3, 4).unwrap(), dec("0.3333"));
        assert_eq!(dec("2").exact_div_count(3, 4).unwrap(), dec("0.6667"));
        assert_eq!(dec("-2").exact_div_count(3, 2).unwrap(), dec("-0.67"));
    }

    #[test]
    fn test_div_count_by_zero() {
        assert_eq!(
            dec("1").exact_div_count(0, 10),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_to_f64_lossy() {
        assert_eq!(dec("2.5").to_f64_lossy(), 2.5);
        assert_eq!(dec("-0.25").to_f64_lossy(), -0.25);
    }
}
