// ============================================================================
// Integer Rounding
// Half-to-even division shared by the exact value types
// ============================================================================

use std::cmp::Ordering;

/// Divide `numerator` by a positive `divisor`, rounding half-to-even.
///
/// The remainder decides the rounding, so the result is rounded exactly
/// once. Returns `None` if `divisor` is not positive or an intermediate
/// step overflows.
pub(crate) fn div_half_even(numerator: i128, divisor: i128) -> Option<i128> {
    if divisor <= 0 {
        return None;
    }

    let quotient = numerator.checked_div(divisor)?;
    let remainder = numerator.checked_rem(divisor)?;

    let round_away = match remainder.checked_abs()?.checked_mul(2)?.cmp(&divisor) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => quotient % 2 != 0,
    };
    if round_away {
        quotient.checked_add(numerator.signum())
    } else {
        Some(quotient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_go_to_even() {
        assert_eq!(div_half_even(5, 2), Some(2));
        assert_eq!(div_half_even(15, 2), Some(8));
        assert_eq!(div_half_even(-15, 2), Some(-8));
        assert_eq!(div_half_even(-5, 2), Some(-2));
    }

    #[test]
    fn test_non_ties() {
        assert_eq!(div_half_even(100, 3), Some(33));
        assert_eq!(div_half_even(200, 3), Some(67));
        assert_eq!(div_half_even(-200, 3), Some(-67));
        assert_eq!(div_half_even(9, 3), Some(3));
    }

    #[test]
    fn test_rejects_bad_divisor() {
        assert_eq!(div_half_even(1, 0), None);
        assert_eq!(div_half_even(1, -2), None);
    }
}
