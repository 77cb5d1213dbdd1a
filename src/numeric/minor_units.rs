// ============================================================================
// Minor Units
// Integer arithmetic by stripping the decimal separator
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;

/// Largest number of fractional digits `Decimal` can represent.
const MAX_PLACES: u32 = 28;

/// An integer obtained by deleting the decimal separator from decimal text.
///
/// Deleting the separator from a number with `n` fractional digits
/// multiplies it by `10^n`, so `"1.23"` becomes `123` with two places.
/// Two values only add up correctly when they were scaled by the same
/// power of ten: `"1.23"` and `"0.125"` are counted in cents and tenths of
/// cents respectively, and adding their units gives a meaningless result.
/// [`MinorUnits::checked_add`] refuses that case instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinorUnits {
    units: i64,
    places: u32,
}

impl MinorUnits {
    /// Strip the `.` separator and read the remaining digits as an integer.
    ///
    /// # Errors
    /// - `InvalidInput` if the text is not a plain decimal number
    /// - `PrecisionLoss` if it has more fractional digits than `Decimal` holds
    /// - `Overflow` if the digits do not fit in an `i64`
    pub fn remove_separator(text: &str) -> NumericResult<Self> {
        let text = text.trim();
        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));

        if fraction.chars().any(|c| !c.is_ascii_digit()) {
            return Err(NumericError::InvalidInput);
        }
        let places = u32::try_from(fraction.len()).map_err(|_| NumericError::PrecisionLoss)?;
        if places > MAX_PLACES {
            return Err(NumericError::PrecisionLoss);
        }

        let digits = format!("{whole}{fraction}");
        let units = digits.parse::<i64>().map_err(|err| match err.kind() {
            std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
                NumericError::Overflow
            },
            _ => NumericError::InvalidInput,
        })?;

        Ok(Self { units, places })
    }

    /// The integer left after removing the separator.
    #[inline]
    pub const fn units(self) -> i64 {
        self.units
    }

    /// How many digits followed the separator.
    #[inline]
    pub const fn places(self) -> u32 {
        self.places
    }

    /// Add two values counted in the same minor unit.
    ///
    /// # Errors
    /// - `ScaleMismatch` if the operands have different place counts
    /// - `Overflow` / `Underflow` if the sum leaves the `i64` range
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        if self.places != rhs.places {
            return Err(NumericError::ScaleMismatch);
        }
        let units = self.units.checked_add(rhs.units).ok_or(if rhs.units > 0 {
            NumericError::Overflow
        } else {
            NumericError::Underflow
        })?;
        Ok(Self {
            units,
            places: self.places,
        })
    }

    /// Put the separator back: divide the units by `10^places` exactly.
    pub fn to_decimal(self) -> Decimal {
        // places <= MAX_PLACES by construction
        Decimal::new(self.units, self.places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_separator() {
        let a = MinorUnits::remove_separator("1.23").unwrap();
        assert_eq!(a.units(), 123);
        assert_eq!(a.places(), 2);

        let b = MinorUnits::remove_separator("2.01").unwrap();
        assert_eq!(b.units(), 201);

        let c = MinorUnits::remove_separator("0.125").unwrap();
        assert_eq!(c.units(), 125);
        assert_eq!(c.places(), 3);

        let whole = MinorUnits::remove_separator("42").unwrap();
        assert_eq!(whole.units(), 42);
        assert_eq!(whole.places(), 0);

        let neg = MinorUnits::remove_separator("-0.5").unwrap();
        assert_eq!(neg.units(), -5);
        assert_eq!(neg.places(), 1);
    }

    #[test]
    fn test_sum_in_cents() {
        let a = MinorUnits::remove_separator("1.23").unwrap();
        let b = MinorUnits::remove_separator("2.01").unwrap();
        let sum = a.checked_add(b).unwrap();
        assert_eq!(sum.units(), 324);
        assert_eq!(sum.to_decimal().to_string(), "3.24");
    }

    #[test]
    fn test_mixed_places_rejected() {
        let cents = MinorUnits::remove_separator("1.23").unwrap();
        let tenths_of_cents = MinorUnits::remove_separator("0.125").unwrap();
        assert_eq!(
            cents.checked_add(tenths_of_cents),
            Err(NumericError::ScaleMismatch)
        );
    }

    #[test]
    fn test_invalid_text() {
        assert_eq!(MinorUnits::remove_separator("1.2.3"), Err(NumericError::InvalidInput));
        assert_eq!(MinorUnits::remove_separator("1.-5"), Err(NumericError::InvalidInput));
        assert_eq!(MinorUnits::remove_separator(""), Err(NumericError::InvalidInput));
        assert_eq!(
            MinorUnits::remove_separator("99999999999999999999"),
            Err(NumericError::Overflow)
        );
    }
}
