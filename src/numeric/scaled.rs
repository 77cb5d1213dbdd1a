// ============================================================================
// Scaled Decimal
// Exact values stored as an integer count of minor units (e.g. cents)
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding::div_half_even;
use crate::interfaces::ExactDecimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

/// Exact decimal stored as `value × 10^PLACES` in an `i64`.
///
/// This is the "multiply by a power of ten and work in integers" technique
/// with the place count carried in the type, so two amounts counted in
/// different minor units can never be added by accident.
///
/// # Type Parameter
/// - `PLACES`: Number of fractional digits (0-18). Default is 2 (cents).
///
/// # Example
/// ```
/// use decimal_summary::numeric::ScaledDecimal;
///
/// let a: ScaledDecimal<2> = "1.23".parse().unwrap();
/// let b: ScaledDecimal<2> = "2.01".parse().unwrap();
/// assert_eq!(a.checked_add(b).unwrap().to_string(), "3.24");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ScaledDecimal<const PLACES: u8 = 2>(i64);

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

impl<const P: u8> ScaledDecimal<P> {
    /// Minor units per whole unit (10^PLACES)
    pub const SCALE: i64 = pow10(P);

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// Create from a raw count of minor units (`1.23` at 2 places is `123`).
    #[inline]
    pub const fn from_minor_units(units: i64) -> Self {
        Self(units)
    }

    /// Convert an exact `Decimal` into minor units.
    ///
    /// # Errors
    /// - `PrecisionLoss` if `d` has non-zero digits beyond `PLACES`
    /// - `Overflow` if the scaled value does not fit in an `i64`
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let scaled = d
            .checked_mul(Decimal::from(Self::SCALE))
            .ok_or(NumericError::Overflow)?;
        if !scaled.fract().is_zero() {
            return Err(NumericError::PrecisionLoss);
        }
        scaled.to_i64().map(Self).ok_or(NumericError::Overflow)
    }

    /// The raw count of minor units.
    #[inline]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Convert back to `Decimal` with exactly `PLACES` fractional digits.
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, u32::from(P))
    }

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or(if rhs.0 > 0 {
            NumericError::Overflow
        } else {
            NumericError::Underflow
        })
    }

    /// Divide by a row count, rounding half-to-even at `PLACES`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `count` is zero.
    pub fn checked_div_count(self, count: u64) -> NumericResult<Self> {
        if count == 0 {
            return Err(NumericError::DivisionByZero);
        }

        let rounded = div_half_even(i128::from(self.0), i128::from(count))
            .ok_or(NumericError::Overflow)?;

        i64::try_from(rounded)
            .map(Self)
            .map_err(|_| NumericError::Overflow)
    }
}

impl<const P: u8> fmt::Debug for ScaledDecimal<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScaledDecimal<{}>({}, units={})", P, self, self.0)
    }
}

impl<const P: u8> fmt::Display for ScaledDecimal<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_decimal(), f)
    }
}

impl<const P: u8> std::str::FromStr for ScaledDecimal<P> {
    type Err = NumericError;

    /// Parse decimal text, rejecting digits beyond `PLACES`.
    ///
    /// - "3" -> 300 units at 2 places
    /// - "0.1" -> 10 units at 2 places
    /// - "0.125" -> `PrecisionLoss` at 2 places
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = <Decimal as ExactDecimal>::parse_exact(s)?;
        Self::from_decimal(d)
    }
}

impl<const P: u8> ExactDecimal for ScaledDecimal<P> {
    const ZERO: Self = Self(0);

    fn parse_exact(text: &str) -> NumericResult<Self> {
        text.parse()
    }

    fn exact_add(self, rhs: Self) -> NumericResult<Self> {
        self.checked_add(rhs)
    }

    /// The average scale is fixed by the type; `_scale` is ignored.
    fn exact_div_count(self, count: u64, _scale: u32) -> NumericResult<Self> {
        self.checked_div_count(count)
    }

    fn to_f64_lossy(self) -> f64 {
        self.to_decimal().to_f64().unwrap_or(f64::NAN)
    }
}

/// Amounts in cents
pub type Cents = ScaledDecimal<2>;
