// ============================================================================
// Summary Domain Model
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The three summary statistics of a table, all computed exactly
/// (the top period may come from the lossy lookup when configured).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Summary<T = Decimal> {
    /// Number of rows aggregated
    pub rows: usize,

    /// Exact sum of the value column
    pub total: T,

    /// Sum divided by the row count
    pub average: T,

    /// Period of the first row holding the maximum value
    pub top_period: i64,
}

#[cfg(feature = "serde")]
impl<T: Serialize> Summary<T> {
    /// Render as JSON with decimals written as exact strings.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<T: fmt::Display> fmt::Display for Summary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows={} total={} average={} top_period={}",
            self.rows, self.total, self.average, self.top_period
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_display() {
        let summary = Summary {
            rows: 2,
            total: Decimal::from_str("3.3").unwrap(),
            average: Decimal::from_str("1.65").unwrap(),
            top_period: 1,
        };
        assert_eq!(
            summary.to_string(),
            "rows=2 total=3.3 average=1.65 top_period=1"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_keeps_exact_strings() {
        let summary = Summary {
            rows: 2,
            total: Decimal::from_str("3.3").unwrap(),
            average: Decimal::from_str("1.65").unwrap(),
            top_period: 1,
        };
        let json = summary.to_json().unwrap();
        assert!(json.contains("\"total\": \"3.3\""));
        assert!(json.contains("\"average\": \"1.65\""));
    }
}
