// ============================================================================
// Summary Configuration
// Input layout and aggregation behavior
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fractional digits kept when an average does not terminate.
pub const DEFAULT_AVERAGE_SCALE: u32 = 10;

/// Largest scale `rust_decimal::Decimal` can represent.
pub const MAX_AVERAGE_SCALE: u32 = 28;

// ============================================================================
// Argmax Strategy
// ============================================================================

/// How the first-maximum lookup compares values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArgmaxStrategy {
    /// Compare the exact values directly, one row at a time
    #[default]
    Exact,

    /// Compare a private `f64` copy of the values using the vectorized
    /// max search. The conversion is lossy: values closer together than
    /// `f64` resolution at their magnitude may compare equal, and the
    /// earlier row then wins.
    LossyFloat,
}

// ============================================================================
// Summary Configuration
// ============================================================================

/// Configuration for loading and summarizing a table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SummaryConfig {
    /// Header name of the integer period column
    pub period_column: String,

    /// Header name of the decimal value column
    pub value_column: String,

    /// Field delimiter byte
    pub delimiter: u8,

    /// Rounding scale for non-terminating averages (half-to-even)
    pub average_scale: u32,

    /// First-maximum lookup strategy
    pub argmax_strategy: ArgmaxStrategy,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            period_column: "period".to_string(),
            value_column: "value".to_string(),
            delimiter: b',',
            average_scale: DEFAULT_AVERAGE_SCALE,
            argmax_strategy: ArgmaxStrategy::Exact,
        }
    }
}

impl SummaryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weekly sales layout: `week,sales`
    pub fn sales() -> Self {
        Self::default().with_columns("week", "sales")
    }

    /// Builder method: Set the period and value header names
    pub fn with_columns(mut self, period: impl Into<String>, value: impl Into<String>) -> Self {
        self.period_column = period.into();
        self.value_column = value.into();
        self
    }

    /// Builder method: Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder method: Set the rounding scale for averages
    pub fn with_average_scale(mut self, scale: u32) -> Self {
        self.average_scale = scale;
        self
    }

    /// Builder method: Set the first-maximum strategy
    pub fn with_argmax_strategy(mut self, strategy: ArgmaxStrategy) -> Self {
        self.argmax_strategy = strategy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.period_column.trim().is_empty() {
            return Err("Period column name cannot be empty".to_string());
        }
        if self.value_column.trim().is_empty() {
            return Err("Value column name cannot be empty".to_string());
        }
        if self.period_column == self.value_column {
            return Err("Period and value columns must differ".to_string());
        }

        if !self.delimiter.is_ascii() || matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            return Err("Delimiter must be an ASCII byte other than a quote or newline".to_string());
        }

        if self.average_scale > MAX_AVERAGE_SCALE {
            return Err(format!(
                "Average scale must be at most {}",
                MAX_AVERAGE_SCALE
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SummaryConfig::default();

        assert_eq!(config.period_column, "period");
        assert_eq!(config.value_column, "value");
        assert_eq!(config.delimiter, b',');
        assert_eq!(config.average_scale, DEFAULT_AVERAGE_SCALE);
        assert_eq!(config.argmax_strategy, ArgmaxStrategy::Exact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sales_preset() {
        let config = SummaryConfig::sales();
        assert_eq!(config.period_column, "week");
        assert_eq!(config.value_column, "sales");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SummaryConfig::new()
            .with_columns("day", "amount")
            .with_delimiter(b';')
            .with_average_scale(4)
            .with_argmax_strategy(ArgmaxStrategy::LossyFloat);

        assert_eq!(config.period_column, "day");
        assert_eq!(config.delimiter, b';');
        assert_eq!(config.average_scale, 4);
        assert_eq!(config.argmax_strategy, ArgmaxStrategy::LossyFloat);
    }

    #[test]
    fn test_validation() {
        assert!(SummaryConfig::new().with_columns("", "value").validate().is_err());
        assert!(SummaryConfig::new().with_columns("x", "x").validate().is_err());
        assert!(SummaryConfig::new().with_delimiter(b'"').validate().is_err());
        assert!(SummaryConfig::new().with_delimiter(0xE9).validate().is_err());
        assert!(SummaryConfig::new().with_average_scale(29).validate().is_err());
        assert!(SummaryConfig::new().with_average_scale(28).validate().is_ok());
    }
}
