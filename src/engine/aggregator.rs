// ============================================================================
// Decimal-Preserving Aggregator
// Sum, average and first-maximum lookup without widening to f64
// ============================================================================

use crate::domain::{ArgmaxStrategy, Summary, SummaryConfig, Table, DEFAULT_AVERAGE_SCALE};
use crate::error::{SummaryError, SummaryResult};
use crate::interfaces::ExactDecimal;
use crate::numeric::{NumericError, NumericResult};
use crate::simd::SimdMaxFinder;
use tracing::debug;

/// Fold a sequence with the accumulator pinned to the exact type.
///
/// Every step is an exact addition. This is slower than summing a
/// vectorized `f64` column, and that is the trade: the result never picks
/// up binary rounding error and is identical for any ordering of the
/// input.
///
/// # Errors
/// Returns `Overflow` or `Underflow` if the running total leaves the
/// representable range.
pub fn fold_exact<T, I>(values: I) -> NumericResult<T>
where
    T: ExactDecimal,
    I: IntoIterator<Item = T>,
{
    values.into_iter().try_fold(T::ZERO, T::exact_add)
}

/// Stateless summarizer over an explicitly passed [`Table`].
///
/// All queries take the table by shared reference and never modify it, so
/// one table can be queried from several threads at once.
///
/// # Example
/// ```
/// use decimal_summary::domain::Table;
/// use decimal_summary::engine::DecimalAggregator;
///
/// let table: Table = Table::parse_rows([(0, "1.1"), (1, "2.2")]).unwrap();
/// let aggregator = DecimalAggregator::default();
///
/// assert_eq!(aggregator.sum(&table).unwrap().to_string(), "3.3");
/// assert_eq!(aggregator.average(&table).unwrap().to_string(), "1.65");
/// assert_eq!(aggregator.argmax_first(&table).unwrap(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalAggregator {
    average_scale: u32,
    argmax_strategy: ArgmaxStrategy,
}

impl Default for DecimalAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_AVERAGE_SCALE, ArgmaxStrategy::Exact)
    }
}

impl DecimalAggregator {
    pub fn new(average_scale: u32, argmax_strategy: ArgmaxStrategy) -> Self {
        Self {
            average_scale,
            argmax_strategy,
        }
    }

    pub fn from_config(config: &SummaryConfig) -> Self {
        Self::new(config.average_scale, config.argmax_strategy)
    }

    pub fn average_scale(&self) -> u32 {
        self.average_scale
    }

    pub fn argmax_strategy(&self) -> ArgmaxStrategy {
        self.argmax_strategy
    }

    /// Exact sum of the value column.
    ///
    /// # Errors
    /// - `EmptyTable` when the table has no rows
    /// - `Numeric` when the total overflows
    pub fn sum<T: ExactDecimal>(&self, table: &Table<T>) -> SummaryResult<T> {
        ensure_rows(table, "sum")?;
        Ok(fold_exact(table.values())?)
    }

    /// Exact sum divided by the row count.
    ///
    /// A terminating quotient is returned unchanged. A non-terminating one
    /// is rounded half-to-even to the configured average scale.
    ///
    /// # Errors
    /// - `EmptyTable` when the table has no rows
    /// - `Numeric` when the total overflows
    pub fn average<T: ExactDecimal>(&self, table: &Table<T>) -> SummaryResult<T> {
        ensure_rows(table, "average")?;
        let total = fold_exact(table.values())?;
        self.divide_by_rows(total, table.len())
    }

    /// Period of the first row whose value is greater than or equal to
    /// every other value.
    ///
    /// With [`ArgmaxStrategy::LossyFloat`] the comparison runs on a private
    /// `f64` copy of the values; the table keeps its exact values.
    ///
    /// # Errors
    /// Returns `EmptyTable` when the table has no rows.
    pub fn argmax_first<T: ExactDecimal>(&self, table: &Table<T>) -> SummaryResult<i64> {
        ensure_rows(table, "argmax")?;

        let period = match self.argmax_strategy {
            ArgmaxStrategy::Exact => exact_argmax_first(table),
            ArgmaxStrategy::LossyFloat => {
                lossy_argmax_first(table).or_else(|| exact_argmax_first(table))
            },
        };
        period.ok_or(SummaryError::EmptyTable {
            operation: "argmax",
        })
    }

    /// All three statistics in one call, summing the table once.
    pub fn summarize<T: ExactDecimal>(&self, table: &Table<T>) -> SummaryResult<Summary<T>> {
        ensure_rows(table, "summary")?;

        let total = fold_exact(table.values())?;
        let average = self.divide_by_rows(total, table.len())?;
        let top_period = self.argmax_first(table)?;

        debug!(
            rows = table.len(),
            %total,
            %average,
            top_period,
            strategy = ?self.argmax_strategy,
            "summarized table"
        );

        Ok(Summary {
            rows: table.len(),
            total,
            average,
            top_period,
        })
    }

    fn divide_by_rows<T: ExactDecimal>(&self, total: T, rows: usize) -> SummaryResult<T> {
        let count = u64::try_from(rows).map_err(|_| NumericError::Overflow)?;
        Ok(total.exact_div_count(count, self.average_scale)?)
    }
}

fn ensure_rows<T>(table: &Table<T>, operation: &'static str) -> SummaryResult<()>
where
    T: ExactDecimal,
{
    if table.is_empty() {
        return Err(SummaryError::EmptyTable { operation });
    }
    Ok(())
}

fn exact_argmax_first<T: ExactDecimal>(table: &Table<T>) -> Option<i64> {
    let mut rows = table.rows().iter();
    let first = rows.next()?;
    // strictly greater only, so the earliest of equal values stays
    let best = rows.fold(first, |best, row| if row.value > best.value { row } else { best });
    Some(best.period)
}

fn lossy_argmax_first<T: ExactDecimal>(table: &Table<T>) -> Option<i64> {
    let approx: Vec<f64> = table.values().map(T::to_f64_lossy).collect();
    SimdMaxFinder::first_max_index(&approx).map(|index| table.rows()[index].period)
}
