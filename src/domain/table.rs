// ============================================================================
// Table Domain Model
// Immutable (period, exact value) rows
// ============================================================================

use crate::error::{SummaryError, SummaryResult};
use crate::interfaces::ExactDecimal;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One observation: a caller-supplied period label and its exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Row<T = Decimal> {
    /// Period label from the source (e.g. week number). Not the row position.
    pub period: i64,

    /// Exact value for that period
    pub value: T,
}

impl<T> Row<T> {
    pub fn new(period: i64, value: T) -> Self {
        Self { period, value }
    }
}

/// An ordered, immutable sequence of rows.
///
/// Rows keep source order and are addressed by ordinal position. There are
/// no mutating methods: once built, a table can be shared freely between
/// readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T = Decimal> {
    rows: Vec<Row<T>>,
}

impl<T: ExactDecimal> Table<T> {
    /// Build a table from values that are already exact.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (i64, T)>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|(period, value)| Row::new(period, value))
                .collect(),
        }
    }

    /// Build a table from decimal text, parsing each value exactly.
    ///
    /// # Errors
    /// Returns `SummaryError::Parse` naming the first row whose text is
    /// rejected.
    pub fn parse_rows<'a, I>(rows: I) -> SummaryResult<Self>
    where
        I: IntoIterator<Item = (i64, &'a str)>,
    {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, (period, raw))| {
                T::parse_exact(raw)
                    .map(|value| Row::new(period, value))
                    .map_err(|reason| SummaryError::Parse {
                        row: index,
                        field: "value".to_string(),
                        raw: raw.to_string(),
                        reason,
                    })
            })
            .collect::<SummaryResult<Vec<_>>>()?;

        Ok(Self { rows })
    }

    pub(crate) fn from_parsed(rows: Vec<Row<T>>) -> Self {
        Self { rows }
    }

    /// A new table with the same rows in reverse order.
    pub fn reversed(&self) -> Self {
        Self {
            rows: self.rows.iter().rev().copied().collect(),
        }
    }

    #[inline]
    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the value column in row order.
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.rows.iter().map(|row| row.value)
    }

    /// Iterate over the period column in row order.
    pub fn periods(&self) -> impl Iterator<Item = i64> + '_ {
        self.rows.iter().map(|row| row.period)
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}
