// ============================================================================
// CSV Table Loader
// Reads a delimited (period, value) file into an exact-decimal table
// ============================================================================

use crate::domain::{Row, SummaryConfig, Table};
use crate::error::{SummaryError, SummaryResult};
use crate::interfaces::ExactDecimal;
use crate::numeric::NumericError;
use csv::StringRecord;
use std::fs::File;
use std::io;
use std::num::IntErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Loads tables whose values are parsed straight from text into an exact
/// decimal type. No value ever passes through `f64`.
///
/// # Example
/// ```
/// use decimal_summary::domain::{SummaryConfig, Table};
/// use decimal_summary::loader::TableLoader;
///
/// let loader = TableLoader::new(SummaryConfig::sales()).unwrap();
/// let table: Table = loader
///     .load_reader("week,sales\n0,1.1\n1,2.2\n".as_bytes())
///     .unwrap();
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TableLoader {
    config: SummaryConfig,
}

impl TableLoader {
    /// Create a loader, rejecting an invalid configuration up front.
    pub fn new(config: SummaryConfig) -> SummaryResult<Self> {
        config.validate().map_err(SummaryError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Load a table from a file on disk.
    pub fn load_path<T: ExactDecimal>(&self, path: impl AsRef<Path>) -> SummaryResult<Table<T>> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening table source");

        let file = File::open(path).map_err(|source| SummaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_reader(file)
    }

    /// Load a table from any byte stream. The reader is buffered internally.
    pub fn load_reader<T: ExactDecimal, R: io::Read>(&self, reader: R) -> SummaryResult<Table<T>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .trim(csv::Trim::All)
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let period_index = column_index(&headers, &self.config.period_column)?;
        let value_index = column_index(&headers, &self.config.value_column)?;

        let mut rows = Vec::new();
        for (row, record) in csv_reader.records().enumerate() {
            let record = record?;

            let raw_period = record.get(period_index).unwrap_or_default();
            let period = parse_period(raw_period).map_err(|reason| SummaryError::Parse {
                row,
                field: self.config.period_column.clone(),
                raw: raw_period.to_string(),
                reason,
            })?;

            let raw_value = record.get(value_index).unwrap_or_default();
            let value = T::parse_exact(raw_value).map_err(|reason| SummaryError::Parse {
                row,
                field: self.config.value_column.clone(),
                raw: raw_value.to_string(),
                reason,
            })?;

            rows.push(Row::new(period, value));
        }

        info!(
            rows = rows.len(),
            period_column = %self.config.period_column,
            value_column = %self.config.value_column,
            "loaded table"
        );
        Ok(Table::from_parsed(rows))
    }
}

fn column_index(headers: &StringRecord, name: &str) -> SummaryResult<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| SummaryError::MissingColumn {
            column: name.to_string(),
        })
}

fn parse_period(raw: &str) -> Result<i64, NumericError> {
    raw.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => NumericError::Overflow,
        IntErrorKind::NegOverflow => NumericError::Underflow,
        _ => NumericError::InvalidInput,
    })
}
