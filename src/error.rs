// ============================================================================
// Summary Errors
// Crate-level error taxonomy for loading and aggregation
// ============================================================================

use crate::numeric::NumericError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by loading a table or querying it.
///
/// Every failure is a caller input problem: nothing is retried and no
/// partial result is returned.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// A period or value field could not be parsed at load time
    #[error("row {row}: cannot parse {field} {raw:?}: {reason}")]
    Parse {
        /// 0-based data row index (the header is not counted)
        row: usize,
        /// Name of the column the field came from
        field: String,
        /// The field text as it appeared in the source
        raw: String,
        /// Why the text was rejected
        reason: NumericError,
    },

    /// An aggregate was requested over a table with no rows
    #[error("cannot compute {operation} of an empty table")]
    EmptyTable {
        /// The query that was attempted
        operation: &'static str,
    },

    /// The header row lacks a required column
    #[error("missing column {column:?} in header")]
    MissingColumn {
        /// The configured column name that was not found
        column: String,
    },

    /// Arithmetic left the representable range
    #[error("numeric error: {0}")]
    Numeric(#[from] NumericError),

    /// Malformed delimited input (bad UTF-8, wrong field count, ...)
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input file could not be opened
    #[error("cannot open {}: {source}", path.display())]
    Io {
        /// The path that was passed to the loader
        path: PathBuf,
        /// The underlying open failure
        #[source]
        source: std::io::Error,
    },

    /// Configuration rejected by `SummaryConfig::validate`
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for loading and aggregation
pub type SummaryResult<T> = Result<T, SummaryError>;
