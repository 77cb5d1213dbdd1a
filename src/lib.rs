// ============================================================================
// Decimal Summary Library
// Exact-decimal tabular summaries without floating-point drift
// ============================================================================

//! # Decimal Summary
//!
//! Summary statistics over a two-column `(period, value)` table that keep
//! exact decimal semantics from the input text to the result.
//!
//! ## Features
//!
//! - **Exact loading**: values are parsed from text straight into
//!   `rust_decimal::Decimal` (or a scaled integer), never through `f64`
//! - **Typed fold**: sums accumulate in the exact type, so the result is
//!   independent of row order and free of binary rounding error
//! - **Documented rounding**: non-terminating averages round half-to-even
//!   at a configurable scale
//! - **First-maximum lookup**: exact by default, or a lossy AVX2 path on a
//!   private `f64` copy
//!
//! ## Example
//!
//! ```rust
//! use decimal_summary::prelude::*;
//!
//! let loader = TableLoader::new(SummaryConfig::sales()).unwrap();
//! let table: Table = loader
//!     .load_reader("week,sales\n0,1.1\n1,2.2\n".as_bytes())
//!     .unwrap();
//!
//! let aggregator = DecimalAggregator::default();
//! let summary = aggregator.summarize(&table).unwrap();
//!
//! assert_eq!(summary.total.to_string(), "3.3");
//! assert_eq!(summary.average.to_string(), "1.65");
//! assert_eq!(summary.top_period, 1);
//! ```

pub mod domain;
pub mod engine;
pub mod error;
pub mod interfaces;
pub mod loader;
pub mod numeric;
pub mod precision;
pub mod simd;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ArgmaxStrategy, Row, Summary, SummaryConfig, Table};
    pub use crate::engine::{fold_exact, DecimalAggregator};
    pub use crate::error::{SummaryError, SummaryResult};
    pub use crate::interfaces::ExactDecimal;
    pub use crate::loader::TableLoader;
    pub use crate::numeric::{Cents, NumericError, ScaledDecimal};
}
