// ============================================================================
// Domain Models Module
// Contains the table, its configuration and the summary it produces
// ============================================================================

pub mod config;
pub mod summary;
pub mod table;

pub use config::{ArgmaxStrategy, SummaryConfig, DEFAULT_AVERAGE_SCALE, MAX_AVERAGE_SCALE};
pub use summary::Summary;
pub use table::{Row, Table};
