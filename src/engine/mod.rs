// ============================================================================
// Engine Module
// Contains the decimal-preserving aggregation logic
// ============================================================================

mod aggregator;

pub use aggregator::{fold_exact, DecimalAggregator};
