// ============================================================================
// Precision Module
// Side-by-side float and decimal evaluation
// ============================================================================

mod comparison;

pub use comparison::{compare, decimal_from_float_literal, PrecisionComparison};
