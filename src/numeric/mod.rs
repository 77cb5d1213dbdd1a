// ============================================================================
// Numeric Module
// Exact decimal building blocks shared by the loader and the aggregator
// ============================================================================
//
// This module provides:
// - NumericError: Error types for parsing and arithmetic
// - ScaledDecimal<P>: Exact value stored as an i64 count of minor units
// - MinorUnits: The "remove the separator, add integers" workaround
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Values are built from text or integers, never from f64

mod errors;
mod minor_units;
mod rounding;
mod scaled;

pub use errors::{NumericError, NumericResult};
pub use minor_units::MinorUnits;
pub(crate) use rounding::div_half_even;
pub use scaled::{Cents, ScaledDecimal};
