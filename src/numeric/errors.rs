// ============================================================================
// Numeric Errors
// Error types for exact decimal arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur during exact decimal arithmetic and parsing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the representable maximum
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,
    /// Result below the representable minimum
    #[error("arithmetic underflow: result below minimum value")]
    Underflow,
    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,
    /// Input carries more fractional digits than the target can hold
    #[error("precision loss: conversion would lose significant digits")]
    PrecisionLoss,
    /// Input text is not a decimal number
    #[error("invalid input: could not parse value")]
    InvalidInput,
    /// Operands are counted in different minor units
    #[error("scale mismatch between operands")]
    ScaleMismatch,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
