// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod exact_decimal;

pub use exact_decimal::ExactDecimal;
