// ============================================================================
// SIMD Optimizations Module
// Vectorized maximum search for the lossy first-max lookup
//
// Supported architectures:
// - x86_64: AVX2 (256-bit registers, 4x f64 parallel)
// - Other: Scalar fallback
// ============================================================================

pub mod max_finder;

pub use max_finder::SimdMaxFinder;
